pub mod events;
pub mod gestures;

// Re-export the essential types
pub use events::{TouchEvent, TouchEventType, TouchPoint};
pub use gestures::{MoveGestureConfig, MoveGestureDetector, MoveGestureListener, MoveSample};
