//! # mapdrag
//!
//! A draggable-symbol gesture controller for interactive map engines.
//!
//! This library turns a raw multi-touch move gesture stream into semantically
//! meaningful "drag a specific map symbol" events, while cooperating with (and
//! temporarily suspending) the map's own pan/zoom/rotate/tilt gesture handling.
//! The map itself stays external: projection, rendered-feature queries, and the
//! camera gesture flags are reached through the [`traits::MapSurface`] seam.

pub mod core;
pub mod drag;
pub mod input;
pub mod prelude;
pub mod spatial;
pub mod traits;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    geo::{LatLng, Point},
};

pub use input::{
    events::{TouchEvent, TouchEventType, TouchPoint},
    gestures::{MoveGestureConfig, MoveGestureDetector, MoveGestureListener, MoveSample},
};

pub use drag::{
    listeners::SymbolDragListener, session::SavedGestureFlags, DraggableSymbolsManager,
};

pub use spatial::{hit_test::HitTester, index::SymbolIndex};

pub use traits::{CameraGestureFlags, GestureSettings, MapSurface, RenderedFeature};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = MapError;
