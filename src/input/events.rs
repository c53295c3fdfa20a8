use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Types of touch events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchEventType {
    Start,
    Move,
    End,
    Cancel,
}

/// Individual touch point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    pub position: Point,
}

impl TouchPoint {
    pub fn new(id: u64, position: Point) -> Self {
        Self { id, position }
    }
}

/// A raw multi-touch event, fed in by the hosting view where the platform does
/// not auto-dispatch gestures to registered detectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub event_type: TouchEventType,
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    pub fn new(event_type: TouchEventType, touches: Vec<TouchPoint>) -> Self {
        Self { event_type, touches }
    }

    /// A single-pointer down event
    pub fn start(id: u64, position: Point) -> Self {
        Self::new(TouchEventType::Start, vec![TouchPoint::new(id, position)])
    }

    /// A single-pointer move event
    pub fn moved(id: u64, position: Point) -> Self {
        Self::new(TouchEventType::Move, vec![TouchPoint::new(id, position)])
    }

    /// A single-pointer up event
    pub fn end(id: u64, position: Point) -> Self {
        Self::new(TouchEventType::End, vec![TouchPoint::new(id, position)])
    }

    /// A single-pointer cancel event
    pub fn cancel(id: u64, position: Point) -> Self {
        Self::new(TouchEventType::Cancel, vec![TouchPoint::new(id, position)])
    }

    /// Gets the primary position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        self.touches.first().map(|t| t.position)
    }
}
