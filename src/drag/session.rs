use crate::{core::geo::LatLng, traits::GestureSettings};
use serde::{Deserialize, Serialize};

/// The in-progress drag of one symbol.
///
/// `last_position` is filled on the first consumed sample; a gesture that ends
/// before any sample resolved a coordinate never fires a drag-end.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub symbol_id: String,
    pub last_position: Option<LatLng>,
}

impl DragSession {
    pub fn new(symbol_id: String) -> Self {
        Self {
            symbol_id,
            last_position: None,
        }
    }
}

/// Where the controller stands within the current gesture
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragPhase {
    /// No hit test attempted yet for this gesture
    #[default]
    Idle,
    /// Hit test ran and missed; the rest of the gesture belongs to the camera
    Passthrough,
    /// A symbol was grabbed; samples are consumed until the gesture ends
    Dragging(DragSession),
}

impl DragPhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging(_))
    }
}

/// Snapshot of the camera gesture flags, taken when a drag is acquired and
/// applied back when it ends. At most one unconsumed snapshot exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedGestureFlags {
    pub scroll: bool,
    pub rotate: bool,
    pub tilt: bool,
    pub zoom: bool,
    pub double_tap: bool,
}

impl SavedGestureFlags {
    pub fn capture(settings: &dyn GestureSettings) -> Self {
        Self {
            scroll: settings.scroll_enabled(),
            rotate: settings.rotate_enabled(),
            tilt: settings.tilt_enabled(),
            zoom: settings.zoom_enabled(),
            double_tap: settings.double_tap_enabled(),
        }
    }

    pub fn apply(&self, settings: &mut dyn GestureSettings) {
        settings.set_scroll_enabled(self.scroll);
        settings.set_rotate_enabled(self.rotate);
        settings.set_tilt_enabled(self.tilt);
        settings.set_zoom_enabled(self.zoom);
        settings.set_double_tap_enabled(self.double_tap);
    }
}
