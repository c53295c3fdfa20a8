//! Collaborator seams between the drag controller and the hosting map engine.
//!
//! The controller never renders or projects anything itself; everything it needs
//! from the map goes through [`MapSurface`], and the camera gesture flags it
//! suspends and restores live behind [`GestureSettings`].

use crate::core::{
    bounds::Bounds,
    geo::{LatLng, Point},
};
use serde::{Deserialize, Serialize};

/// A symbol returned by a rendered-feature query.
///
/// The `id` is the renderer's identifier for the feature; the controller treats
/// it as opaque and never constructs one itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedFeature {
    pub id: String,
    pub position: LatLng,
}

impl RenderedFeature {
    pub fn new(id: String, position: LatLng) -> Self {
        Self { id, position }
    }
}

/// Enablement flags for the map's native camera gestures.
///
/// Only the drag controller writes these while it owns a gesture; listener
/// callbacks must never touch them.
pub trait GestureSettings {
    fn scroll_enabled(&self) -> bool;
    fn set_scroll_enabled(&mut self, enabled: bool);

    fn rotate_enabled(&self) -> bool;
    fn set_rotate_enabled(&mut self, enabled: bool);

    fn tilt_enabled(&self) -> bool;
    fn set_tilt_enabled(&mut self, enabled: bool);

    fn zoom_enabled(&self) -> bool;
    fn set_zoom_enabled(&mut self, enabled: bool);

    fn double_tap_enabled(&self) -> bool;
    fn set_double_tap_enabled(&mut self, enabled: bool);

    /// Bulk toggle across every camera gesture flag.
    fn set_all_gestures_enabled(&mut self, enabled: bool) {
        self.set_scroll_enabled(enabled);
        self.set_rotate_enabled(enabled);
        self.set_tilt_enabled(enabled);
        self.set_zoom_enabled(enabled);
        self.set_double_tap_enabled(enabled);
    }
}

/// Plain flag storage implementing [`GestureSettings`], for hosts that keep
/// their gesture configuration as simple booleans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraGestureFlags {
    pub scroll: bool,
    pub rotate: bool,
    pub tilt: bool,
    pub zoom: bool,
    pub double_tap: bool,
}

impl Default for CameraGestureFlags {
    fn default() -> Self {
        Self {
            scroll: true,
            rotate: true,
            tilt: true,
            zoom: true,
            double_tap: true,
        }
    }
}

impl GestureSettings for CameraGestureFlags {
    fn scroll_enabled(&self) -> bool {
        self.scroll
    }
    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll = enabled;
    }

    fn rotate_enabled(&self) -> bool {
        self.rotate
    }
    fn set_rotate_enabled(&mut self, enabled: bool) {
        self.rotate = enabled;
    }

    fn tilt_enabled(&self) -> bool {
        self.tilt
    }
    fn set_tilt_enabled(&mut self, enabled: bool) {
        self.tilt = enabled;
    }

    fn zoom_enabled(&self) -> bool {
        self.zoom
    }
    fn set_zoom_enabled(&mut self, enabled: bool) {
        self.zoom = enabled;
    }

    fn double_tap_enabled(&self) -> bool {
        self.double_tap
    }
    fn set_double_tap_enabled(&mut self, enabled: bool) {
        self.double_tap = enabled;
    }
}

/// The hosting map, as seen from the drag controller.
///
/// `query_rendered_features` answers against the renderer's current frame state
/// and returns matches topmost-first; all methods are synchronous and
/// bounded-latency.
pub trait MapSurface {
    /// Converts a screen point to a geographic coordinate.
    fn screen_to_lat_lng(&self, point: &Point) -> LatLng;

    /// Returns the rendered symbols of `layer_id` intersecting `rect`,
    /// topmost-rendered first.
    fn query_rendered_features(&self, rect: &Bounds, layer_id: &str) -> Vec<RenderedFeature>;

    fn gestures(&self) -> &dyn GestureSettings;

    fn gestures_mut(&mut self) -> &mut dyn GestureSettings;
}
