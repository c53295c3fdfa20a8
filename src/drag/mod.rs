pub mod controller;
pub mod listeners;
pub mod session;

pub use controller::DragController;
pub use listeners::{DragListenerRegistry, SymbolDragListener};
pub use session::{DragPhase, DragSession, SavedGestureFlags};

use crate::{
    core::geo::Point,
    input::{
        events::TouchEvent,
        gestures::{MoveGestureConfig, MoveGestureDetector},
    },
    spatial::hit_test::HitTester,
    traits::MapSurface,
};
use std::sync::Arc;

/// Entry point for hosts: wires a [`MoveGestureDetector`] to a
/// [`DragController`] watching one symbol layer.
///
/// The hosting view feeds raw touch events into [`handle_touch_event`]; a
/// `true` return means the sample was consumed by a symbol drag and the host
/// should suppress its default camera handling for it.
///
/// [`handle_touch_event`]: DraggableSymbolsManager::handle_touch_event
pub struct DraggableSymbolsManager {
    detector: MoveGestureDetector,
    controller: DragController,
}

impl DraggableSymbolsManager {
    pub fn new(symbol_layer_id: impl Into<String>) -> Self {
        Self {
            detector: MoveGestureDetector::new(),
            controller: DragController::new(HitTester::new(symbol_layer_id)),
        }
    }

    /// Offset subtracted from raw pointer positions, compensating for a UI
    /// element positioned above the map.
    pub fn with_touch_area_shift(mut self, shift: Point) -> Self {
        self.controller = self.controller.with_touch_area_shift(shift);
        self
    }

    /// Overrides the hit-test padding around the touch point.
    pub fn with_hit_padding(mut self, padding: f64) -> Self {
        self.controller = self.controller.with_hit_padding(padding);
        self
    }

    pub fn with_gesture_config(mut self, config: MoveGestureConfig) -> Self {
        self.detector = MoveGestureDetector::with_config(config);
        self
    }

    /// Registers a drag observer; notified in registration order
    pub fn add_listener(&mut self, listener: Arc<dyn SymbolDragListener>) {
        self.controller.add_listener(listener);
    }

    /// Removes the first registration of `listener`
    pub fn remove_listener(&mut self, listener: &Arc<dyn SymbolDragListener>) -> bool {
        self.controller.remove_listener(listener)
    }

    /// Pass-through for raw touch events from the hosting view
    pub fn handle_touch_event(&mut self, map: &mut dyn MapSurface, event: &TouchEvent) -> bool {
        self.detector.handle_event(event, map, &mut self.controller)
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// The symbol currently being dragged, if any
    pub fn dragged_symbol(&self) -> Option<&str> {
        self.controller.dragged_symbol()
    }
}
