use crate::{
    core::geo::{LatLng, Point},
    drag::{
        listeners::{DragListenerRegistry, SymbolDragListener},
        session::{DragPhase, DragSession, SavedGestureFlags},
    },
    input::gestures::{MoveGestureListener, MoveSample},
    spatial::hit_test::HitTester,
    traits::MapSurface,
};
use std::sync::Arc;

/// Decides, on the first sample of each move gesture, whether the gesture drags
/// a symbol or belongs to the map's camera, and drives the drag session.
///
/// On acquisition it snapshots the camera gesture flags and disables them all;
/// the snapshot is applied back when the gesture ends. The hit test runs at
/// most once per gesture and its result sticks: later samples never re-query,
/// even if the touch point drifts onto a different symbol.
pub struct DragController {
    hit_tester: HitTester,
    touch_area_shift: Point,
    phase: DragPhase,
    saved_flags: Option<SavedGestureFlags>,
    listeners: DragListenerRegistry,
}

impl DragController {
    pub fn new(hit_tester: HitTester) -> Self {
        Self {
            hit_tester,
            touch_area_shift: Point::default(),
            phase: DragPhase::Idle,
            saved_flags: None,
            listeners: DragListenerRegistry::new(),
        }
    }

    /// Offset subtracted from raw pointer positions, compensating for UI
    /// elements positioned above the map surface.
    pub fn with_touch_area_shift(mut self, shift: Point) -> Self {
        self.touch_area_shift = shift;
        self
    }

    /// Overrides the hit-test padding around the touch point.
    pub fn with_hit_padding(mut self, padding: f64) -> Self {
        self.hit_tester = self.hit_tester.clone().with_padding(padding);
        self
    }

    pub fn add_listener(&mut self, listener: Arc<dyn SymbolDragListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_listener(&mut self, listener: &Arc<dyn SymbolDragListener>) -> bool {
        self.listeners.remove(listener)
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// The symbol currently being dragged, if any
    pub fn dragged_symbol(&self) -> Option<&str> {
        match &self.phase {
            DragPhase::Dragging(session) => Some(&session.symbol_id),
            _ => None,
        }
    }

    fn adjusted_point(&self, raw: &Point) -> Point {
        raw.subtract(&self.touch_area_shift)
    }

    fn try_acquire(&mut self, map: &mut dyn MapSurface, point: &Point) {
        match self.hit_tester.query_at(map, point) {
            Some(symbol_id) => {
                log::debug!("symbol drag acquired: {symbol_id}");
                self.saved_flags = Some(SavedGestureFlags::capture(map.gestures()));
                map.gestures_mut().set_all_gestures_enabled(false);
                self.phase = DragPhase::Dragging(DragSession::new(symbol_id));
            }
            None => {
                log::trace!("no symbol under gesture, camera keeps it");
                self.phase = DragPhase::Passthrough;
            }
        }
    }
}

impl MoveGestureListener for DragController {
    fn on_move_begin(&mut self, _map: &mut dyn MapSurface) -> bool {
        true
    }

    fn on_move(&mut self, map: &mut dyn MapSurface, sample: &MoveSample) -> bool {
        let adjusted = self.adjusted_point(&sample.position);

        if self.phase == DragPhase::Idle {
            self.try_acquire(map, &adjusted);
        }

        match &mut self.phase {
            DragPhase::Dragging(session) => {
                let position = map.screen_to_lat_lng(&adjusted);
                session.last_position = Some(position);
                let id = session.symbol_id.clone();
                self.listeners.notify_drag(&id, position);
                true
            }
            _ => false,
        }
    }

    fn on_move_end(&mut self, map: &mut dyn MapSurface, _velocity: Point) {
        // Restore the camera flags before notifying anyone: a failing listener
        // must never leave the map with its gestures disabled.
        let phase = std::mem::take(&mut self.phase);
        if let Some(flags) = self.saved_flags.take() {
            flags.apply(map.gestures_mut());
        }

        if let DragPhase::Dragging(session) = phase {
            log::debug!("symbol drag ended: {}", session.symbol_id);
            if let Some(position) = session.last_position {
                self.listeners.notify_drag_end(&session.symbol_id, position);
            }
        }
    }
}
