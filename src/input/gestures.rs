use crate::{
    core::{constants::DEFAULT_MOVE_THRESHOLD, geo::Point},
    input::events::{TouchEvent, TouchEventType},
    traits::MapSurface,
};
use fxhash::FxHashMap as HashMap;
use std::time::Instant;

/// One motion sample of the tracked pointer group
#[derive(Debug, Clone, PartialEq)]
pub struct MoveSample {
    /// Current screen position of the primary pointer
    pub position: Point,
    /// Travel since the previous sample
    pub delta: Point,
}

/// Callbacks for a recognized move gesture.
///
/// `on_move` returning `true` means the listener consumed the sample and the
/// host should suppress its default camera handling for it.
pub trait MoveGestureListener {
    fn on_move_begin(&mut self, map: &mut dyn MapSurface) -> bool;
    fn on_move(&mut self, map: &mut dyn MapSurface, sample: &MoveSample) -> bool;
    fn on_move_end(&mut self, map: &mut dyn MapSurface, velocity: Point);
}

/// Configuration for move gesture recognition
#[derive(Debug, Clone)]
pub struct MoveGestureConfig {
    /// Minimum pointer travel before the gesture begins
    pub move_threshold: f64,
}

impl Default for MoveGestureConfig {
    fn default() -> Self {
        Self {
            move_threshold: DEFAULT_MOVE_THRESHOLD,
        }
    }
}

/// Touch tracking information
#[derive(Debug, Clone)]
struct TouchInfo {
    start_position: Point,
    current_position: Point,
}

/// Recognizes a single move gesture from a raw multi-touch stream and forwards
/// begin/move/end callbacks to a [`MoveGestureListener`].
///
/// Only one pointer group is tracked at a time: the first pointer down becomes
/// the primary pointer, later pointers are recorded but never start a second
/// gesture. The gesture ends when the primary pointer lifts or the stream is
/// cancelled; a cancel still delivers `on_move_end` so the listener can always
/// run its cleanup.
pub struct MoveGestureDetector {
    config: MoveGestureConfig,
    active_touches: HashMap<u64, TouchInfo>,
    primary: Option<u64>,
    began: bool,
    rejected: bool,
    last_velocity: Point,
    last_move_at: Option<Instant>,
}

impl MoveGestureDetector {
    pub fn new() -> Self {
        Self::with_config(MoveGestureConfig::default())
    }

    pub fn with_config(config: MoveGestureConfig) -> Self {
        Self {
            config,
            active_touches: HashMap::default(),
            primary: None,
            began: false,
            rejected: false,
            last_velocity: Point::default(),
            last_move_at: None,
        }
    }

    /// Processes one raw touch event. Returns `true` when the listener consumed
    /// a move sample.
    pub fn handle_event(
        &mut self,
        event: &TouchEvent,
        map: &mut dyn MapSurface,
        listener: &mut dyn MoveGestureListener,
    ) -> bool {
        match event.event_type {
            TouchEventType::Start => {
                for touch in &event.touches {
                    self.active_touches.insert(
                        touch.id,
                        TouchInfo {
                            start_position: touch.position,
                            current_position: touch.position,
                        },
                    );
                    if self.primary.is_none() {
                        self.primary = Some(touch.id);
                    }
                }
                false
            }
            TouchEventType::Move => self.process_move(event, map, listener),
            TouchEventType::End | TouchEventType::Cancel => {
                self.process_end(event, map, listener)
            }
        }
    }

    /// Resets all gesture state
    pub fn reset(&mut self) {
        self.active_touches.clear();
        self.primary = None;
        self.began = false;
        self.rejected = false;
        self.last_velocity = Point::default();
        self.last_move_at = None;
    }

    fn process_move(
        &mut self,
        event: &TouchEvent,
        map: &mut dyn MapSurface,
        listener: &mut dyn MoveGestureListener,
    ) -> bool {
        let Some(primary) = self.primary else {
            return false;
        };
        let previous = match self.active_touches.get(&primary) {
            Some(info) => info.current_position,
            None => return false,
        };

        for touch in &event.touches {
            if let Some(info) = self.active_touches.get_mut(&touch.id) {
                info.current_position = touch.position;
            }
        }

        if self.rejected || event.touches.iter().all(|t| t.id != primary) {
            return false;
        }

        let (position, start_position) = {
            let info = &self.active_touches[&primary];
            (info.current_position, info.start_position)
        };

        if !self.began {
            if position.distance_to(&start_position) < self.config.move_threshold {
                return false;
            }
            if listener.on_move_begin(map) {
                self.began = true;
            } else {
                self.rejected = true;
                return false;
            }
        }

        let delta = position.subtract(&previous);
        let now = Instant::now();
        if let Some(previous_at) = self.last_move_at {
            let dt = now.duration_since(previous_at).as_secs_f64();
            if dt > 0.0 {
                self.last_velocity = delta.multiply(1.0 / dt);
            }
        }
        self.last_move_at = Some(now);

        listener.on_move(map, &MoveSample { position, delta })
    }

    fn process_end(
        &mut self,
        event: &TouchEvent,
        map: &mut dyn MapSurface,
        listener: &mut dyn MoveGestureListener,
    ) -> bool {
        for touch in &event.touches {
            self.active_touches.remove(&touch.id);
        }

        let cancelled = event.event_type == TouchEventType::Cancel;
        let primary_done = match self.primary {
            Some(primary) => cancelled || !self.active_touches.contains_key(&primary),
            None => false,
        };

        if primary_done {
            if self.began && !self.rejected {
                let velocity = if cancelled {
                    Point::default()
                } else {
                    self.last_velocity
                };
                listener.on_move_end(map, velocity);
            }
            self.reset();
        }

        false
    }
}

impl Default for MoveGestureDetector {
    fn default() -> Self {
        Self::new()
    }
}
