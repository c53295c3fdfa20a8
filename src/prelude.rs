//! Prelude module for common mapdrag types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapdrag::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    constants::{DEFAULT_HIT_PADDING, DEFAULT_MOVE_THRESHOLD},
    geo::{LatLng, Point},
};

pub use crate::input::{
    events::{TouchEvent, TouchEventType, TouchPoint},
    gestures::{MoveGestureConfig, MoveGestureDetector, MoveGestureListener, MoveSample},
};

pub use crate::drag::{
    DragController, DragListenerRegistry, DragPhase, DragSession, DraggableSymbolsManager,
    SavedGestureFlags, SymbolDragListener,
};

pub use crate::spatial::{
    hit_test::HitTester,
    index::{IndexedSymbol, SymbolIndex},
};

pub use crate::traits::{CameraGestureFlags, GestureSettings, MapSurface, RenderedFeature};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
