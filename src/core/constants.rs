//! Engine-wide constants for gesture handling.
//! Keeping them in a single place makes it easier to tweak controller-wide magic numbers.

/// Padding applied around a touch point when hit-testing symbols, in pixels.
/// Small symbols are much easier to grab than pixel-exact testing allows.
pub const DEFAULT_HIT_PADDING: f64 = 30.0;

/// Minimum pointer travel before a move gesture begins, in pixels.
/// Zero means the first motion sample already counts as a move.
pub const DEFAULT_MOVE_THRESHOLD: f64 = 0.0;
