//! Tunables shared across the crate.

/// Distance along the X axis between the points appended by
/// [`BezierSpline::add_segment`](crate::BezierSpline::add_segment).
pub const APPEND_STEP: f64 = 1.0;

/// Number of samples taken per cubic segment when drawing a spline.
pub const DEFAULT_STEPS_PER_CURVE: usize = 10;

/// Length of the direction lines produced by the sampler.
pub const DEFAULT_DIRECTION_SCALE: f64 = 0.5;

/// Seconds a walker needs to travel the whole spline.
pub const DEFAULT_WALK_DURATION: f64 = 1.0;

/// Vectors with a squared norm below this are treated as zero-length.
pub const EPSILON: f64 = 1e-12;
