//! Core data structures: points, segments, joint modes and the spline itself.

pub mod bezier;
pub mod macros;
pub mod mode;
pub mod point;
pub mod segment;
pub mod spline;

pub use mode::JointMode;
pub use point::{Point, Vector};
pub use segment::BezierSegment;
pub use spline::BezierSpline;
