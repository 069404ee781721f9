// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::mode::JointMode;
pub use data::point::{Point, Vector};
pub use data::segment::BezierSegment;
pub use data::spline::BezierSpline;
pub use error::{SplineError, SplineResult};
