//! This module provides convenient macros for creating points, segments, and splines.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr, $z:expr) => {
        $crate::data::Point::new($x as f64, $y as f64, $z as f64)
    };
}

/// Macro for creating a Vector
#[macro_export]
macro_rules! vec3 {
    ($x:expr, $y:expr, $z:expr) => {
        $crate::data::Vector::new($x as f64, $y as f64, $z as f64)
    };
}

/// Macro for creating a cubic bezier segment
#[macro_export]
macro_rules! cubic {
    ([$(($x:expr, $y:expr, $z:expr)),* $(,)?]) => {{
        let points = [$($crate::pt!($x, $y, $z)),*];
        assert_eq!(points.len(), 4, "Cubic bezier requires exactly 4 points");
        $crate::data::BezierSegment::cubic(points[0], points[1], points[2], points[3])
    }};
}

/// Macro for creating a quadratic bezier segment
#[macro_export]
macro_rules! quad {
    ([$(($x:expr, $y:expr, $z:expr)),* $(,)?]) => {{
        let points = [$($crate::pt!($x, $y, $z)),*];
        assert_eq!(points.len(), 3, "Quadratic bezier requires exactly 3 points");
        $crate::data::BezierSegment::quadratic(points[0], points[1], points[2])
    }};
}

/// Macro for creating a line segment
#[macro_export]
macro_rules! line {
    ([$(($x:expr, $y:expr, $z:expr)),* $(,)?]) => {{
        let points = [$($crate::pt!($x, $y, $z)),*];
        assert_eq!(points.len(), 2, "Line segment requires exactly 2 points");
        $crate::data::BezierSegment::line(points[0], points[1])
    }};
}

/// Macro for creating an open spline with every joint `Free`.
///
/// Evaluates to a `SplineResult<BezierSpline>`, failing when the number of
/// points is not `3 * segments + 1`.
#[macro_export]
macro_rules! spline {
    ([$(($x:expr, $y:expr, $z:expr)),* $(,)?]) => {
        $crate::data::BezierSpline::from_points(vec![$($crate::pt!($x, $y, $z)),*])
    };
}
