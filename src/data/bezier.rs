//! Closed-form Bezier polynomials.
//!
//! Every function clamps `t` into `[0, 1]` before evaluating, so callers can
//! pass segment-local parameters without range checks. All of them are pure.
//!
//! ```rust
//! use bezier_spline::data::bezier::{cubic_derivative, cubic_point};
//! use bezier_spline::pt;
//!
//! let (p0, p1, p2, p3) = (pt!(0, 0, 0), pt!(1, 2, 0), pt!(3, 2, 0), pt!(4, 0, 0));
//!
//! assert_eq!(cubic_point(p0, p1, p2, p3, 0.0), p0);
//! assert_eq!(cubic_point(p0, p1, p2, p3, 1.0), p3);
//! assert_eq!(cubic_derivative(p0, p1, p2, p3, 0.0), (p1 - p0) * 3.0);
//! ```

use crate::data::point::{clamp01, Point, Vector};

/// B(t) = p0 + t * (p1 - p0)
pub fn linear_point(p0: Point, p1: Point, t: f64) -> Point {
    let t = clamp01(t);
    p0 + (p1 - p0) * t
}

/// B(t) = (1-t)^2 * p0 + 2(1-t) * t * p1 + t^2 * p2
pub fn quadratic_point(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let t = clamp01(t);
    let t1 = 1.0 - t;
    Point::from(p0.coords * t1.powi(2) + p1.coords * (2.0 * t1 * t) + p2.coords * t.powi(2))
}

/// B'(t) = 2(1-t) * (p1 - p0) + 2t * (p2 - p1)
pub fn quadratic_derivative(p0: Point, p1: Point, p2: Point, t: f64) -> Vector {
    let t = clamp01(t);
    (p1 - p0) * (2.0 * (1.0 - t)) + (p2 - p1) * (2.0 * t)
}

/// B(t) = (1-t)^3 * p0 + 3(1-t)^2 * t * p1 + 3(1-t) * t^2 * p2 + t^3 * p3
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t = clamp01(t);
    let t1 = 1.0 - t;
    Point::from(
        p0.coords * t1.powi(3)
            + p1.coords * (3.0 * t1.powi(2) * t)
            + p2.coords * (3.0 * t1 * t.powi(2))
            + p3.coords * t.powi(3),
    )
}

/// B'(t) = 3(1-t)^2 * (p1 - p0) + 6(1-t) * t * (p2 - p1) + 3t^2 * (p3 - p2)
///
/// This is the velocity along the curve, not a unit direction.
pub fn cubic_derivative(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Vector {
    let t = clamp01(t);
    let t1 = 1.0 - t;
    (p1 - p0) * (3.0 * t1.powi(2)) + (p2 - p1) * (6.0 * t1 * t) + (p3 - p2) * (3.0 * t.powi(2))
}
