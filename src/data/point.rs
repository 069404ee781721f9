//! Point and vector types used by every curve in the crate.

use crate::constants::EPSILON;
use nalgebra::{Point3, Vector3};

/// A control point or a point on a curve.
pub type Point = Point3<f64>;

/// A difference between two points: derivatives, tangents, handle offsets.
pub type Vector = Vector3<f64>;

/// Clamp `t` into `[0, 1]`. NaN maps to 0.
pub fn clamp01(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has no
/// usable length.
pub fn normalize_or_zero(v: Vector) -> Vector {
    let norm_squared = v.norm_squared();
    if norm_squared < EPSILON || !norm_squared.is_finite() {
        Vector::zeros()
    } else {
        v / norm_squared.sqrt()
    }
}
