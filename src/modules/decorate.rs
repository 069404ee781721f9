//! Evenly spaced placements along a spline.
//!
//! A decorator takes `item_count` prototypes and repeats the sequence
//! `frequency` times along the spline. Open splines get an item on both
//! ends; looped splines skip the end because it coincides with the start.

use crate::data::{BezierSpline, Point, Vector};

/// One decoration along the spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the prototype item, in `0..item_count`.
    pub item: usize,
    /// Global spline parameter of the placement.
    pub t: f64,
    pub position: Point,
    /// Unit direction of the spline at `t`, for orienting the item.
    pub direction: Vector,
}

pub fn decorate(spline: &BezierSpline, frequency: usize, item_count: usize) -> Vec<Placement> {
    if frequency == 0 || item_count == 0 {
        return vec![];
    }

    let total = match frequency.checked_mul(item_count) {
        Some(total) => total,
        None => {
            log::debug!("{} x {} decorations overflow, placing none", frequency, item_count);
            return vec![];
        }
    };
    let step = if spline.is_loop() || total == 1 {
        1.0 / total as f64
    } else {
        1.0 / (total - 1) as f64
    };

    (0..total)
        .map(|p| {
            let t = p as f64 * step;
            Placement {
                item: p % item_count,
                t,
                position: spline.evaluate(t),
                direction: spline.tangent(t),
            }
        })
        .collect()
}
