//! Sampling helpers for whoever draws the spline.

use crate::constants::{DEFAULT_DIRECTION_SCALE, DEFAULT_STEPS_PER_CURVE};
use crate::data::{BezierSpline, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleOptions {
    /// Samples per cubic segment. Zero is treated as one.
    pub steps_per_curve: usize,
    /// Length of each direction line.
    pub direction_scale: f64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            steps_per_curve: DEFAULT_STEPS_PER_CURVE,
            direction_scale: DEFAULT_DIRECTION_SCALE,
        }
    }
}

/// Global parameters `i / steps` for `i` in `0..=steps`, with
/// `steps = steps_per_curve * segment_count`. Nothing when that product
/// does not fit in a `usize`.
fn sample_parameters(spline: &BezierSpline, steps_per_curve: usize) -> impl Iterator<Item = f64> {
    steps_per_curve
        .max(1)
        .checked_mul(spline.segment_count())
        .into_iter()
        .flat_map(|steps| (0..=steps).map(move |i| i as f64 / steps as f64))
}

/// Points along the spline, suitable for drawing it as a line strip.
pub fn polyline(spline: &BezierSpline, steps_per_curve: usize) -> Vec<Point> {
    sample_parameters(spline, steps_per_curve)
        .map(|t| spline.evaluate(t))
        .collect()
}

/// Short line segments showing the direction of travel along the spline.
pub fn direction_lines(spline: &BezierSpline, options: &SampleOptions) -> Vec<(Point, Point)> {
    sample_parameters(spline, options.steps_per_curve)
        .map(|t| {
            let point = spline.evaluate(t);
            (point, point + spline.tangent(t) * options.direction_scale)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pt;
    use approx::assert_relative_eq;

    #[test]
    fn test_polyline() {
        let mut spline = BezierSpline::new();
        spline.add_segment();

        let points = polyline(&spline, 4);
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], pt!(1, 0, 0));
        assert_eq!(points[4], pt!(4, 0, 0));
        assert_eq!(points[8], pt!(7, 0, 0));

        assert_eq!(polyline(&spline, 0).len(), 3);
    }

    #[test]
    fn test_too_many_steps_samples_nothing() {
        let mut spline = BezierSpline::new();
        spline.add_segment();

        assert!(polyline(&spline, usize::MAX).is_empty());
        let options = SampleOptions {
            steps_per_curve: usize::MAX,
            ..SampleOptions::default()
        };
        assert!(direction_lines(&spline, &options).is_empty());
    }

    #[test]
    fn test_direction_lines() {
        let spline = BezierSpline::new();
        let lines = direction_lines(&spline, &SampleOptions::default());
        assert_eq!(lines.len(), DEFAULT_STEPS_PER_CURVE + 1);
        for (start, end) in lines {
            assert_relative_eq!((end - start).norm(), DEFAULT_DIRECTION_SCALE, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_options_from_json() {
        let options: SampleOptions = serde_json::from_str(r#"{"steps_per_curve": 3}"#).unwrap();
        assert_eq!(options.steps_per_curve, 3);
        assert_eq!(options.direction_scale, DEFAULT_DIRECTION_SCALE);
    }
}
