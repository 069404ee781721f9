//! SVG path data export for segments and splines
//!
//! SVG is two-dimensional, so points are projected onto the XY plane and the
//! Z coordinate is dropped.
//!
//! # Examples
//!
//! ```rust
//! use bezier_spline::{modules::export::svg_path::ToSvgPath, spline};
//!
//! let spline = spline!([
//!     (50.0, 200.0, 0.0),    // Start point
//!     (100.0, 50.0, 0.0),    // Control point 1
//!     (200.0, 50.0, 0.0),    // Control point 2
//!     (250.0, 200.0, 0.0)    // End point
//! ])
//! .unwrap();
//!
//! assert_eq!(spline.to_svg_path(), "M50,200 C100,50,200,50,250,200");
//! ```

use crate::data::{BezierSegment, BezierSpline, Point};

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

fn move_to(point: &Point) -> String {
    format!("M{},{}", point.x, point.y)
}

/// Drawing command for a segment, without the initial move.
fn draw_command(segment: &BezierSegment) -> String {
    match segment {
        BezierSegment::Linear { points } => format!(" L{},{}", points[1].x, points[1].y),
        BezierSegment::Quadratic { points } => format!(
            " Q{},{},{},{}",
            points[1].x, points[1].y, points[2].x, points[2].y
        ),
        BezierSegment::Cubic { points } => format!(
            " C{},{},{},{},{},{}",
            points[1].x, points[1].y, points[2].x, points[2].y, points[3].x, points[3].y
        ),
    }
}

impl ToSvgPath for BezierSegment {
    fn to_svg_path(&self) -> String {
        move_to(&self.start()) + &draw_command(self)
    }
}

impl ToSvgPath for BezierSpline {
    fn to_svg_path(&self) -> String {
        let mut result = move_to(&self.points()[0]);
        for segment in self.segments() {
            result.push_str(&draw_command(&segment));
        }

        // Add closing command for looped splines
        if self.is_loop() {
            result.push('Z');
        }

        result
    }
}
