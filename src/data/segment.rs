//! Bezier segment: a single linear, quadratic or cubic curve

use crate::data::bezier::{
    cubic_derivative, cubic_point, linear_point, quadratic_derivative, quadratic_point,
};
use crate::data::point::{normalize_or_zero, Point, Vector};

/// A bezier segment of degree one to three
#[derive(Debug, Clone, PartialEq)]
pub enum BezierSegment {
    /// Straight line between two points
    Linear { points: [Point; 2] },
    /// Quadratic bezier with 3 control points
    Quadratic {
        /// Control points: start point, control point, end point
        points: [Point; 3],
    },
    /// Cubic bezier with 4 control points
    Cubic {
        /// Control points: start point, control1, control2, end point
        points: [Point; 4],
    },
}

impl Default for BezierSegment {
    /// The cubic `(1,0,0) (2,0,0) (3,0,0) (4,0,0)`, the same geometry a fresh
    /// spline starts with.
    fn default() -> Self {
        Self::cubic(
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
            Point::new(4.0, 0.0, 0.0),
        )
    }
}

impl BezierSegment {
    /// Create a line segment between two points
    pub fn line(p1: Point, p2: Point) -> Self {
        Self::Linear { points: [p1, p2] }
    }

    /// Create a quadratic segment with 3 control points
    pub fn quadratic(p1: Point, p2: Point, p3: Point) -> Self {
        Self::Quadratic {
            points: [p1, p2, p3],
        }
    }

    /// Create a cubic segment with 4 control points
    pub fn cubic(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self::Cubic {
            points: [p1, p2, p3, p4],
        }
    }

    /// Get all control points for this segment
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Linear { points } => points.to_vec(),
            Self::Quadratic { points } => points.to_vec(),
            Self::Cubic { points } => points.to_vec(),
        }
    }

    pub fn start(&self) -> Point {
        match self {
            Self::Linear { points } => points[0],
            Self::Quadratic { points } => points[0],
            Self::Cubic { points } => points[0],
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Self::Linear { points } => points[1],
            Self::Quadratic { points } => points[2],
            Self::Cubic { points } => points[3],
        }
    }

    /// Get a point on the segment at parameter t, clamped into [0, 1]
    pub fn point_at(&self, t: f64) -> Point {
        match self {
            Self::Linear { points: [p0, p1] } => linear_point(*p0, *p1, t),
            Self::Quadratic {
                points: [p0, p1, p2],
            } => quadratic_point(*p0, *p1, *p2, t),
            Self::Cubic {
                points: [p0, p1, p2, p3],
            } => cubic_point(*p0, *p1, *p2, *p3, t),
        }
    }

    /// First derivative (velocity) at parameter t, clamped into [0, 1]
    pub fn derivative_at(&self, t: f64) -> Vector {
        match self {
            Self::Linear { points: [p0, p1] } => *p1 - *p0,
            Self::Quadratic {
                points: [p0, p1, p2],
            } => quadratic_derivative(*p0, *p1, *p2, t),
            Self::Cubic {
                points: [p0, p1, p2, p3],
            } => cubic_derivative(*p0, *p1, *p2, *p3, t),
        }
    }

    /// Unit direction at parameter t. Zero where the segment is degenerate.
    pub fn direction_at(&self, t: f64) -> Vector {
        normalize_or_zero(self.derivative_at(t))
    }

    /// Generate a series of evenly spaced points along the segment, both
    /// endpoints included
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => vec![],
            1 => vec![self.start()],
            _ => (0..num_points)
                .map(|i| {
                    let t = i as f64 / (num_points - 1) as f64;
                    self.point_at(t)
                })
                .collect(),
        }
    }
}
