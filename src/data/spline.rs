//! A piecewise cubic Bezier spline with continuity constraints between
//! segments.
//!
//! Control points are laid out as `joint, handle, handle, joint, handle, ...`,
//! so a spline with `C` segments owns `3 * C + 1` points and `C + 1` joint
//! modes. Joint `i` sits at point `3 * i`; its handles are the points directly
//! before and after it.
//!
//! The point and mode sequences are private. Every mutation goes through
//! [`BezierSpline::set_point`], [`BezierSpline::set_joint_mode`],
//! [`BezierSpline::add_segment`] or [`BezierSpline::set_loop`], each of which
//! re-applies the joint constraints before returning.
//!
//! ```rust
//! use bezier_spline::{pt, BezierSpline, JointMode};
//!
//! let mut spline = BezierSpline::new();
//! spline.add_segment();
//! assert_eq!(spline.point_count(), 7);
//!
//! spline.set_joint_mode(3, JointMode::Mirrored).unwrap();
//! spline.set_point(2, pt!(4, 1, 0)).unwrap();
//!
//! // the opposite handle is now the reflection of point 2 through joint 3
//! assert_eq!(spline.point(4).unwrap(), pt!(4, -1, 0));
//! ```

use crate::constants::APPEND_STEP;
use crate::data::bezier::{cubic_derivative, cubic_point};
use crate::data::mode::JointMode;
use crate::data::point::{clamp01, normalize_or_zero, Point, Vector};
use crate::data::segment::BezierSegment;
use crate::error::{SplineError, SplineResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SplineData", into = "SplineData")]
pub struct BezierSpline {
    points: Vec<Point>,
    modes: Vec<JointMode>,
    looped: bool,
}

/// Stored form of a spline. Converting back into a [`BezierSpline`] validates
/// the layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SplineData {
    points: Vec<Point>,
    modes: Vec<JointMode>,
    #[serde(default, rename = "loop")]
    looped: bool,
}

impl TryFrom<SplineData> for BezierSpline {
    type Error = SplineError;

    fn try_from(data: SplineData) -> SplineResult<Self> {
        Self::from_parts(data.points, data.modes, data.looped)
    }
}

impl From<BezierSpline> for SplineData {
    fn from(spline: BezierSpline) -> Self {
        Self {
            points: spline.points,
            modes: spline.modes,
            looped: spline.looped,
        }
    }
}

impl Default for BezierSpline {
    fn default() -> Self {
        Self::new()
    }
}

impl BezierSpline {
    /// One segment along the X axis from `(1,0,0)` to `(4,0,0)`, both joints
    /// `Free`.
    pub fn new() -> Self {
        Self {
            points: vec![
                Point::new(1.0, 0.0, 0.0),
                Point::new(2.0, 0.0, 0.0),
                Point::new(3.0, 0.0, 0.0),
                Point::new(4.0, 0.0, 0.0),
            ],
            modes: vec![JointMode::Free; 2],
            looped: false,
        }
    }

    /// Build an open spline from raw control points with every joint `Free`.
    pub fn from_points(points: Vec<Point>) -> SplineResult<Self> {
        check_layout(&points)?;
        let modes = vec![JointMode::Free; points.len() / 3 + 1];
        Self::from_parts(points, modes, false)
    }

    /// Rebuild a spline from stored data.
    ///
    /// The data is taken as-is: constraints are not re-applied, only the
    /// structural invariants are checked.
    pub fn from_parts(points: Vec<Point>, modes: Vec<JointMode>, looped: bool) -> SplineResult<Self> {
        check_layout(&points)?;

        let joints = points.len() / 3 + 1;
        if modes.len() != joints {
            return Err(SplineError::Malformed(format!(
                "{} points need {} joint modes, got {}",
                points.len(),
                joints,
                modes.len()
            )));
        }

        if looped {
            if points[0] != points[points.len() - 1] {
                return Err(SplineError::Malformed(
                    "looped spline must end where it starts".to_string(),
                ));
            }
            if modes[0] != modes[modes.len() - 1] {
                return Err(SplineError::Malformed(
                    "looped spline must share the mode of its first and last joint".to_string(),
                ));
            }
        }

        Ok(Self {
            points,
            modes,
            looped,
        })
    }

    /// Put the spline back into its initial one-segment state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    pub fn is_loop(&self) -> bool {
        self.looped
    }

    /// Read-only view of the control points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Read-only view of the joint modes, one per joint.
    pub fn modes(&self) -> &[JointMode] {
        &self.modes
    }

    pub fn point(&self, index: usize) -> SplineResult<Point> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    /// Mode of the joint that owns control point `index`.
    pub fn joint_mode(&self, index: usize) -> SplineResult<JointMode> {
        self.check_index(index)?;
        Ok(self.modes[(index + 1) / 3])
    }

    /// The cubic segment starting at joint `index`.
    pub fn segment(&self, index: usize) -> SplineResult<BezierSegment> {
        if index >= self.segment_count() {
            return Err(SplineError::IndexOutOfRange {
                index,
                len: self.segment_count(),
            });
        }
        let base = index * 3;
        Ok(BezierSegment::cubic(
            self.points[base],
            self.points[base + 1],
            self.points[base + 2],
            self.points[base + 3],
        ))
    }

    pub fn segments(&self) -> impl Iterator<Item = BezierSegment> + '_ {
        self.points
            .windows(4)
            .step_by(3)
            .map(|p| BezierSegment::cubic(p[0], p[1], p[2], p[3]))
    }

    /// Point at global parameter `t`. Values outside `[0, 1]` are clamped.
    pub fn evaluate(&self, t: f64) -> Point {
        let (base, t) = self.locate(t);
        let p = &self.points[base..base + 4];
        cubic_point(p[0], p[1], p[2], p[3], t)
    }

    /// Unnormalized derivative at global parameter `t`, relative to the
    /// segment-local parameter.
    pub fn velocity(&self, t: f64) -> Vector {
        let (base, t) = self.locate(t);
        let p = &self.points[base..base + 4];
        cubic_derivative(p[0], p[1], p[2], p[3], t)
    }

    /// Unit direction at global parameter `t`. Degenerate segments (all
    /// handles collapsed onto the joints) give the zero vector.
    pub fn tangent(&self, t: f64) -> Vector {
        normalize_or_zero(self.velocity(t))
    }

    /// Move control point `index` to `point`.
    ///
    /// Moving a joint drags both of its handles along by the same offset. In a
    /// looped spline the first and last joint are the same point, so moving
    /// either one moves both, together with the handles on both sides.
    pub fn set_point(&mut self, index: usize, point: Point) -> SplineResult<()> {
        self.check_index(index)?;
        self.move_point(index, point);
        Ok(())
    }

    /// Move a control point known to be in range, dragging handles along
    /// with a joint and keeping the loop seam closed.
    fn move_point(&mut self, index: usize, point: Point) {
        if index % 3 == 0 {
            let delta = point - self.points[index];
            let last = self.points.len() - 1;
            if self.looped {
                if index == 0 {
                    self.points[1] += delta;
                    self.points[last - 1] += delta;
                    self.points[last] = point;
                } else if index == last {
                    self.points[0] = point;
                    self.points[1] += delta;
                    self.points[index - 1] += delta;
                } else {
                    self.points[index - 1] += delta;
                    self.points[index + 1] += delta;
                }
            } else {
                if index > 0 {
                    self.points[index - 1] += delta;
                }
                if index < last {
                    self.points[index + 1] += delta;
                }
            }
        }

        self.points[index] = point;
        self.enforce_mode(index);
    }

    /// Set the mode of the joint owning control point `index`, then move the
    /// handle opposite `index` to satisfy it.
    pub fn set_joint_mode(&mut self, index: usize, mode: JointMode) -> SplineResult<()> {
        self.check_index(index)?;

        let joint = (index + 1) / 3;
        let last = self.modes.len() - 1;
        self.modes[joint] = mode;
        if self.looped {
            if joint == 0 {
                self.modes[last] = mode;
            } else if joint == last {
                self.modes[0] = mode;
            }
        }
        log::debug!("joint {} set to {:?}", joint, mode);

        self.enforce_mode(index);
        Ok(())
    }

    /// Append a segment continuing from the last joint.
    ///
    /// The new points are placed one unit apart along X; callers are expected
    /// to move them somewhere useful. The new joint inherits the mode of the
    /// previous last joint.
    pub fn add_segment(&mut self) {
        let mut point = self.points[self.points.len() - 1];
        for _ in 0..3 {
            point.x += APPEND_STEP;
            self.points.push(point);
        }

        let mode = self.modes[self.modes.len() - 1];
        self.modes.push(mode);
        self.enforce_mode(self.points.len() - 4);

        if self.looped {
            let last = self.points.len() - 1;
            self.points[last] = self.points[0];
            let last_mode = self.modes.len() - 1;
            self.modes[last_mode] = self.modes[0];
            self.enforce_mode(0);
        }

        log::debug!(
            "added segment {}, spline now has {} points",
            self.segment_count(),
            self.points.len()
        );
    }

    /// Close or open the spline.
    ///
    /// Closing copies the first joint's mode onto the last joint and snaps the
    /// last joint (and its handle) onto the first one.
    pub fn set_loop(&mut self, looped: bool) {
        self.looped = looped;
        if looped {
            let last = self.modes.len() - 1;
            self.modes[last] = self.modes[0];
            let first = self.points[0];
            self.move_point(0, first);
        }
        log::debug!("spline loop set to {}", looped);
    }

    /// Segment base index and local parameter for global parameter `t`.
    fn locate(&self, t: f64) -> (usize, f64) {
        if t >= 1.0 {
            return (self.points.len() - 4, 1.0);
        }
        let scaled = clamp01(t) * self.segment_count() as f64;
        let segment = scaled.floor();
        (segment as usize * 3, scaled - segment)
    }

    fn check_index(&self, index: usize) -> SplineResult<()> {
        if index >= self.points.len() {
            return Err(SplineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        Ok(())
    }

    /// Re-apply the mode of the joint owning point `index`, adjusting the
    /// handle on the side opposite to `index`.
    fn enforce_mode(&mut self, index: usize) {
        let joint = (index + 1) / 3;
        let mode = self.modes[joint];
        if mode == JointMode::Free || (!self.looped && (joint == 0 || joint == self.modes.len() - 1)) {
            return;
        }

        let len = self.points.len();
        let middle = joint * 3;
        let before = if middle == 0 { len - 2 } else { middle - 1 };
        let after = if middle + 1 >= len { 1 } else { middle + 1 };
        let (fixed, enforced) = if index <= middle {
            (before, after)
        } else {
            (after, before)
        };

        let mut tangent = self.points[middle] - self.points[fixed];
        if mode == JointMode::Aligned {
            let length = (self.points[enforced] - self.points[middle]).norm();
            tangent = normalize_or_zero(tangent) * length;
        }
        self.points[enforced] = self.points[middle] + tangent;

        log::trace!(
            "enforced {:?} at joint {}: fixed {}, moved {}",
            mode,
            joint,
            fixed,
            enforced
        );
    }
}

fn check_layout(points: &[Point]) -> SplineResult<()> {
    if points.len() < 4 || points.len() % 3 != 1 {
        return Err(SplineError::InvalidState(format!(
            "a spline needs 3 * segments + 1 points (at least 4), got {}",
            points.len()
        )));
    }
    Ok(())
}
