//! JSON import of a spline.
//!
//! The document has three fields:
//!
//! - `points`: `3 * segments + 1` control points, each `[x, y, z]`
//! - `modes`: one of `"Free"`, `"Aligned"`, `"Mirrored"` per joint
//! - `loop`: optional, defaults to `false`
//!
//! The layout is validated on the way in; constraints are not re-applied.

use crate::data::BezierSpline;
use crate::error::{SplineError, SplineResult};

pub fn from_json(data: &str) -> SplineResult<BezierSpline> {
    serde_json::from_str(data).map_err(|e| {
        log::debug!("rejected spline json: {}", e);
        SplineError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::export::json::to_json;
    use crate::{pt, JointMode};

    #[test]
    fn test_round_trip() {
        let mut spline = BezierSpline::new();
        spline.add_segment();
        spline.set_point(4, pt!(5, 2, -1)).unwrap();
        spline.set_joint_mode(3, JointMode::Mirrored).unwrap();
        spline.set_loop(true);

        let parsed = from_json(&to_json(&spline).unwrap()).unwrap();
        assert_eq!(parsed, spline);
    }

    #[test]
    fn test_loop_is_optional() {
        let spline = from_json(
            r#"{"points": [[0,0,0],[1,0,0],[2,0,0],[3,0,0]], "modes": ["Free", "Mirrored"]}"#,
        )
        .unwrap();
        assert!(!spline.is_loop());
        assert_eq!(spline.joint_mode(3).unwrap(), JointMode::Mirrored);
    }

    #[test]
    fn test_rejects_malformed_documents() {
        let cases = [
            ("not json", "garbage"),
            ("empty", r#"{"points": [], "modes": []}"#),
            (
                "five points",
                r#"{"points": [[0,0,0],[1,0,0],[2,0,0],[3,0,0],[4,0,0]], "modes": ["Free", "Free"]}"#,
            ),
            (
                "missing mode",
                r#"{"points": [[0,0,0],[1,0,0],[2,0,0],[3,0,0]], "modes": ["Free"]}"#,
            ),
            (
                "unknown mode",
                r#"{"points": [[0,0,0],[1,0,0],[2,0,0],[3,0,0]], "modes": ["Free", "Smooth"]}"#,
            ),
            (
                "open loop",
                r#"{"points": [[0,0,0],[1,0,0],[2,0,0],[3,0,0]], "modes": ["Free", "Free"], "loop": true}"#,
            ),
        ];

        for (name, data) in cases {
            assert!(
                matches!(from_json(data), Err(SplineError::Parse(_))),
                "Test case: {}",
                name
            );
        }
    }
}
