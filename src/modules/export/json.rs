//! JSON export of a spline.
//!
//! ```rust
//! use bezier_spline::modules::export::json::to_json;
//! use bezier_spline::BezierSpline;
//!
//! let json = to_json(&BezierSpline::new()).unwrap();
//! assert!(json.contains("\"loop\": false"));
//! ```

use crate::data::BezierSpline;
use crate::error::{SplineError, SplineResult};

/// Pretty-printed JSON holding the points, joint modes and loop flag.
pub fn to_json(spline: &BezierSpline) -> SplineResult<String> {
    serde_json::to_string_pretty(spline).map_err(|e| SplineError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JointMode;
    use serde_json::{json, Value};

    #[test]
    fn test_json_layout() {
        let mut spline = BezierSpline::new();
        spline.set_joint_mode(0, JointMode::Aligned).unwrap();

        let value: Value = serde_json::from_str(&to_json(&spline).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "points": [[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [3.0, 0.0, 0.0], [4.0, 0.0, 0.0]],
                "modes": ["Aligned", "Free"],
                "loop": false
            })
        );
    }
}
