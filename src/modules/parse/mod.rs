//! Parsing module for splines
//!
//! Now supported format:
//! - JSON:
//!     in the form of `{"points": [[0.0, 0.0, 0.0], ...], "modes": ["Free", ...], "loop": false}`.
//!     See the `json` module for more detailed information on the JSON format.
//! - SVG:
//!     Parse SVG path data on the XY plane and convert it to a spline.

pub mod json;
pub mod svg_path;
