//! Export splines to various formats
//!
//! This module provides functionality to export splines to different
//! formats for storage, sharing, or visualization.
//!
//! # Available Export Formats
//!
//! - [JSON](json/index.html) - Store the control points, joint modes and loop flag
//! - [SVG path data](svg_path/index.html) - Project the spline onto the XY plane

pub mod json;
pub mod svg_path;
