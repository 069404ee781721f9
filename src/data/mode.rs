//! Continuity modes attached to spline joints.

use serde::{Deserialize, Serialize};

/// How the two tangent handles around a joint are tied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JointMode {
    /// Handles move independently.
    #[default]
    Free,
    /// Handles stay collinear through the joint but keep their own lengths.
    Aligned,
    /// Handles are reflections of each other: same direction and length.
    Mirrored,
}

impl JointMode {
    /// The next mode in the `Free -> Aligned -> Mirrored -> Free` cycle, handy
    /// for editors that toggle the mode with a single key.
    pub fn next(self) -> Self {
        match self {
            Self::Free => Self::Aligned,
            Self::Aligned => Self::Mirrored,
            Self::Mirrored => Self::Free,
        }
    }
}
