//! Error type shared by every fallible spline operation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// A control point index outside `[0, len)`.
    #[error("control point index {index} is out of range for a spline with {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    /// The operation would produce (or was handed) a spline that breaks the
    /// `3 * segments + 1` point layout, or a walker that cannot move.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Stored spline data whose modes or loop endpoints disagree.
    #[error("malformed spline data: {0}")]
    Malformed(String),

    #[error("parse error: {0}")]
    Parse(String),

    /// Export of a spline failed.
    #[error("serialization error: {0}")]
    Serialize(String),
}

pub type SplineResult<T> = Result<T, SplineError>;
