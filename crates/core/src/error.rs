//! Error types for the closest pair solvers.

use thiserror::Error;

/// Primary error type for solver and input operations.
#[derive(Error, Debug)]
pub enum PairError {
    #[error("need at least 2 points, got {len}")]
    InvalidInput { len: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("invalid solver parameters: {0}")]
    InvalidParams(String),

    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for PairError.
pub type Result<T> = std::result::Result<T, PairError>;
