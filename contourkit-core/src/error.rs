//! Error types for contourkit

use thiserror::Error;

/// Main error type for contourkit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid extent {extent:?}: {reason}")]
    InvalidExtent { extent: [i32; 6], reason: String },

    #[error("No scalar data to contour: {0}")]
    MissingScalars(String),

    #[error("Wrong dimensionality: expected {expected}D data, got {actual}D")]
    Dimension { expected: usize, actual: usize },

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Execution aborted")]
    Aborted,
}

/// Result type alias for contourkit operations
pub type Result<T> = std::result::Result<T, Error>;
