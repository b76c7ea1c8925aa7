//! Application-level error definitions.

use thiserror::Error;

use crate::domain::ValueObjectError;

/// Errors surfaced by the `roster` binary
///
/// A missing user is not an error anywhere in the application; these cover
/// invalid command-line input and output failures only.
#[derive(Debug, Error)]
pub enum AppError {
    /// Command-line input rejected by a value object
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValueObjectError),

    /// JSON rendering failed
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing to stdout failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
