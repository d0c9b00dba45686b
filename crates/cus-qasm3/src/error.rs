//! Error types for the QASM3 emitter.

use thiserror::Error;

/// Errors that can occur while emitting QASM.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// Writing to the output sink failed.
    #[error("Failed to write QASM output: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting into the output buffer failed.
    #[error("Failed to format QASM output")]
    Fmt(#[from] std::fmt::Error),
}

/// Result type for emitting operations.
pub type EmitResult<T> = Result<T, EmitError>;
