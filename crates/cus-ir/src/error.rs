//! Errors reported when an append is rejected.

use thiserror::Error;

use crate::wire::QubitId;

/// Reasons a circuit refuses an instruction.
///
/// A refused instruction is never recorded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    #[error("{op}: qubit {qubit} is not allocated in this circuit")]
    QubitNotFound { qubit: QubitId, op: &'static str },

    #[error("{op}: qubit {qubit} is used more than once")]
    DuplicateQubit { qubit: QubitId, op: &'static str },

    #[error("mcx needs at least one control qubit")]
    EmptyControls,

    #[error("mcx with {count} controls exceeds the supported control count")]
    TooManyControls { count: usize },

    #[error("Failed to serialize circuit: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for circuit operations.
pub type IrResult<T> = Result<T, IrError>;
