//! Error types for diffuser construction.

use thiserror::Error;

/// Errors raised by the gate counter.
///
/// The diffuser builder itself never produces these: it forwards whatever
/// error the circuit reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DiffuserError {
    /// Qubit count below the minimum a diffuser needs.
    #[error(
        "Invalid qubit count {got}: a controlled diffuser needs at least {min} qubits \
         (two or more inputs plus one output)"
    )]
    TooFewQubits {
        /// The qubit count that was requested.
        got: usize,
        /// The minimum accepted qubit count.
        min: usize,
    },

    /// Gate count does not fit in `usize`.
    #[error("Gate count for {qubits} qubits overflows")]
    GateCountOverflow {
        /// The qubit count that was requested.
        qubits: usize,
    },
}

/// Result type for diffuser operations.
pub type DiffuserResult<T> = Result<T, DiffuserError>;
