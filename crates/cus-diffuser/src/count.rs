//! Closed-form gate counts for the controlled diffuser.

use tracing::warn;

use crate::error::{DiffuserError, DiffuserResult};

/// Smallest register a controlled diffuser is defined for: two inputs and
/// one output.
pub const MIN_DIFFUSER_QUBITS: usize = 3;

/// Per-gate breakdown of one controlled diffuser over `qubits` qubits.
///
/// Barriers are not gates and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffuserGateCounts {
    /// Total qubits (inputs plus output).
    pub qubits: usize,
    /// Hadamard gates: two layers over inputs plus two on the output.
    pub hadamard: usize,
    /// Pauli-X gates: two layers over inputs plus two on the output.
    pub pauli_x: usize,
    /// Multi-controlled X gates.
    pub mcx: usize,
}

impl DiffuserGateCounts {
    /// Total number of gates.
    pub fn total(&self) -> usize {
        self.hadamard + self.pauli_x + self.mcx
    }
}

/// Per-gate breakdown for a diffuser over `qubit_count` qubits.
///
/// Fails with [`DiffuserError::TooFewQubits`] below
/// [`MIN_DIFFUSER_QUBITS`], logging a warning that names the count.
pub fn diffuser_gate_counts(qubit_count: usize) -> DiffuserResult<DiffuserGateCounts> {
    if qubit_count < MIN_DIFFUSER_QUBITS {
        let err = DiffuserError::TooFewQubits {
            got: qubit_count,
            min: MIN_DIFFUSER_QUBITS,
        };
        warn!(qubit_count, min = MIN_DIFFUSER_QUBITS, "{err}");
        return Err(err);
    }

    // 4n + 1 must fit before any layer is sized.
    qubit_count
        .checked_mul(4)
        .and_then(|n| n.checked_add(1))
        .ok_or(DiffuserError::GateCountOverflow {
            qubits: qubit_count,
        })?;

    let per_layer = 2 * qubit_count;
    let counts = DiffuserGateCounts {
        qubits: qubit_count,
        hadamard: per_layer,
        pauli_x: per_layer,
        mcx: 1,
    };

    Ok(counts)
}

/// Number of gates in one controlled diffuser over `qubit_count` qubits
/// (inputs plus output): `4 * qubit_count + 1`.
///
/// Matches what [`apply_controlled_diffuser`](crate::apply_controlled_diffuser)
/// appends for `qubit_count - 1` inputs with barriers disabled.
pub fn count_diffuser_gates(qubit_count: usize) -> DiffuserResult<usize> {
    diffuser_gate_counts(qubit_count).map(|counts| counts.total())
}
