//! Recorded operations.

use serde::Serialize;

use crate::wire::{ClbitId, QubitId};

/// What an instruction does.
///
/// Only the operations a controlled diffuser and its read-out need are
/// modeled. `Mcx` always carries at least one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    H,
    X,
    Mcx { controls: u32 },
    Barrier,
    Measure,
}

impl Op {
    /// Lower-case mnemonic, as used in tallies and QASM.
    pub fn name(self) -> &'static str {
        match self {
            Op::H => "h",
            Op::X => "x",
            Op::Mcx { .. } => "mcx",
            Op::Barrier => "barrier",
            Op::Measure => "measure",
        }
    }

    /// Unitary gates count towards gate totals; barriers and measurements
    /// do not.
    pub fn is_gate(self) -> bool {
        matches!(self, Op::H | Op::X | Op::Mcx { .. })
    }

    /// Whether the operation takes up a layer when computing depth.
    pub(crate) fn occupies_layer(self) -> bool {
        !matches!(self, Op::Barrier)
    }
}

/// An operation together with the wires it acts on.
///
/// For `Mcx` the qubits are the controls followed by the target. For
/// `Measure`, `qubits[i]` is read into `clbits[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub op: Op,
    pub qubits: Vec<QubitId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    pub fn name(&self) -> &'static str {
        self.op.name()
    }

    pub fn is_gate(&self) -> bool {
        self.op.is_gate()
    }

    pub fn is_barrier(&self) -> bool {
        self.op == Op::Barrier
    }

    /// Control qubits of an `Mcx`; empty for every other operation.
    pub fn controls(&self) -> &[QubitId] {
        match self.op {
            Op::Mcx { .. } => &self.qubits[..self.qubits.len().saturating_sub(1)],
            _ => &[],
        }
    }

    /// Qubit a gate acts on (the last operand). `None` for barriers and
    /// measurements.
    pub fn target(&self) -> Option<QubitId> {
        if self.is_gate() {
            self.qubits.last().copied()
        } else {
            None
        }
    }
}
