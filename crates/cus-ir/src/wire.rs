//! Qubit and classical-bit handles, and the registers that name them.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Handle to a qubit, numbered from 0 in allocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Handle to a classical bit, numbered from 0 in allocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClbitId(pub u32);

impl fmt::Display for ClbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Either kind of wire an instruction can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wire {
    Qubit(QubitId),
    Clbit(ClbitId),
}

impl From<QubitId> for Wire {
    fn from(q: QubitId) -> Self {
        Wire::Qubit(q)
    }
}

impl From<ClbitId> for Wire {
    fn from(c: ClbitId) -> Self {
        Wire::Clbit(c)
    }
}

/// A named, contiguous run of qubits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Register {
    pub name: String,
    pub start: u32,
    pub size: u32,
}

impl Register {
    fn span(&self) -> Range<u32> {
        self.start..self.start + self.size
    }

    /// Qubits of this register, lowest first.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + use<> {
        self.span().map(QubitId)
    }

    /// Whether `qubit` belongs to this register.
    pub fn contains(&self, qubit: QubitId) -> bool {
        self.span().contains(&qubit.0)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.size)
    }
}
