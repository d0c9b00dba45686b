//! Circuit model for controlled-diffuser construction.
//!
//! A [`Circuit`] is a set of named qubit registers plus an append-only
//! program of [`Instruction`]s. Appends check their operands before
//! anything is recorded, and a [`WireGraph`] links each instruction to the
//! ones it follows on every wire, so depth is known at all times.
//!
//! Only what a diffuser and its read-out need is modeled: `h`, `x`, a
//! multi-controlled `mcx`, barriers and measurement.
//!
//! # Example: phase flip of |00⟩
//!
//! ```rust
//! use cus_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_qubits("flip00", 3);
//! let (a, b, t) = (QubitId(0), QubitId(1), QubitId(2));
//!
//! circuit
//!     .x(a).unwrap()
//!     .x(b).unwrap()
//!     .h(t).unwrap()
//!     .mcx([a, b], t).unwrap()
//!     .h(t).unwrap()
//!     .x(b).unwrap()
//!     .x(a).unwrap();
//!
//! assert_eq!(circuit.num_gates(), 7);
//! assert_eq!(circuit.count_ops()["mcx"], 1);
//! assert_eq!(circuit.depth(), 3);
//! ```

pub mod circuit;
pub mod error;
pub mod graph;
pub mod instruction;
pub mod wire;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use graph::WireGraph;
pub use instruction::{Instruction, Op};
pub use wire::{ClbitId, QubitId, Register, Wire};
