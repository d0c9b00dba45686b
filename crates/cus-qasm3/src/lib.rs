//! `OpenQASM` 3 Emitter
//!
//! Serializes a [`cus_ir::Circuit`] as `OpenQASM` 3.0 source so diffuser
//! circuits can be handed to any toolchain that reads QASM.
//!
//! # Emitted Forms
//!
//! | Instruction | QASM |
//! |-------------|------|
//! | Registers | `qubit[n] q;`, `bit[m] c;` |
//! | H, X | `h q[0];`, `x q[1];` |
//! | Multi-controlled X | `ctrl(3) @ x q[0], q[1], q[2], q[3];` |
//! | Barriers | `barrier q[0], q[1];` |
//! | Measurements | `c[0] = measure q[0];` |
//!
//! Named registers are flattened into a single `q` register. The circuit
//! name is written as a comment after the header.
//!
//! # Example
//!
//! ```rust
//! use cus_ir::{Circuit, QubitId};
//! use cus_qasm3::emit;
//!
//! let mut circuit = Circuit::with_qubits("flip", 3);
//! circuit.mcx([QubitId(0), QubitId(1)], QubitId(2)).unwrap();
//!
//! let qasm = emit(&circuit).unwrap();
//! assert!(qasm.contains("OPENQASM 3.0;"));
//! assert!(qasm.contains("ctrl(2) @ x q[0], q[1], q[2];"));
//! ```

mod emitter;
mod error;

pub use emitter::{emit, write_qasm};
pub use error::{EmitError, EmitResult};
