//! Grover Controlled-Diffuser (CUs)
//!
//! The textbook Grover diffuser (Us) reflects the input register about the
//! uniform superposition, flipping the phase of |0…0⟩ with a multi-controlled
//! Z on an ancilla held at |1⟩. The controlled diffuser (CUs) targets the
//! Boolean oracle's *output* qubit instead, so the reflection itself is
//! conditioned on the oracle outcome. With CUs, Grover's search recovers all
//! satisfying assignments of the oracle rather than amplifying towards one.
//!
//! # Components
//!
//! - [`CircuitBuilder`]: the gate-append contract a circuit must offer
//!   (H, X, MCX, barrier). Implemented for [`cus_ir::Circuit`].
//! - [`apply_controlled_diffuser`]: appends the CUs gate sequence.
//! - [`count_diffuser_gates`]: closed-form gate count, `4n + 1` for `n`
//!   qubits (inputs plus output).
//! - [`grover`]: iteration helpers built on top of CUs.
//!
//! # Example
//!
//! ```rust
//! use cus_diffuser::{apply_controlled_diffuser, count_diffuser_gates};
//! use cus_ir::Circuit;
//!
//! let (mut circuit, inputs, output) = Circuit::with_oracle_registers("cus", 3);
//!
//! apply_controlled_diffuser(&mut circuit, &inputs, output, false).unwrap();
//!
//! assert_eq!(circuit.num_gates(), count_diffuser_gates(4).unwrap());
//! assert_eq!(circuit.num_gates(), 17);
//! ```

pub mod builder;
pub mod count;
pub mod diffuser;
pub mod error;
pub mod grover;

pub use builder::CircuitBuilder;
pub use count::{DiffuserGateCounts, MIN_DIFFUSER_QUBITS, count_diffuser_gates, diffuser_gate_counts};
pub use diffuser::apply_controlled_diffuser;
pub use error::{DiffuserError, DiffuserResult};
pub use grover::{apply_grover_iterations, optimal_iterations, prepare_uniform_superposition};
