//! Grover iteration helpers built on the controlled diffuser.

use std::f64::consts::PI;

use cus_ir::QubitId;
use tracing::trace;

use crate::builder::CircuitBuilder;
use crate::diffuser::apply_controlled_diffuser;

/// Estimate the number of Grover iterations for a search space of
/// `2^num_inputs` states with `num_solutions` marked states.
///
/// Uses the textbook estimate `round(π/4 · sqrt(N / M))`, never less than 1.
/// `num_solutions` is clamped to `1..=N`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn optimal_iterations(num_inputs: u32, num_solutions: u64) -> usize {
    let space = 2f64.powi(i32::try_from(num_inputs).unwrap_or(i32::MAX));
    let marked = (num_solutions.max(1) as f64).min(space);
    let optimal = (PI / 4.0 * (space / marked).sqrt()).round() as usize;
    optimal.max(1)
}

/// Apply H to every input, preparing the uniform superposition the
/// diffuser reflects about.
pub fn prepare_uniform_superposition<'c, C>(
    circuit: &'c mut C,
    inputs: &[QubitId],
) -> Result<&'c mut C, C::Error>
where
    C: CircuitBuilder + ?Sized,
{
    for &qubit in inputs {
        circuit.h(qubit)?;
    }
    Ok(circuit)
}

/// Append `iterations` rounds of `oracle` followed by the controlled
/// diffuser.
///
/// `oracle` appends the Boolean oracle, writing its result into `output`.
/// The first error from either the oracle or the diffuser stops the loop
/// and is returned.
pub fn apply_grover_iterations<'c, C, F>(
    circuit: &'c mut C,
    inputs: &[QubitId],
    output: QubitId,
    iterations: usize,
    barriers: bool,
    mut oracle: F,
) -> Result<&'c mut C, C::Error>
where
    C: CircuitBuilder + ?Sized,
    F: FnMut(&mut C) -> Result<(), C::Error>,
{
    for iteration in 0..iterations {
        trace!(iteration, "grover iteration");
        oracle(&mut *circuit)?;
        apply_controlled_diffuser(&mut *circuit, inputs, output, barriers)?;
    }
    Ok(circuit)
}
