//! The controlled-diffuser gate sequence.

use cus_ir::QubitId;
use tracing::debug;

use crate::builder::CircuitBuilder;

/// Append the Grover controlled-diffuser (CUs) to `circuit`.
///
/// `inputs` are the oracle's input qubits and `output` its output qubit.
/// With `barriers` set, a barrier over all qubits is placed before and
/// after the sequence.
///
/// The appended sequence is:
///
/// 1. H on every input
/// 2. X on every input
/// 3. X, then H on the output
/// 4. MCX controlled by the inputs, targeting the output
/// 5. H, then X on the output
/// 6. X on every input
/// 7. H on every input
///
/// Steps 3 to 5 flip the phase of the all-zero input state, conditioned on
/// the output qubit rather than a dedicated ancilla.
///
/// Operands are not validated here. `inputs` should be non-empty and
/// distinct, and must not contain `output`; any violation is reported by
/// the circuit itself and returned unchanged. Gates appended before a
/// rejected call stay in the circuit.
///
/// Returns the same circuit for chaining. Calling this twice appends the
/// sequence twice.
pub fn apply_controlled_diffuser<'c, C>(
    circuit: &'c mut C,
    inputs: &[QubitId],
    output: QubitId,
    barriers: bool,
) -> Result<&'c mut C, C::Error>
where
    C: CircuitBuilder + ?Sized,
{
    debug!(
        inputs = inputs.len(),
        %output,
        barriers,
        "appending controlled diffuser"
    );

    if barriers {
        circuit.barrier_all()?;
    }

    // Rotate out of the uniform superposition.
    for &qubit in inputs {
        circuit.h(qubit)?;
    }

    for &qubit in inputs {
        circuit.x(qubit)?;
    }
    circuit.x(output)?;

    // Phase inversion of |0…0⟩: H·MCX·H on the output.
    circuit.h(output)?;
    circuit.mcx(inputs, output)?;
    circuit.h(output)?;

    // Mirror.
    circuit.x(output)?;
    for &qubit in inputs {
        circuit.x(qubit)?;
    }

    for &qubit in inputs {
        circuit.h(qubit)?;
    }

    if barriers {
        circuit.barrier_all()?;
    }

    Ok(circuit)
}
