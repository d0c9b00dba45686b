//! Count command implementation.

use anyhow::{Context, Result};

use cus_diffuser::diffuser_gate_counts;

/// Execute the count command.
pub fn execute(qubits: usize, breakdown: bool) -> Result<()> {
    let counts = diffuser_gate_counts(qubits)
        .with_context(|| format!("Cannot count diffuser gates for {qubits} qubits"))?;

    if breakdown {
        println!("Qubits:  {}", counts.qubits);
        println!("h:       {}", counts.hadamard);
        println!("x:       {}", counts.pauli_x);
        println!("mcx:     {}", counts.mcx);
        println!("Total:   {}", counts.total());
    } else {
        println!("{}", counts.total());
    }

    Ok(())
}
