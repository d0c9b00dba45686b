//! Build command implementation.

use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use tracing::info;

use cus_diffuser::{
    DiffuserError, MIN_DIFFUSER_QUBITS, apply_controlled_diffuser, count_diffuser_gates,
};
use cus_ir::{Circuit, QubitId};
use cus_qasm3::emit;

/// Rendering of the built circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `OpenQASM` 3.0 source.
    Qasm,
    /// JSON snapshot of the circuit.
    Json,
    /// Human-readable gate tally and depth.
    Summary,
}

/// Execute the build command.
pub fn execute(
    inputs: u32,
    barriers: bool,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<()> {
    let circuit = build_circuit(inputs, barriers)?;
    info!(
        inputs,
        barriers,
        gates = circuit.num_gates(),
        depth = circuit.depth(),
        "Built controlled diffuser"
    );

    let rendered = render(&circuit, format)?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output file: {path}"))?;
            eprintln!(
                "{} Wrote {} qubit diffuser to {}",
                style("✓").green().bold(),
                circuit.num_qubits(),
                style(path).green()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Build a circuit over `inputs` input qubits plus one output qubit and
/// apply the controlled diffuser to it.
pub fn build_circuit(inputs: u32, barriers: bool) -> Result<Circuit> {
    let (mut circuit, input_qubits, output) =
        Circuit::with_oracle_registers(format!("cus_{inputs}"), inputs);

    apply_controlled_diffuser(&mut circuit, &input_qubits, output, barriers)
        .context("Failed to apply controlled diffuser")?;

    Ok(circuit)
}

/// Render a built circuit in the requested format.
pub fn render(circuit: &Circuit, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Qasm => emit(circuit).context("Failed to emit QASM"),
        OutputFormat::Json => {
            let mut json = circuit.to_json().context("Failed to serialize circuit")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Summary => summarize(circuit),
    }
}

/// Gate tally and depth, cross-checked against the gate counter.
pub fn summarize(circuit: &Circuit) -> Result<String> {
    let ops = circuit.count_ops();
    let tally = |name: &str| ops.get(name).copied().unwrap_or(0);
    let registers: Vec<_> = circuit.registers().iter().map(ToString::to_string).collect();

    let mut out = String::new();
    writeln!(out, "Controlled diffuser: {}", circuit.name())?;
    writeln!(out, "  Registers: {}", registers.join(", "))?;
    if let Some(last) = circuit.num_qubits().checked_sub(1) {
        let output = QubitId(u32::try_from(last).context("Register too large")?);
        let owner = circuit.register_of(output).map_or("?", |reg| reg.name.as_str());
        writeln!(out, "  Output:    {output} ({owner})")?;
    }
    writeln!(
        out,
        "  Gates:     {} (h: {}, x: {}, mcx: {})",
        circuit.num_gates(),
        tally("h"),
        tally("x"),
        tally("mcx")
    )?;
    writeln!(out, "  Barriers:  {}", tally("barrier"))?;
    writeln!(out, "  Depth:     {}", circuit.depth())?;

    match check_gate_count(circuit.num_qubits(), circuit.num_gates())? {
        Some(expected) => writeln!(out, "  Expected:  {expected} (matches)")?,
        None => writeln!(out, "  Expected:  n/a (fewer than {MIN_DIFFUSER_QUBITS} qubits)")?,
    }

    Ok(out)
}

/// Compare a built gate count with the closed-form count for `num_qubits`.
///
/// Returns the expected count when it matches, `None` when the register is
/// too small for the counter, and an error on a mismatch.
pub fn check_gate_count(num_qubits: usize, built: usize) -> Result<Option<usize>> {
    match count_diffuser_gates(num_qubits) {
        Ok(expected) if expected == built => Ok(Some(expected)),
        Ok(expected) => {
            anyhow::bail!("Gate count mismatch: built {built} gates, expected {expected}")
        }
        Err(DiffuserError::TooFewQubits { .. }) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
