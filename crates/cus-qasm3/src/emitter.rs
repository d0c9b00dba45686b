//! `OpenQASM` 3 text for a circuit.

use std::fmt::{self, Write};
use std::io;

use cus_ir::{Circuit, Instruction, Op, QubitId};

use crate::error::EmitResult;

/// Emit a circuit as QASM3 source code.
pub fn emit(circuit: &Circuit) -> EmitResult<String> {
    let mut out = String::new();
    write_program(&mut out, circuit)?;
    Ok(out)
}

/// Emit a circuit as QASM3 source code into `writer`.
pub fn write_qasm(circuit: &Circuit, mut writer: impl io::Write) -> EmitResult<()> {
    writer.write_all(emit(circuit)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn write_program(out: &mut impl Write, circuit: &Circuit) -> fmt::Result {
    writeln!(out, "OPENQASM 3.0;")?;
    writeln!(out, "include \"stdgates.inc\";")?;
    writeln!(out, "// {}", comment_safe(circuit.name()))?;
    writeln!(out)?;

    if circuit.num_qubits() > 0 {
        writeln!(out, "qubit[{}] q;", circuit.num_qubits())?;
    }
    if circuit.num_clbits() > 0 {
        writeln!(out, "bit[{}] c;", circuit.num_clbits())?;
    }
    if circuit.num_qubits() + circuit.num_clbits() > 0 {
        writeln!(out)?;
    }

    for inst in circuit.instructions() {
        write_statement(out, inst)?;
    }
    Ok(())
}

fn write_statement(out: &mut impl Write, inst: &Instruction) -> fmt::Result {
    let operands = OperandList(&inst.qubits);
    match inst.op {
        Op::H | Op::X => writeln!(out, "{} {operands};", inst.name()),
        Op::Mcx { controls } => writeln!(out, "ctrl({controls}) @ x {operands};"),
        Op::Barrier if inst.qubits.is_empty() => writeln!(out, "barrier;"),
        Op::Barrier => writeln!(out, "barrier {operands};"),
        Op::Measure => inst
            .qubits
            .iter()
            .zip(&inst.clbits)
            .try_for_each(|(q, c)| writeln!(out, "c[{}] = measure q[{}];", c.0, q.0)),
    }
}

/// Comma-separated `q[i]` operands.
struct OperandList<'a>(&'a [QubitId]);

impl fmt::Display for OperandList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, q) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "q[{}]", q.0)?;
        }
        Ok(())
    }
}

/// Circuit names go into a line comment; control characters (line breaks
/// included) would end it early, so they become spaces.
fn comment_safe(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
