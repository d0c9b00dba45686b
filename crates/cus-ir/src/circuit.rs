//! Append-only circuit program.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::error::{IrError, IrResult};
use crate::graph::WireGraph;
use crate::instruction::{Instruction, Op};
use crate::wire::{ClbitId, QubitId, Register, Wire};

/// A named circuit: qubit registers plus the instructions appended so far.
///
/// Every append checks its operands first. A rejected append records
/// nothing, but earlier appends stay in place.
#[derive(Debug, Clone, Serialize)]
pub struct Circuit {
    name: String,
    registers: Vec<Register>,
    num_qubits: u32,
    num_clbits: u32,
    #[serde(rename = "instructions")]
    program: Vec<Instruction>,
    #[serde(skip)]
    wires: WireGraph,
}

impl Circuit {
    /// Empty circuit with no qubits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registers: vec![],
            num_qubits: 0,
            num_clbits: 0,
            program: vec![],
            wires: WireGraph::new(),
        }
    }

    /// Circuit with a single register `q` of `num_qubits` qubits.
    pub fn with_qubits(name: impl Into<String>, num_qubits: u32) -> Self {
        let mut circuit = Self::new(name);
        circuit.add_register("q", num_qubits);
        circuit
    }

    /// Circuit laid out for a Boolean oracle: register `in` with
    /// `num_inputs` qubits, then a one-qubit register `out`.
    ///
    /// Returns the circuit, the input qubits and the output qubit.
    pub fn with_oracle_registers(
        name: impl Into<String>,
        num_inputs: u32,
    ) -> (Self, Vec<QubitId>, QubitId) {
        let mut circuit = Self::new(name);
        let inputs = circuit.add_register("in", num_inputs);
        let output = QubitId(circuit.num_qubits);
        circuit.add_register("out", 1);
        (circuit, inputs, output)
    }

    /// Allocate a register of `size` fresh qubits and return them.
    pub fn add_register(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let register = Register {
            name: name.into(),
            start: self.num_qubits,
            size,
        };
        self.num_qubits += size;
        let qubits = register.qubits().collect();
        self.registers.push(register);
        qubits
    }

    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.record(Op::H, vec![qubit], vec![])?;
        Ok(self)
    }

    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.record(Op::X, vec![qubit], vec![])?;
        Ok(self)
    }

    /// Multi-controlled X on `target`, recorded as one instruction whatever
    /// the number of controls.
    pub fn mcx(
        &mut self,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        let mut qubits: Vec<_> = controls.into_iter().collect();
        if qubits.is_empty() {
            return Err(IrError::EmptyControls);
        }
        let count = qubits.len();
        let controls = u32::try_from(count).map_err(|_| IrError::TooManyControls { count })?;

        qubits.push(target);
        self.record(Op::Mcx { controls }, qubits, vec![])?;
        Ok(self)
    }

    /// Barrier across every qubit.
    pub fn barrier_all(&mut self) -> &mut Self {
        let qubits = self.all_qubits().collect();
        self.commit(Op::Barrier, qubits, vec![]);
        self
    }

    /// Measure every qubit into a classical bit of the same index,
    /// allocating classical bits as needed.
    pub fn measure_all(&mut self) -> &mut Self {
        self.num_clbits = self.num_clbits.max(self.num_qubits);
        let qubits = self.all_qubits().collect();
        let clbits = (0..self.num_qubits).map(ClbitId).collect();
        self.commit(Op::Measure, qubits, clbits);
        self
    }

    fn all_qubits(&self) -> impl Iterator<Item = QubitId> + use<> {
        (0..self.num_qubits).map(QubitId)
    }

    /// Validate operands and append. Nothing is recorded on error.
    fn record(&mut self, op: Op, qubits: Vec<QubitId>, clbits: Vec<ClbitId>) -> IrResult<()> {
        let mut seen = FxHashSet::default();
        for &qubit in &qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    op: op.name(),
                });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    op: op.name(),
                });
            }
        }

        self.commit(op, qubits, clbits);
        Ok(())
    }

    /// Append an instruction whose operands are known to be valid.
    fn commit(&mut self, op: Op, qubits: Vec<QubitId>, clbits: Vec<ClbitId>) {
        let wires: Vec<Wire> = qubits
            .iter()
            .copied()
            .map(Wire::from)
            .chain(clbits.iter().copied().map(Wire::from))
            .collect();
        self.wires.push(&wires, op.occupies_layer());
        self.program.push(Instruction { op, qubits, clbits });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    /// Register that owns `qubit`.
    pub fn register_of(&self, qubit: QubitId) -> Option<&Register> {
        self.registers.iter().find(|reg| reg.contains(qubit))
    }

    /// Instructions in the order they were appended.
    pub fn instructions(&self) -> &[Instruction] {
        &self.program
    }

    /// Number of instructions of any kind.
    pub fn num_ops(&self) -> usize {
        self.program.len()
    }

    /// Number of gates. Barriers and measurements are not gates.
    pub fn num_gates(&self) -> usize {
        self.program.iter().filter(|inst| inst.is_gate()).count()
    }

    /// Instruction count per mnemonic (`"h"`, `"x"`, `"mcx"`, ...).
    pub fn count_ops(&self) -> FxHashMap<&'static str, usize> {
        let mut counts = FxHashMap::default();
        for inst in &self.program {
            *counts.entry(inst.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Longest chain of layered instructions on any wire. Barriers add no
    /// depth.
    pub fn depth(&self) -> usize {
        self.wires.depth()
    }

    /// Wire dependencies between the recorded instructions.
    pub fn wire_graph(&self) -> &WireGraph {
        &self.wires
    }

    /// Registers and instructions as pretty JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
