//! Integration tests for the controlled diffuser.
//!
//! Most tests drive the builder through a recording circuit that logs every
//! append call, so the exact call sequence can be compared. The rest use
//! the real `cus_ir::Circuit`.

use std::io;
use std::sync::{Arc, Mutex};

use cus_diffuser::{
    CircuitBuilder, DiffuserError, apply_controlled_diffuser, count_diffuser_gates,
    diffuser_gate_counts,
};
use cus_ir::{Circuit, IrError, QubitId};
use proptest::prelude::*;

// ============================================================================
// Recording circuit
// ============================================================================

/// One recorded append call.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    H(u32),
    X(u32),
    Mcx(Vec<u32>, u32),
    Barrier,
}

impl Call {
    fn is_gate(&self) -> bool {
        !matches!(self, Call::Barrier)
    }
}

/// Error raised by the recording circuit for qubits outside its register.
#[derive(Debug, PartialEq, Eq)]
struct OutOfRange(u32);

/// Circuit stand-in that records calls and rejects qubits `>= size`.
struct RecordingCircuit {
    size: u32,
    calls: Vec<Call>,
}

impl RecordingCircuit {
    fn new(size: u32) -> Self {
        Self {
            size,
            calls: vec![],
        }
    }

    fn check(&self, qubit: QubitId) -> Result<u32, OutOfRange> {
        if qubit.0 < self.size {
            Ok(qubit.0)
        } else {
            Err(OutOfRange(qubit.0))
        }
    }

    fn gate_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_gate()).count()
    }

    fn barrier_count(&self) -> usize {
        self.calls.iter().filter(|c| !c.is_gate()).count()
    }
}

impl CircuitBuilder for RecordingCircuit {
    type Error = OutOfRange;

    fn h(&mut self, qubit: QubitId) -> Result<(), OutOfRange> {
        let q = self.check(qubit)?;
        self.calls.push(Call::H(q));
        Ok(())
    }

    fn x(&mut self, qubit: QubitId) -> Result<(), OutOfRange> {
        let q = self.check(qubit)?;
        self.calls.push(Call::X(q));
        Ok(())
    }

    fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> Result<(), OutOfRange> {
        let controls = controls
            .iter()
            .map(|&c| self.check(c))
            .collect::<Result<Vec<_>, _>>()?;
        let target = self.check(target)?;
        self.calls.push(Call::Mcx(controls, target));
        Ok(())
    }

    fn barrier_all(&mut self) -> Result<(), OutOfRange> {
        self.calls.push(Call::Barrier);
        Ok(())
    }
}

fn qubits(ids: &[u32]) -> Vec<QubitId> {
    ids.iter().copied().map(QubitId).collect()
}

// ============================================================================
// Gate sequence
// ============================================================================

mod sequence {
    use super::*;

    #[test]
    fn test_exact_call_order() {
        let mut circuit = RecordingCircuit::new(4);
        let inputs = qubits(&[0, 1, 2]);

        apply_controlled_diffuser(&mut circuit, &inputs, QubitId(3), false).unwrap();

        use Call::*;
        assert_eq!(
            circuit.calls,
            vec![
                H(0),
                H(1),
                H(2),
                X(0),
                X(1),
                X(2),
                X(3),
                H(3),
                Mcx(vec![0, 1, 2], 3),
                H(3),
                X(3),
                X(0),
                X(1),
                X(2),
                H(0),
                H(1),
                H(2),
            ]
        );
    }

    #[test]
    fn test_input_order_is_preserved() {
        let mut circuit = RecordingCircuit::new(5);
        let inputs = qubits(&[4, 0, 2]);

        apply_controlled_diffuser(&mut circuit, &inputs, QubitId(1), false).unwrap();

        assert_eq!(circuit.calls[0..3], [Call::H(4), Call::H(0), Call::H(2)]);
        assert!(circuit.calls.contains(&Call::Mcx(vec![4, 0, 2], 1)));
    }

    #[test]
    fn test_output_need_not_be_last_qubit() {
        let mut circuit = Circuit::with_qubits("cus", 4);
        let inputs = qubits(&[1, 2, 3]);

        apply_controlled_diffuser(&mut circuit, &inputs, QubitId(0), false).unwrap();

        let mcx = circuit
            .instructions()
            .iter()
            .find(|inst| inst.name() == "mcx")
            .unwrap();
        assert_eq!(mcx.controls(), qubits(&[1, 2, 3]));
        assert_eq!(mcx.target(), Some(QubitId(0)));
    }

    #[test]
    fn test_barriers_are_first_and_last() {
        let mut circuit = RecordingCircuit::new(3);
        let inputs = qubits(&[0, 1]);

        apply_controlled_diffuser(&mut circuit, &inputs, QubitId(2), true).unwrap();

        assert_eq!(circuit.calls.first(), Some(&Call::Barrier));
        assert_eq!(circuit.calls.last(), Some(&Call::Barrier));
        assert_eq!(circuit.barrier_count(), 2);
        assert_eq!(circuit.gate_count(), count_diffuser_gates(3).unwrap());
    }

    #[test]
    fn test_barrier_flag_does_not_change_gates() {
        let inputs = qubits(&[0, 1, 2, 3]);

        let mut plain = RecordingCircuit::new(5);
        apply_controlled_diffuser(&mut plain, &inputs, QubitId(4), false).unwrap();

        let mut fenced = RecordingCircuit::new(5);
        apply_controlled_diffuser(&mut fenced, &inputs, QubitId(4), true).unwrap();

        let fenced_gates: Vec<_> = fenced.calls.into_iter().filter(Call::is_gate).collect();
        assert_eq!(plain.calls, fenced_gates);
    }

    #[test]
    fn test_applying_twice_concatenates() {
        let mut circuit = RecordingCircuit::new(3);
        let inputs = qubits(&[0, 1]);

        apply_controlled_diffuser(&mut circuit, &inputs, QubitId(2), false).unwrap();
        let once = circuit.calls.clone();
        apply_controlled_diffuser(&mut circuit, &inputs, QubitId(2), false).unwrap();

        assert_eq!(circuit.calls.len(), 2 * once.len());
        assert_eq!(circuit.calls[..once.len()], once[..]);
        assert_eq!(circuit.calls[once.len()..], once[..]);
    }

    #[test]
    fn test_chaining_returns_same_circuit() {
        let mut circuit = RecordingCircuit::new(3);
        let inputs = qubits(&[0, 1]);

        apply_controlled_diffuser(&mut circuit, &inputs, QubitId(2), false)
            .and_then(|c| apply_controlled_diffuser(c, &inputs, QubitId(2), true))
            .unwrap();

        assert_eq!(circuit.gate_count(), 26);
        assert_eq!(circuit.barrier_count(), 2);
    }
}

// ============================================================================
// Collaborator errors
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_out_of_range_error_passes_through() {
        let mut circuit = RecordingCircuit::new(3);
        let inputs = qubits(&[0, 1]);

        let err = apply_controlled_diffuser(&mut circuit, &inputs, QubitId(9), false)
            .map(|_| ())
            .unwrap_err();

        assert_eq!(err, OutOfRange(9));
        // H and X layers on the inputs were appended before the output was touched.
        assert_eq!(circuit.calls.len(), 4);
    }

    #[test]
    fn test_output_among_inputs_surfaces_ir_error() {
        let mut circuit = Circuit::with_qubits("cus", 3);
        let inputs = qubits(&[0, 1, 2]);

        let err = apply_controlled_diffuser(&mut circuit, &inputs, QubitId(2), false)
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(
            err,
            IrError::DuplicateQubit {
                qubit: QubitId(2),
                ..
            }
        ));
    }

    #[test]
    fn test_empty_inputs_surfaces_ir_error() {
        let mut circuit = Circuit::with_qubits("cus", 1);

        let err = apply_controlled_diffuser(&mut circuit, &[], QubitId(0), false)
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(err, IrError::EmptyControls));
        // X then H on the output precede the MCX.
        assert_eq!(circuit.num_gates(), 2);
    }

    #[test]
    fn test_unknown_qubit_on_real_circuit() {
        let mut circuit = Circuit::with_qubits("cus", 3);
        let inputs = qubits(&[0, 7]);

        let err = apply_controlled_diffuser(&mut circuit, &inputs, QubitId(2), false)
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(
            err,
            IrError::QubitNotFound {
                qubit: QubitId(7),
                ..
            }
        ));
    }
}

// ============================================================================
// Gate counter diagnostics
// ============================================================================

mod diagnostics {
    use super::*;

    /// Shared buffer the fmt subscriber writes into.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, buffer.contents())
    }

    #[test]
    fn test_invalid_count_emits_warning() {
        for qubits in 0..3 {
            let (result, logs) = capture(|| count_diffuser_gates(qubits));

            assert_eq!(
                result,
                Err(DiffuserError::TooFewQubits {
                    got: qubits,
                    min: 3
                })
            );
            assert!(logs.contains("WARN"), "no warning in: {logs}");
            assert!(logs.contains(&format!("Invalid qubit count {qubits}")));
        }
    }

    #[test]
    fn test_valid_count_is_silent() {
        let (result, logs) = capture(|| count_diffuser_gates(5));
        assert_eq!(result, Ok(21));
        assert!(!logs.contains("WARN"));
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_recorded_gates_match_counter(num_inputs in 2u32..48, barriers in any::<bool>()) {
        let mut circuit = RecordingCircuit::new(num_inputs + 1);
        let inputs: Vec<_> = (0..num_inputs).map(QubitId).collect();

        apply_controlled_diffuser(&mut circuit, &inputs, QubitId(num_inputs), barriers).unwrap();

        let expected = count_diffuser_gates(num_inputs as usize + 1).unwrap();
        prop_assert_eq!(circuit.gate_count(), expected);
        prop_assert_eq!(circuit.barrier_count(), if barriers { 2 } else { 0 });
    }

    #[test]
    fn prop_ir_tally_matches_breakdown(num_inputs in 2u32..32) {
        let (mut circuit, inputs, output) = Circuit::with_oracle_registers("cus", num_inputs);
        apply_controlled_diffuser(&mut circuit, &inputs, output, false).unwrap();

        let counts = diffuser_gate_counts(num_inputs as usize + 1).unwrap();
        let tally = circuit.count_ops();
        prop_assert_eq!(tally["h"], counts.hadamard);
        prop_assert_eq!(tally["x"], counts.pauli_x);
        prop_assert_eq!(tally["mcx"], counts.mcx);
        prop_assert_eq!(circuit.num_gates(), counts.total());
    }

    #[test]
    fn prop_counter_is_four_n_plus_one(qubits in 3usize..10_000) {
        prop_assert_eq!(count_diffuser_gates(qubits), Ok(4 * qubits + 1));
    }
}
