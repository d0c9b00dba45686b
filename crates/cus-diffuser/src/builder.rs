//! Gate-append contract for circuits that can host a diffuser.

use cus_ir::{Circuit, IrError, QubitId};

/// Convenience methods to append the gates a diffuser is made of.
///
/// Each call appends exactly one instruction. Implementations decide how
/// to validate operands; the diffuser builder forwards their errors as-is.
pub trait CircuitBuilder {
    /// Error reported when an append is rejected.
    type Error;

    /// Appends H on `qubit`.
    fn h(&mut self, qubit: QubitId) -> Result<(), Self::Error>;

    /// Appends X on `qubit`.
    fn x(&mut self, qubit: QubitId) -> Result<(), Self::Error>;

    /// Appends a multi-controlled X with `controls` acting on `target`.
    fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> Result<(), Self::Error>;

    /// Appends a barrier across every qubit in the register.
    fn barrier_all(&mut self) -> Result<(), Self::Error>;
}

impl CircuitBuilder for Circuit {
    type Error = IrError;

    fn h(&mut self, qubit: QubitId) -> Result<(), IrError> {
        Circuit::h(self, qubit)?;
        Ok(())
    }

    fn x(&mut self, qubit: QubitId) -> Result<(), IrError> {
        Circuit::x(self, qubit)?;
        Ok(())
    }

    fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> Result<(), IrError> {
        Circuit::mcx(self, controls.iter().copied(), target)?;
        Ok(())
    }

    fn barrier_all(&mut self) -> Result<(), IrError> {
        Circuit::barrier_all(self);
        Ok(())
    }
}
