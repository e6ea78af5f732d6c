use counter_core::Address;
use counter_core::CounterError;
use counter_core::ProgramError;

/// Why a transaction was rejected. A rejected transaction leaves the ledger
/// unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
	/// An account meta is marked as signer but its key did not sign.
	#[error("account {0} is marked as signer but did not sign the transaction")]
	MissingSignature(Address),
	/// The same address appears twice in one instruction's account list.
	#[error("account {0} is loaded more than once by a single instruction")]
	AccountLoadedTwice(Address),
	/// The instruction targets a program the ledger does not run.
	#[error("program {0} is not deployed on this ledger")]
	UnknownProgram(Address),
	/// A read-only account's data or owner changed.
	#[error("read-only account {0} was modified")]
	ReadonlyDataModified(Address),
	/// The program rejected an instruction.
	#[error("instruction {index} failed: {error}")]
	InstructionError { index: usize, error: ProgramError },
}

impl TransactionError {
	/// The counter error a failed instruction returned, if any.
	pub fn counter_error(&self) -> Option<CounterError> {
		match self {
			Self::InstructionError { error, .. } => CounterError::from_program_error(error),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counter_error_is_recovered_from_instruction_errors() {
		let error = TransactionError::InstructionError {
			index: 0,
			error: CounterError::Unauthorized.into(),
		};
		assert_eq!(error.counter_error(), Some(CounterError::Unauthorized));

		let error = TransactionError::InstructionError {
			index: 0,
			error: ProgramError::NotEnoughAccountKeys,
		};
		assert_eq!(error.counter_error(), None);

		let error = TransactionError::UnknownProgram(Address::new_from_array([4; 32]));
		assert_eq!(error.counter_error(), None);
	}
}
