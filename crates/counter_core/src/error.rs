use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use solana_program_error::ProgramError;

/// Failures raised by the counter program.
///
/// Every variant maps to a stable `ProgramError::Custom` code so clients can
/// recover the variant from a rejected transaction with
/// [`CounterError::from_program_error`].
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive, thiserror::Error)]
pub enum CounterError {
	/// The instruction data is empty or starts with an unknown opcode.
	#[error("instruction opcode is missing or unrecognized")]
	InvalidInstruction = 0,
	/// The first account did not sign the transaction.
	#[error("the signer account is missing a required signature")]
	MissingRequiredSignature = 1,
	/// The counter account was not passed as writable.
	#[error("the counter account is not writable")]
	AccountNotWritable = 2,
	/// The counter account is not the address derived from the signer.
	#[error("the counter account does not match the address derived from the signer")]
	InvalidAccountAddress = 3,
	/// `Initialize` targeted an account that already belongs to a program.
	#[error("the counter account is already initialized")]
	AlreadyInitialized = 4,
	/// `Increment` targeted an account this program never initialized.
	#[error("the counter account is not initialized")]
	UninitializedAccount = 5,
	/// The signer is not the owner recorded in the counter account.
	#[error("the signer does not own this counter")]
	Unauthorized = 6,
	/// The account buffer is too short to hold a counter.
	#[error("the counter account buffer is too short")]
	MalformedAccount = 7,
	/// The count would pass 255 while overflow is rejected.
	#[error("the counter cannot be incremented past 255")]
	Overflow = 8,
}

impl CounterError {
	/// The custom program error code of this variant.
	pub const fn code(self) -> u32 {
		self as u32
	}

	/// Recover a counter error from the error a transaction was rejected with.
	pub fn from_program_error(error: &ProgramError) -> Option<Self> {
		match error {
			ProgramError::Custom(code) => Self::from_u32(*code),
			_ => None,
		}
	}
}

impl From<CounterError> for ProgramError {
	fn from(error: CounterError) -> Self {
		ProgramError::Custom(error.code())
	}
}
