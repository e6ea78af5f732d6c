use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;

use crate::CounterError;

/// Instruction opcode. The first byte of instruction data selects the
/// variant; any further bytes are ignored.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum CounterInstruction {
	/// Create the counter account for the signer with `count = 1`.
	Initialize = 0,
	/// Add 1 to the signer's counter.
	Increment = 1,
}

impl CounterInstruction {
	/// Read the opcode from the first byte of `data`.
	pub fn unpack(data: &[u8]) -> Result<Self, CounterError> {
		let (&opcode, _rest) = data
			.split_first()
			.ok_or(CounterError::InvalidInstruction)?;

		Self::try_from(opcode)
	}

	/// The opcode byte of this instruction.
	pub const fn opcode(self) -> u8 {
		self as u8
	}

	/// The instruction data a client sends for this instruction.
	pub const fn pack(self) -> [u8; 1] {
		[self.opcode()]
	}

	pub const fn name(self) -> &'static str {
		match self {
			Self::Initialize => "Initialize",
			Self::Increment => "Increment",
		}
	}
}

impl TryFrom<u8> for CounterInstruction {
	type Error = CounterError;

	fn try_from(opcode: u8) -> Result<Self, Self::Error> {
		Self::from_u8(opcode).ok_or(CounterError::InvalidInstruction)
	}
}
