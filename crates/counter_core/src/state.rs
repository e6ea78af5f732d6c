//! Account codec for the counter account.
//!
//! The layout has no discriminator and no padding: the owner's address
//! followed by a single count byte. Buffers may be longer than
//! [`COUNTER_ACCOUNT_LEN`]; the trailing bytes are reserved and no function in
//! this module reads or writes them.

use bytemuck::Pod;
use bytemuck::Zeroable;
use solana_address::Address;

use crate::CounterError;

/// Number of bytes a counter account occupies.
pub const COUNTER_ACCOUNT_LEN: usize = 33;

/// Value written to `count` by `Initialize`.
pub const INITIAL_COUNT: u8 = 1;

const OWNER_OFFSET: usize = 0;
const COUNT_OFFSET: usize = 32;

/// Structured view of a counter account.
///
/// Layout (33 bytes total):
/// ```text
/// | offset | size | field |
/// |--------|------|-------|
/// | 0      | 32   | owner |
/// | 32     | 1    | count |
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct CounterState {
	/// The wallet allowed to increment this counter.
	pub owner: Address,
	/// Completed increments since initialization, plus one.
	pub count: u8,
}

const _: () = assert!(size_of::<CounterState>() == COUNTER_ACCOUNT_LEN);

impl CounterState {
	pub const fn new(owner: Address, count: u8) -> Self {
		Self { owner, count }
	}

	/// The raw bytes of this state, exactly as stored on the ledger.
	pub fn as_bytes(&self) -> &[u8] {
		bytemuck::bytes_of(self)
	}
}

/// Read the counter state from the start of `buffer`.
pub fn decode(buffer: &[u8]) -> Result<CounterState, CounterError> {
	let bytes = buffer
		.get(..COUNTER_ACCOUNT_LEN)
		.ok_or(CounterError::MalformedAccount)?;

	bytemuck::try_from_bytes::<CounterState>(bytes)
		.copied()
		.map_err(|_| CounterError::MalformedAccount)
}

/// Write `owner` into bytes `[0, 32)`.
pub fn encode_owner(buffer: &mut [u8], owner: &Address) -> Result<(), CounterError> {
	buffer
		.get_mut(OWNER_OFFSET..COUNT_OFFSET)
		.ok_or(CounterError::MalformedAccount)?
		.copy_from_slice(owner.as_ref());

	Ok(())
}

/// Write `count` into byte `32`.
pub fn encode_count(buffer: &mut [u8], count: u8) -> Result<(), CounterError> {
	*buffer
		.get_mut(COUNT_OFFSET)
		.ok_or(CounterError::MalformedAccount)? = count;

	Ok(())
}

/// How `Increment` treats a count of 255.
///
/// All increment arithmetic goes through [`OverflowMode::advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowMode {
	/// 255 + 1 wraps to 0.
	#[default]
	Wrap,
	/// 255 + 1 fails with [`CounterError::Overflow`].
	Reject,
}

impl OverflowMode {
	/// The count that follows `count`.
	pub const fn advance(self, count: u8) -> Result<u8, CounterError> {
		match self {
			Self::Wrap => Ok(count.wrapping_add(1)),
			Self::Reject => {
				match count.checked_add(1) {
					Some(next) => Ok(next),
					None => Err(CounterError::Overflow),
				}
			}
		}
	}
}
