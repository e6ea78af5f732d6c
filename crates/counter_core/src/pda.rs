//! Counter address derivation.
//!
//! Seeds: `[<owner_address>, "counter"]`
//!
//! With bump: `[<owner_address>, "counter", &[bump]]`

use solana_address::Address;

use crate::CounterError;

/// Domain-separation tag mixed into every counter address.
pub const COUNTER_SEED: &[u8] = b"counter";

/// The seeds of the counter address owned by `owner`, without the bump.
#[inline]
pub fn counter_seeds(owner: &Address) -> [&[u8]; 2] {
	[owner.as_ref(), COUNTER_SEED]
}

/// Find the counter address of `owner` and its canonical bump.
///
/// Returns `None` if no valid PDA exists.
#[inline]
pub fn try_derive_counter_address(owner: &Address, program_id: &Address) -> Option<(Address, u8)> {
	Address::try_find_program_address(&counter_seeds(owner), program_id)
}

/// Find the counter address of `owner` and its canonical bump.
///
/// # Panics
///
/// Panics if no valid PDA exists.
///
/// Prefer [`try_derive_counter_address`] on-chain.
#[inline]
pub fn derive_counter_address(owner: &Address, program_id: &Address) -> (Address, u8) {
	try_derive_counter_address(owner, program_id)
		.unwrap_or_else(|| panic!("could not find counter address for owner"))
}

/// Recreate the counter address of `owner` from a known `bump` without
/// searching.
#[inline]
pub fn create_counter_address(
	owner: &Address,
	bump: u8,
	program_id: &Address,
) -> Result<Address, CounterError> {
	let bump_seed = [bump];
	Address::create_program_address(&[owner.as_ref(), COUNTER_SEED, &bump_seed], program_id)
		.map_err(|_| CounterError::InvalidAccountAddress)
}
