use solana_address::Address;

use crate::ProgramError;
use crate::ProgramResult;

/// An account loaded by the runtime for the current instruction.
///
/// The runtime is trusted for `is_signer` and `is_writable`: an account is
/// only a signer when its credential signed the transaction.
pub trait AccountHandle {
	/// The account's address.
	fn address(&self) -> &Address;
	/// Whether the account signed the transaction.
	fn is_signer(&self) -> bool;
	/// Whether the account is writable in this instruction.
	fn is_writable(&self) -> bool;
	/// The program that owns the account, or `None` while it still belongs to
	/// the system program.
	fn owner(&self) -> Option<Address>;
	/// Borrow the account data.
	fn try_data<R>(&self, read: impl FnOnce(&[u8]) -> R) -> Result<R, ProgramError>;
	/// Mutably borrow the account data.
	fn try_data_mut<R>(&self, write: impl FnOnce(&mut [u8]) -> R) -> Result<R, ProgramError>;
}

impl<T: AccountHandle + ?Sized> AccountHandle for &T {
	#[inline(always)]
	fn address(&self) -> &Address {
		(**self).address()
	}

	#[inline(always)]
	fn is_signer(&self) -> bool {
		(**self).is_signer()
	}

	#[inline(always)]
	fn is_writable(&self) -> bool {
		(**self).is_writable()
	}

	#[inline(always)]
	fn owner(&self) -> Option<Address> {
		(**self).owner()
	}

	#[inline(always)]
	fn try_data<R>(&self, read: impl FnOnce(&[u8]) -> R) -> Result<R, ProgramError> {
		(**self).try_data(read)
	}

	#[inline(always)]
	fn try_data_mut<R>(&self, write: impl FnOnce(&mut [u8]) -> R) -> Result<R, ProgramError> {
		(**self).try_data_mut(write)
	}
}

/// The runtime's account-creation capability.
pub trait AccountAllocator<A: AccountHandle> {
	/// Allocate `space` zeroed bytes at `target`, funded by `payer`, and assign
	/// the account to `owner`.
	///
	/// `target` is a program derived address, so it cannot sign. The runtime
	/// accepts `signer_seeds` (including the bump) in place of its signature
	/// and fails with `InvalidSeeds` when they do not re-derive `target`.
	fn create_program_account(
		&self,
		payer: &A,
		target: &A,
		system_program: &A,
		space: usize,
		owner: &Address,
		signer_seeds: &[&[u8]],
	) -> ProgramResult;
}
