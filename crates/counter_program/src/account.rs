#![allow(unsafe_code)]

use counter_core::AccountHandle;
use counter_core::Address;
use counter_core::ProgramError;
use counter_core::system_program;
use pinocchio::AccountView;

/// An account handed to the program by the runtime.
#[derive(Clone, Copy, Debug)]
pub struct ProgramAccount<'a>(pub &'a AccountView);

impl AccountHandle for ProgramAccount<'_> {
	#[inline(always)]
	fn address(&self) -> &Address {
		self.0.address()
	}

	#[inline(always)]
	fn is_signer(&self) -> bool {
		self.0.is_signer()
	}

	#[inline(always)]
	fn is_writable(&self) -> bool {
		self.0.is_writable()
	}

	#[inline(always)]
	fn owner(&self) -> Option<Address> {
		// SAFETY: the runtime keeps the account header valid for the whole
		// instruction and nothing in this program reassigns an owner while the
		// reference is held.
		let owner = unsafe { self.0.owner() };

		(owner != &system_program::ID).then_some(*owner)
	}

	#[inline(always)]
	fn try_data<R>(&self, read: impl FnOnce(&[u8]) -> R) -> Result<R, ProgramError> {
		let data = self.0.try_borrow()?;
		Ok(read(&data))
	}

	#[inline(always)]
	fn try_data_mut<R>(&self, write: impl FnOnce(&mut [u8]) -> R) -> Result<R, ProgramError> {
		let mut view = self.0.clone();
		let mut data = view.try_borrow_mut()?;
		Ok(write(&mut data))
	}
}
