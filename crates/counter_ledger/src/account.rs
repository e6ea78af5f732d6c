use std::cell::Cell;
use std::cell::RefCell;

use counter_core::AccountHandle;
use counter_core::Address;
use counter_core::ProgramError;

/// An account as stored on the ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountRecord {
	pub lamports: u64,
	/// The owning program, or `None` for system accounts.
	pub owner: Option<Address>,
	pub data: Vec<u8>,
	pub executable: bool,
}

impl AccountRecord {
	/// A system account holding `lamports` and no data.
	pub fn system(lamports: u64) -> Self {
		Self {
			lamports,
			..Self::default()
		}
	}

	/// An account owned by `owner` holding `data`.
	pub fn owned(owner: Address, lamports: u64, data: Vec<u8>) -> Self {
		Self {
			lamports,
			owner: Some(owner),
			data,
			executable: false,
		}
	}
}

/// An account loaded for one instruction.
///
/// Owner and data are the only fields the program or the allocator can
/// change; they sit behind interior mutability so the processor can hold
/// shared references to every account at once.
#[derive(Debug)]
pub struct LoadedAccount {
	address: Address,
	is_signer: bool,
	is_writable: bool,
	lamports: u64,
	executable: bool,
	owner: Cell<Option<Address>>,
	data: RefCell<Vec<u8>>,
}

impl LoadedAccount {
	pub(crate) fn load(address: Address, is_signer: bool, is_writable: bool, record: AccountRecord) -> Self {
		Self {
			address,
			is_signer,
			is_writable,
			lamports: record.lamports,
			executable: record.executable,
			owner: Cell::new(record.owner),
			data: RefCell::new(record.data),
		}
	}

	/// The record this account should be stored back as.
	pub(crate) fn into_record(self) -> AccountRecord {
		AccountRecord {
			lamports: self.lamports,
			owner: self.owner.get(),
			data: self.data.into_inner(),
			executable: self.executable,
		}
	}

	pub(crate) fn assign(&self, owner: Address) {
		self.owner.set(Some(owner));
	}

	pub(crate) fn allocate(&self, space: usize) -> Result<(), ProgramError> {
		let mut data = self
			.data
			.try_borrow_mut()
			.map_err(|_| ProgramError::AccountBorrowFailed)?;
		*data = vec![0u8; space];

		Ok(())
	}
}

impl AccountHandle for LoadedAccount {
	fn address(&self) -> &Address {
		&self.address
	}

	fn is_signer(&self) -> bool {
		self.is_signer
	}

	fn is_writable(&self) -> bool {
		self.is_writable
	}

	fn owner(&self) -> Option<Address> {
		self.owner.get()
	}

	fn try_data<R>(&self, read: impl FnOnce(&[u8]) -> R) -> Result<R, ProgramError> {
		let data = self
			.data
			.try_borrow()
			.map_err(|_| ProgramError::AccountBorrowFailed)?;
		Ok(read(&data))
	}

	fn try_data_mut<R>(&self, write: impl FnOnce(&mut [u8]) -> R) -> Result<R, ProgramError> {
		let mut data = self
			.data
			.try_borrow_mut()
			.map_err(|_| ProgramError::AccountBorrowFailed)?;
		Ok(write(&mut data))
	}
}
