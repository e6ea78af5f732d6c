use solana_address::Address;

use crate::AccountHandle;
use crate::CounterError;
use crate::ProgramError;
use crate::log;
use crate::log_caller;
use crate::system_program;
use crate::try_derive_counter_address;

/// Chainable checks on loaded accounts.
///
/// ```ignore
/// signer.assert_signer()?;
/// let bump = counter.assert_writable()?.assert_counter_address(signer.address(), &ID)?;
/// ```
pub trait AccountValidation: Sized {
	/// Assert that the account signed the transaction.
	fn assert_signer(&self) -> Result<&Self, ProgramError>;
	/// Assert that the account is writable.
	fn assert_writable(&self) -> Result<&Self, ProgramError>;
	/// Assert that the account is the counter address of `owner` under
	/// `program_id`. Returns the canonical bump.
	fn assert_counter_address(&self, owner: &Address, program_id: &Address)
	-> Result<u8, ProgramError>;
	/// Assert that no program has claimed the account and it holds no data.
	fn assert_unclaimed(&self) -> Result<&Self, ProgramError>;
	/// Assert that the account is owned by `program_id`.
	fn assert_owned_by(&self, program_id: &Address) -> Result<&Self, ProgramError>;
	/// Assert that the account is the system program.
	fn assert_system_program(&self) -> Result<&Self, ProgramError>;
}

impl<A: AccountHandle> AccountValidation for A {
	#[track_caller]
	fn assert_signer(&self) -> Result<&Self, ProgramError> {
		if !self.is_signer() {
			log!(
				"address: {} is missing a required signature",
				self.address().as_ref()
			);
			log_caller();

			return Err(CounterError::MissingRequiredSignature.into());
		}

		Ok(self)
	}

	#[track_caller]
	fn assert_writable(&self) -> Result<&Self, ProgramError> {
		if !self.is_writable() {
			log!(
				"address: {} has not been marked as writable",
				self.address().as_ref()
			);
			log_caller();

			return Err(CounterError::AccountNotWritable.into());
		}

		Ok(self)
	}

	#[track_caller]
	fn assert_counter_address(
		&self,
		owner: &Address,
		program_id: &Address,
	) -> Result<u8, ProgramError> {
		let Some((expected, bump)) = try_derive_counter_address(owner, program_id) else {
			log!(
				"could not find counter address for owner: {}",
				owner.as_ref()
			);
			log_caller();

			return Err(CounterError::InvalidAccountAddress.into());
		};

		if self.address() != &expected {
			log!(
				"address: {} is invalid, expected counter: {}",
				self.address().as_ref(),
				expected.as_ref()
			);
			log_caller();

			return Err(CounterError::InvalidAccountAddress.into());
		}

		Ok(bump)
	}

	#[track_caller]
	fn assert_unclaimed(&self) -> Result<&Self, ProgramError> {
		if let Some(owner) = self.owner() {
			log!(
				"address: {} is already owned by: {}",
				self.address().as_ref(),
				owner.as_ref()
			);
			log_caller();

			return Err(CounterError::AlreadyInitialized.into());
		}

		if !self.try_data(<[u8]>::is_empty)? {
			log!("address: {} is not empty", self.address().as_ref());
			log_caller();

			return Err(CounterError::AlreadyInitialized.into());
		}

		Ok(self)
	}

	#[track_caller]
	fn assert_owned_by(&self, program_id: &Address) -> Result<&Self, ProgramError> {
		if self.owner().as_ref() != Some(program_id) {
			log!(
				"address: {} is not owned by: {}",
				self.address().as_ref(),
				program_id.as_ref()
			);
			log_caller();

			return Err(CounterError::UninitializedAccount.into());
		}

		Ok(self)
	}

	#[track_caller]
	fn assert_system_program(&self) -> Result<&Self, ProgramError> {
		if self.address() != &system_program::ID {
			log!(
				"address: {} is invalid, expected the system program",
				self.address().as_ref()
			);
			log_caller();

			return Err(ProgramError::IncorrectProgramId);
		}

		Ok(self)
	}
}
