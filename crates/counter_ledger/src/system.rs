//! The ledger's stand-in for the system program.

use counter_core::AccountAllocator;
use counter_core::AccountHandle;
use counter_core::Address;
use counter_core::ProgramError;
use counter_core::ProgramResult;
use counter_core::system_program;

use crate::LoadedAccount;

/// Creates program accounts the way the system program's `CreateAccount`
/// does, minus rent: the payer must sign, both accounts must be writable, the
/// seeds must re-derive the target under the new owner and the target must
/// still be an empty system account.
#[derive(Clone, Copy, Debug, Default)]
pub struct LedgerSystem;

impl<'a> AccountAllocator<&'a LoadedAccount> for LedgerSystem {
	fn create_program_account(
		&self,
		payer: &&'a LoadedAccount,
		target: &&'a LoadedAccount,
		system: &&'a LoadedAccount,
		space: usize,
		owner: &Address,
		signer_seeds: &[&[u8]],
	) -> ProgramResult {
		if system.address() != &system_program::ID {
			return Err(ProgramError::IncorrectProgramId);
		}

		if !payer.is_signer() {
			return Err(ProgramError::MissingRequiredSignature);
		}

		if !payer.is_writable() || !target.is_writable() {
			return Err(ProgramError::InvalidArgument);
		}

		let signed_for = Address::create_program_address(signer_seeds, owner)
			.map_err(|_| ProgramError::InvalidSeeds)?;
		if &signed_for != target.address() {
			return Err(ProgramError::InvalidSeeds);
		}

		if target.owner().is_some() || !target.try_data(<[u8]>::is_empty)? {
			return Err(ProgramError::AccountAlreadyInitialized);
		}

		target.allocate(space)?;
		target.assign(*owner);

		Ok(())
	}
}
