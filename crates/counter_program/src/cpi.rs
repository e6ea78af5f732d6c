//! Account creation through system program CPIs.

use counter_core::AccountAllocator;
use counter_core::Address;
use counter_core::MAX_SEEDS;
use counter_core::ProgramError;
use counter_core::ProgramResult;
use counter_core::log;
use pinocchio::cpi::Seed;
use pinocchio::cpi::Signer;
use pinocchio::sysvars::Sysvar;
use pinocchio::sysvars::rent::Rent;
use pinocchio_system::instructions::Allocate;
use pinocchio_system::instructions::Assign;
use pinocchio_system::instructions::CreateAccount;
use pinocchio_system::instructions::Transfer;

use crate::ProgramAccount;

/// Allocates program accounts by invoking the system program, signing for the
/// target with its PDA seeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProgram;

impl<'a> AccountAllocator<ProgramAccount<'a>> for SystemProgram {
	/// A target with no lamports gets a single `CreateAccount`. A pre-funded
	/// target is topped up to the rent-exempt minimum with `Transfer`, then
	/// sized with `Allocate` and claimed with `Assign`.
	#[inline(always)]
	fn create_program_account(
		&self,
		payer: &ProgramAccount<'a>,
		target: &ProgramAccount<'a>,
		_system_program: &ProgramAccount<'a>,
		space: usize,
		owner: &Address,
		signer_seeds: &[&[u8]],
	) -> ProgramResult {
		let seeds = signer_seeds_array(signer_seeds)?;
		let signers = [Signer::from(&seeds[..signer_seeds.len()])];
		let rent = Rent::get()?;
		let minimum_balance = rent.try_minimum_balance(space)?;

		if target.0.lamports() == 0 {
			CreateAccount {
				from: payer.0,
				to: target.0,
				lamports: minimum_balance,
				space: space as u64,
				owner,
			}
			.invoke_signed(&signers)?;

			return Ok(());
		}

		log!("address: {} is pre-funded", target.0.address().as_ref());

		let top_up = minimum_balance.saturating_sub(target.0.lamports());
		if top_up > 0 {
			Transfer {
				from: payer.0,
				to: target.0,
				lamports: top_up,
			}
			.invoke_signed(&signers)?;
		}

		Allocate {
			account: target.0,
			space: space as u64,
		}
		.invoke_signed(&signers)?;

		Assign {
			account: target.0,
			owner,
		}
		.invoke_signed(&signers)
	}
}

/// Copy `seeds` into fixed storage for a `Signer`.
fn signer_seeds_array<'a>(seeds: &[&'a [u8]]) -> Result<[Seed<'a>; MAX_SEEDS], ProgramError> {
	if seeds.len() > MAX_SEEDS {
		return Err(ProgramError::InvalidSeeds);
	}

	let mut storage: [Seed<'a>; MAX_SEEDS] = core::array::from_fn(|_| Seed::from(&[] as &[u8]));
	for (slot, seed) in storage.iter_mut().zip(seeds) {
		*slot = Seed::from(*seed);
	}

	Ok(storage)
}
