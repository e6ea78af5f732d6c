//! Instruction dispatch and the two state transitions.
//!
//! ```text
//!                Initialize                 Increment
//! Uninitialized ────────────► Initialized ◄──────────┐
//!                                  │                 │
//!                                  └─────────────────┘
//! ```
//!
//! A failed instruction returns before writing, and the runtime discards the
//! whole transaction, so neither transition leaves a partial write behind.

use solana_address::Address;

use crate::AccountAllocator;
use crate::AccountHandle;
use crate::AccountValidation;
use crate::COUNTER_SEED;
use crate::CounterError;
use crate::CounterInstruction;
use crate::OverflowMode;
use crate::ProgramError;
use crate::ProgramResult;
use crate::log;
use crate::state;
use crate::state::COUNTER_ACCOUNT_LEN;
use crate::state::INITIAL_COUNT;

/// The accounts shared by both instructions, in order.
#[derive(Debug)]
pub struct CounterAccounts<A> {
	/// The wallet that owns the counter. Must sign, pays for account creation
	/// and seeds the counter address.
	pub signer: A,
	/// The counter PDA. Must be writable.
	pub counter: A,
	/// The system program, required for the `CreateAccount` call.
	pub system_program: A,
}

impl<A: AccountHandle> CounterAccounts<A> {
	/// Take the first three accounts. Extra accounts are ignored.
	pub fn try_from_accounts(accounts: impl IntoIterator<Item = A>) -> Result<Self, ProgramError> {
		let mut accounts = accounts.into_iter();
		let (Some(signer), Some(counter), Some(system_program)) =
			(accounts.next(), accounts.next(), accounts.next())
		else {
			return Err(ProgramError::NotEnoughAccountKeys);
		};

		Ok(Self {
			signer,
			counter,
			system_program,
		})
	}

	/// Checks shared by both instructions. Returns the counter's bump.
	fn validate(&self, program_id: &Address) -> Result<u8, ProgramError> {
		self.signer.assert_signer()?;
		self.counter
			.assert_writable()?
			.assert_counter_address(self.signer.address(), program_id)
	}
}

/// Decode `data` and run the instruction it names against `accounts`.
///
/// `host` allocates the counter account during `Initialize`; `overflow`
/// decides what `Increment` does at 255.
pub fn process_instruction<A, H>(
	host: &H,
	program_id: &Address,
	accounts: impl IntoIterator<Item = A>,
	data: &[u8],
	overflow: OverflowMode,
) -> ProgramResult
where
	A: AccountHandle,
	H: AccountAllocator<A>,
{
	let instruction = CounterInstruction::unpack(data)?;
	let accounts = CounterAccounts::try_from_accounts(accounts)?;

	log!("Instruction: {}", instruction.name());

	match instruction {
		CounterInstruction::Initialize => initialize(host, program_id, &accounts),
		CounterInstruction::Increment => increment(program_id, &accounts, overflow),
	}
}

/// Allocate the signer's counter and set `owner = signer`, `count = 1`.
pub fn initialize<A, H>(host: &H, program_id: &Address, accounts: &CounterAccounts<A>) -> ProgramResult
where
	A: AccountHandle,
	H: AccountAllocator<A>,
{
	let bump = accounts.validate(program_id)?;
	accounts.counter.assert_unclaimed()?;
	accounts.system_program.assert_system_program()?;

	let signer = accounts.signer.address();
	let bump_seed = [bump];
	let signer_seeds: [&[u8]; 3] = [signer.as_ref(), COUNTER_SEED, &bump_seed];

	host.create_program_account(
		&accounts.signer,
		&accounts.counter,
		&accounts.system_program,
		COUNTER_ACCOUNT_LEN,
		program_id,
		&signer_seeds,
	)
	.map_err(|error| {
		match error {
			ProgramError::InvalidSeeds => CounterError::InvalidAccountAddress.into(),
			error => error,
		}
	})?;

	accounts.counter.try_data_mut(|data| {
		state::encode_owner(data, signer)?;
		state::encode_count(data, INITIAL_COUNT)
	})??;

	log!("Counter initialized");

	Ok(())
}

/// Advance the signer's counter by one.
pub fn increment<A: AccountHandle>(
	program_id: &Address,
	accounts: &CounterAccounts<A>,
	overflow: OverflowMode,
) -> ProgramResult {
	accounts.validate(program_id)?;
	accounts.counter.assert_owned_by(program_id)?;

	let current = accounts
		.counter
		.try_data(state::decode)?
		.map_err(|_| CounterError::UninitializedAccount)?;

	if &current.owner != accounts.signer.address() {
		log!(
			"address: {} does not own counter: {}",
			accounts.signer.address().as_ref(),
			accounts.counter.address().as_ref()
		);

		return Err(CounterError::Unauthorized.into());
	}

	let count = overflow.advance(current.count)?;

	accounts.counter.try_data_mut(|data| {
		state::encode_owner(data, &current.owner)?;
		state::encode_count(data, count)
	})??;

	log!("Counter incremented to {}", count);

	Ok(())
}
