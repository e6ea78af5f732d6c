//! Processor tests against a minimal in-test host.
//!
//! `MockAccount` mirrors what a runtime hands the processor: fixed flags, an
//! owner that only the allocator can change, and a data buffer behind a
//! `RefCell`. `MockAllocator` records allocations and can be told to reject
//! the signer seeds.

use std::cell::Cell;
use std::cell::RefCell;

use counter_core::AccountAllocator;
use counter_core::AccountHandle;
use counter_core::Address;
use counter_core::CounterError;
use counter_core::CounterInstruction;
use counter_core::OverflowMode;
use counter_core::ProgramError;
use counter_core::ProgramResult;
use counter_core::derive_counter_address;
use counter_core::process_instruction;
use counter_core::state;
use counter_core::system_program;

const WALLET: Address = Address::new_from_array([1u8; 32]);
const INTRUDER: Address = Address::new_from_array([2u8; 32]);

#[derive(Debug)]
struct MockAccount {
	address: Address,
	is_signer: bool,
	is_writable: bool,
	owner: Cell<Option<Address>>,
	data: RefCell<Vec<u8>>,
}

impl MockAccount {
	fn new(address: Address) -> Self {
		Self {
			address,
			is_signer: false,
			is_writable: false,
			owner: Cell::new(None),
			data: RefCell::new(Vec::new()),
		}
	}

	fn signer(mut self) -> Self {
		self.is_signer = true;
		self
	}

	fn writable(mut self) -> Self {
		self.is_writable = true;
		self
	}

	fn owned_by(self, owner: Address, data: &[u8]) -> Self {
		self.owner.set(Some(owner));
		*self.data.borrow_mut() = data.to_vec();
		self
	}

	fn bytes(&self) -> Vec<u8> {
		self.data.borrow().clone()
	}
}

impl AccountHandle for MockAccount {
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

#[derive(Default)]
struct MockAllocator {
	reject_seeds: bool,
	allocations: Cell<usize>,
}

impl<'a> AccountAllocator<&'a MockAccount> for MockAllocator {
	fn create_program_account(
		&self,
		_payer: &&'a MockAccount,
		target: &&'a MockAccount,
		_system_program: &&'a MockAccount,
		space: usize,
		owner: &Address,
		signer_seeds: &[&[u8]],
	) -> ProgramResult {
		if self.reject_seeds {
			return Err(ProgramError::InvalidSeeds);
		}

		let derived = Address::create_program_address(signer_seeds, owner)
			.map_err(|_| ProgramError::InvalidSeeds)?;
		assert_eq!(&derived, target.address(), "seeds must name the target");

		self.allocations.set(self.allocations.get() + 1);
		target.owner.set(Some(*owner));
		*target.data.borrow_mut() = vec![0u8; space];

		Ok(())
	}
}

fn counter_address(wallet: &Address) -> Address {
	derive_counter_address(wallet, &counter_core::ID).0
}

fn run(allocator: &MockAllocator, accounts: &[MockAccount], data: &[u8]) -> ProgramResult {
	process_instruction(
		allocator,
		&counter_core::ID,
		accounts.iter(),
		data,
		OverflowMode::Wrap,
	)
}

fn initialized_counter(wallet: &Address, count: u8) -> MockAccount {
	let mut bytes = vec![0u8; state::COUNTER_ACCOUNT_LEN];
	bytes[..32].copy_from_slice(wallet.as_ref());
	bytes[32] = count;

	MockAccount::new(counter_address(wallet))
		.writable()
		.owned_by(counter_core::ID, &bytes)
}

fn accounts(signer: MockAccount, counter: MockAccount) -> [MockAccount; 3] {
	[signer, counter, MockAccount::new(system_program::ID)]
}

#[test]
fn initialize_writes_owner_and_count_one() {
	let allocator = MockAllocator::default();
	let accounts = accounts(
		MockAccount::new(WALLET).signer().writable(),
		MockAccount::new(counter_address(&WALLET)).writable(),
	);

	let result = run(&allocator, &accounts, &CounterInstruction::Initialize.pack());
	assert_eq!(result, Ok(()));
	assert_eq!(allocator.allocations.get(), 1);
	assert_eq!(accounts[1].owner(), Some(counter_core::ID));

	let counter = state::decode(&accounts[1].bytes()).unwrap_or_else(|e| panic!("{e:?}"));
	assert_eq!(counter.owner, WALLET);
	assert_eq!(counter.count, 1);
}

#[test]
fn increment_adds_one() {
	let allocator = MockAllocator::default();
	let accounts = accounts(
		MockAccount::new(WALLET).signer(),
		initialized_counter(&WALLET, 1),
	);

	let result = run(&allocator, &accounts, &CounterInstruction::Increment.pack());
	assert_eq!(result, Ok(()));

	let counter = state::decode(&accounts[1].bytes()).unwrap_or_else(|e| panic!("{e:?}"));
	assert_eq!(counter.owner, WALLET);
	assert_eq!(counter.count, 2);
}

#[test]
fn increment_wraps_at_255() {
	let allocator = MockAllocator::default();
	let accounts = accounts(
		MockAccount::new(WALLET).signer(),
		initialized_counter(&WALLET, 255),
	);

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Increment.pack()),
		Ok(())
	);
	assert_eq!(accounts[1].bytes()[32], 0);
}

#[test]
fn increment_rejects_overflow_when_asked() {
	let allocator = MockAllocator::default();
	let accounts = accounts(
		MockAccount::new(WALLET).signer(),
		initialized_counter(&WALLET, 255),
	);
	let before = accounts[1].bytes();

	let result = process_instruction(
		&allocator,
		&counter_core::ID,
		accounts.iter(),
		&CounterInstruction::Increment.pack(),
		OverflowMode::Reject,
	);
	assert_eq!(result, Err(CounterError::Overflow.into()));
	assert_eq!(accounts[1].bytes(), before);
}

#[test]
fn empty_or_unknown_opcode_is_invalid_instruction() {
	let allocator = MockAllocator::default();
	let accounts = accounts(
		MockAccount::new(WALLET).signer(),
		initialized_counter(&WALLET, 1),
	);

	assert_eq!(
		run(&allocator, &accounts, &[]),
		Err(CounterError::InvalidInstruction.into())
	);
	assert_eq!(
		run(&allocator, &accounts, &[7]),
		Err(CounterError::InvalidInstruction.into())
	);
}

#[test]
fn opcode_is_checked_before_accounts() {
	let allocator = MockAllocator::default();
	assert_eq!(
		run(&allocator, &[], &[9]),
		Err(CounterError::InvalidInstruction.into())
	);
}

#[test]
fn missing_accounts_fail() {
	let allocator = MockAllocator::default();
	let accounts = [
		MockAccount::new(WALLET).signer(),
		initialized_counter(&WALLET, 1),
	];

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Increment.pack()),
		Err(ProgramError::NotEnoughAccountKeys)
	);
}

#[test]
fn unsigned_signer_fails_for_both_instructions() {
	let allocator = MockAllocator::default();

	let fresh = accounts(
		MockAccount::new(WALLET).writable(),
		MockAccount::new(counter_address(&WALLET)).writable(),
	);
	assert_eq!(
		run(&allocator, &fresh, &CounterInstruction::Initialize.pack()),
		Err(CounterError::MissingRequiredSignature.into())
	);

	let existing = accounts(MockAccount::new(WALLET), initialized_counter(&WALLET, 1));
	assert_eq!(
		run(&allocator, &existing, &CounterInstruction::Increment.pack()),
		Err(CounterError::MissingRequiredSignature.into())
	);
	assert_eq!(allocator.allocations.get(), 0);
}

#[test]
fn read_only_counter_fails() {
	let allocator = MockAllocator::default();
	let accounts = accounts(
		MockAccount::new(WALLET).signer(),
		MockAccount::new(counter_address(&WALLET)),
	);

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Initialize.pack()),
		Err(CounterError::AccountNotWritable.into())
	);
}

#[test]
fn counter_of_another_wallet_is_an_invalid_address() {
	let allocator = MockAllocator::default();
	let accounts = accounts(
		MockAccount::new(INTRUDER).signer(),
		MockAccount::new(counter_address(&WALLET)).writable(),
	);

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Initialize.pack()),
		Err(CounterError::InvalidAccountAddress.into())
	);
	assert_eq!(accounts[1].owner(), None);
}

#[test]
fn rejected_signer_seeds_are_an_invalid_address() {
	let allocator = MockAllocator {
		reject_seeds: true,
		..MockAllocator::default()
	};
	let accounts = accounts(
		MockAccount::new(WALLET).signer(),
		MockAccount::new(counter_address(&WALLET)).writable(),
	);

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Initialize.pack()),
		Err(CounterError::InvalidAccountAddress.into())
	);
}

#[test]
fn initialize_twice_is_already_initialized() {
	let allocator = MockAllocator::default();
	let accounts = accounts(
		MockAccount::new(WALLET).signer(),
		initialized_counter(&WALLET, 5),
	);
	let before = accounts[1].bytes();

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Initialize.pack()),
		Err(CounterError::AlreadyInitialized.into())
	);
	assert_eq!(accounts[1].bytes(), before);
	assert_eq!(allocator.allocations.get(), 0);
}

#[test]
fn initialize_on_system_account_with_data_is_already_initialized() {
	let allocator = MockAllocator::default();
	let counter = MockAccount::new(counter_address(&WALLET)).writable();
	*counter.data.borrow_mut() = vec![1, 2, 3];
	let accounts = accounts(MockAccount::new(WALLET).signer(), counter);

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Initialize.pack()),
		Err(CounterError::AlreadyInitialized.into())
	);
}

#[test]
fn initialize_requires_the_system_program() {
	let allocator = MockAllocator::default();
	let accounts = [
		MockAccount::new(WALLET).signer(),
		MockAccount::new(counter_address(&WALLET)).writable(),
		MockAccount::new(INTRUDER),
	];

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Initialize.pack()),
		Err(ProgramError::IncorrectProgramId)
	);
}

#[test]
fn increment_before_initialize_is_uninitialized() {
	let allocator = MockAllocator::default();
	let accounts = accounts(
		MockAccount::new(WALLET).signer(),
		MockAccount::new(counter_address(&WALLET)).writable(),
	);

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Increment.pack()),
		Err(CounterError::UninitializedAccount.into())
	);
}

#[test]
fn increment_on_short_buffer_is_uninitialized() {
	let allocator = MockAllocator::default();
	let counter = MockAccount::new(counter_address(&WALLET))
		.writable()
		.owned_by(counter_core::ID, &[0u8; 10]);
	let accounts = accounts(MockAccount::new(WALLET).signer(), counter);

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Increment.pack()),
		Err(CounterError::UninitializedAccount.into())
	);
}

#[test]
fn increment_by_non_owner_is_unauthorized() {
	let allocator = MockAllocator::default();
	// The address belongs to WALLET, but the stored owner disagrees.
	let mut bytes = vec![0u8; state::COUNTER_ACCOUNT_LEN];
	bytes[..32].copy_from_slice(INTRUDER.as_ref());
	bytes[32] = 4;
	let counter = MockAccount::new(counter_address(&WALLET))
		.writable()
		.owned_by(counter_core::ID, &bytes);
	let accounts = accounts(MockAccount::new(WALLET).signer(), counter);

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Increment.pack()),
		Err(CounterError::Unauthorized.into())
	);
	assert_eq!(accounts[1].bytes(), bytes);
}

#[test]
fn increment_preserves_reserved_bytes() {
	let allocator = MockAllocator::default();
	let mut bytes = vec![0xCDu8; 40];
	bytes[..32].copy_from_slice(WALLET.as_ref());
	bytes[32] = 10;
	let counter = MockAccount::new(counter_address(&WALLET))
		.writable()
		.owned_by(counter_core::ID, &bytes);
	let accounts = accounts(MockAccount::new(WALLET).signer(), counter);

	assert_eq!(
		run(&allocator, &accounts, &CounterInstruction::Increment.pack()),
		Ok(())
	);

	let after = accounts[1].bytes();
	assert_eq!(after[32], 11);
	assert_eq!(&after[33..], &bytes[33..]);
}
