use std::collections::HashMap;

use counter_core::AccountHandle;
use counter_core::Address;

use crate::AccountRecord;
use crate::Instruction;
use crate::LedgerConfig;
use crate::LedgerSystem;
use crate::LoadedAccount;
use crate::Transaction;
use crate::TransactionError;

/// A single-threaded ledger running the counter program natively.
///
/// Transactions are atomic: every instruction runs against a working copy of
/// the accounts, which replaces the committed state only when all of them
/// succeed.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
	config: LedgerConfig,
	accounts: HashMap<Address, AccountRecord>,
}

impl Ledger {
	pub fn new(config: LedgerConfig) -> Self {
		Self {
			config,
			accounts: HashMap::new(),
		}
	}

	pub fn config(&self) -> &LedgerConfig {
		&self.config
	}

	/// Credit `lamports` to `address`, creating a system account if needed.
	pub fn airdrop(&mut self, address: &Address, lamports: u64) {
		let record = self.accounts.entry(*address).or_default();
		record.lamports = record.lamports.saturating_add(lamports);
	}

	/// The committed state of `address`.
	pub fn account(&self, address: &Address) -> Option<&AccountRecord> {
		self.accounts.get(address)
	}

	/// Overwrite the committed state of `address`.
	pub fn set_account(&mut self, address: Address, record: AccountRecord) {
		self.accounts.insert(address, record);
	}

	/// Execute every instruction of `transaction` in order and commit the
	/// result, or commit nothing.
	pub fn process_transaction(&mut self, transaction: &Transaction) -> Result<(), TransactionError> {
		for meta in transaction
			.instructions
			.iter()
			.flat_map(|instruction| &instruction.accounts)
		{
			if meta.is_signer && !transaction.is_signed_by(&meta.address) {
				return Err(TransactionError::MissingSignature(meta.address));
			}
		}

		let mut working = self.accounts.clone();
		for (index, instruction) in transaction.instructions.iter().enumerate() {
			self.execute(&mut working, index, instruction)?;
		}

		self.accounts = working;

		Ok(())
	}

	fn execute(
		&self,
		working: &mut HashMap<Address, AccountRecord>,
		index: usize,
		instruction: &Instruction,
	) -> Result<(), TransactionError> {
		if instruction.program_id != self.config.program_id {
			return Err(TransactionError::UnknownProgram(instruction.program_id));
		}

		for (position, meta) in instruction.accounts.iter().enumerate() {
			if instruction.accounts[..position]
				.iter()
				.any(|earlier| earlier.address == meta.address)
			{
				return Err(TransactionError::AccountLoadedTwice(meta.address));
			}
		}

		let loaded: Vec<LoadedAccount> = instruction
			.accounts
			.iter()
			.map(|meta| {
				let record = working.get(&meta.address).cloned().unwrap_or_default();
				LoadedAccount::load(meta.address, meta.is_signer, meta.is_writable, record)
			})
			.collect();

		counter_core::process_instruction(
			&LedgerSystem,
			&self.config.program_id,
			loaded.iter(),
			&instruction.data,
			self.config.overflow,
		)
		.map_err(|error| TransactionError::InstructionError { index, error })?;

		for account in loaded {
			let address = *account.address();
			let is_writable = account.is_writable();
			let record = account.into_record();
			if working.get(&address).cloned().unwrap_or_default() == record {
				continue;
			}

			if !is_writable {
				return Err(TransactionError::ReadonlyDataModified(address));
			}

			working.insert(address, record);
		}

		Ok(())
	}
}
