//! Building transactions and reading results the way a wallet would.

use counter_core::Address;
use counter_core::CounterInstruction;
use counter_core::CounterState;
use counter_core::derive_counter_address;
use counter_core::state;
use counter_core::system_program;

use crate::Ledger;

/// One account of an instruction, with the privileges it is passed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountMeta {
	pub address: Address,
	pub is_signer: bool,
	pub is_writable: bool,
}

impl AccountMeta {
	/// A writable account.
	pub const fn new(address: Address, is_signer: bool) -> Self {
		Self {
			address,
			is_signer,
			is_writable: true,
		}
	}

	/// A read-only account.
	pub const fn new_readonly(address: Address, is_signer: bool) -> Self {
		Self {
			address,
			is_signer,
			is_writable: false,
		}
	}
}

/// A call into a program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
	pub program_id: Address,
	pub accounts: Vec<AccountMeta>,
	pub data: Vec<u8>,
}

/// Instructions executed atomically, and the keys that signed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transaction {
	pub instructions: Vec<Instruction>,
	pub signers: Vec<Address>,
}

impl Transaction {
	pub fn new(instructions: Vec<Instruction>, signers: &[Address]) -> Self {
		Self {
			instructions,
			signers: signers.to_vec(),
		}
	}

	/// Whether `address` signed this transaction.
	pub fn is_signed_by(&self, address: &Address) -> bool {
		self.signers.contains(address)
	}
}

fn counter_instruction(opcode: CounterInstruction, program_id: &Address, wallet: &Address) -> Instruction {
	let (counter, _) = derive_counter_address(wallet, program_id);

	Instruction {
		program_id: *program_id,
		accounts: vec![
			AccountMeta::new(*wallet, true),
			AccountMeta::new(counter, false),
			AccountMeta::new_readonly(system_program::ID, false),
		],
		data: opcode.pack().to_vec(),
	}
}

/// `Initialize` for `wallet`'s counter.
pub fn initialize_instruction(program_id: &Address, wallet: &Address) -> Instruction {
	counter_instruction(CounterInstruction::Initialize, program_id, wallet)
}

/// `Increment` for `wallet`'s counter.
pub fn increment_instruction(program_id: &Address, wallet: &Address) -> Instruction {
	counter_instruction(CounterInstruction::Increment, program_id, wallet)
}

/// The committed state of the counter at `address`.
///
/// Returns `None` when the account does not exist, is not owned by the
/// ledger's program or is too short to hold a counter.
pub fn read_counter(ledger: &Ledger, address: &Address) -> Option<CounterState> {
	let record = ledger.account(address)?;
	if record.owner != Some(ledger.config().program_id) {
		return None;
	}

	state::decode(&record.data).ok()
}
