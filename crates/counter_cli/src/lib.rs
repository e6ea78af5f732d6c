//! Commands behind the `counter` binary.
//!
//! `derive` prints the counter address of a wallet. `simulate` replays
//! `Initialize` followed by a number of `Increment`s against a fresh
//! in-memory ledger and reports the final account.

pub mod error;

use std::str::FromStr;

use clap::Parser;
use clap::Subcommand;
use counter_core::Address;
use counter_core::OverflowMode;
use counter_core::derive_counter_address;
use counter_ledger::Ledger;
use counter_ledger::LedgerConfig;
use counter_ledger::Transaction;
use counter_ledger::increment_instruction;
use counter_ledger::initialize_instruction;
use counter_ledger::read_counter;
use serde::Serialize;

pub use crate::error::CliError;

/// Wallet used by `simulate` when none is given.
pub const DEFAULT_WALLET: &str = "BHvLHF6mJpWxywWY5S2tsHdDtHirHyeRxoS6uF6T5FoY";

/// Lamports airdropped to the simulated wallet.
const SIMULATION_AIRDROP: u64 = 1_000_000_000;

#[derive(Parser, Debug)]
#[command(name = "counter", version, about = "Derive and simulate counter program accounts")]
pub struct Cli {
	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
	/// Print the counter address and bump owned by a wallet.
	Derive {
		/// Base58 address of the wallet.
		wallet: String,

		/// Print JSON instead of text.
		#[arg(long, default_value_t = false)]
		json: bool,
	},
	/// Run `Initialize` and `N` increments against an in-memory ledger.
	Simulate {
		/// Number of `Increment` transactions after `Initialize`.
		#[arg(short = 'n', long, default_value_t = 0)]
		increments: u32,

		/// Base58 address of the simulated wallet.
		#[arg(short, long, default_value = DEFAULT_WALLET)]
		wallet: String,

		/// Fail at 255 instead of wrapping to 0.
		#[arg(long, default_value_t = false)]
		reject_overflow: bool,

		/// Print JSON instead of text.
		#[arg(long, default_value_t = false)]
		json: bool,
	},
}

/// Output of `counter derive`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeriveReport {
	pub program_id: String,
	pub wallet: String,
	pub counter: String,
	pub bump: u8,
}

/// Output of `counter simulate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateReport {
	pub wallet: String,
	pub counter: String,
	pub owner: String,
	pub count: u8,
	pub increments: u32,
	pub overflow: &'static str,
	pub data: Vec<u8>,
}

pub fn parse_address(input: &str) -> Result<Address, CliError> {
	Address::from_str(input).map_err(|_| {
		CliError::InvalidAddress {
			input: input.to_owned(),
		}
	})
}

/// Derive the counter of `wallet` under the counter program.
pub fn derive(wallet: &str) -> Result<DeriveReport, CliError> {
	let wallet = parse_address(wallet)?;
	let (counter, bump) = derive_counter_address(&wallet, &counter_core::ID);

	Ok(DeriveReport {
		program_id: counter_core::ID.to_string(),
		wallet: wallet.to_string(),
		counter: counter.to_string(),
		bump,
	})
}

/// Initialize `wallet`'s counter on a fresh ledger and increment it
/// `increments` times, one transaction each.
pub fn simulate(wallet: &str, increments: u32, overflow: OverflowMode) -> Result<SimulateReport, CliError> {
	let wallet = parse_address(wallet)?;
	let config = LedgerConfig::builder().overflow(overflow).build();
	let program_id = config.program_id;
	let mut ledger = Ledger::new(config);
	ledger.airdrop(&wallet, SIMULATION_AIRDROP);

	ledger.process_transaction(&Transaction::new(
		vec![initialize_instruction(&program_id, &wallet)],
		&[wallet],
	))?;

	let increment = Transaction::new(vec![increment_instruction(&program_id, &wallet)], &[wallet]);
	for _ in 0..increments {
		ledger.process_transaction(&increment)?;
	}

	let (counter, _) = derive_counter_address(&wallet, &program_id);
	let state = read_counter(&ledger, &counter).ok_or(CliError::MissingCounter(counter))?;

	Ok(SimulateReport {
		wallet: wallet.to_string(),
		counter: counter.to_string(),
		owner: state.owner.to_string(),
		count: state.count,
		increments,
		overflow: match overflow {
			OverflowMode::Wrap => "wrap",
			OverflowMode::Reject => "reject",
		},
		data: state.as_bytes().to_vec(),
	})
}

pub fn render_derive(report: &DeriveReport, json: bool) -> Result<String, CliError> {
	if json {
		return Ok(serde_json::to_string_pretty(report)?);
	}

	Ok(format!(
		"wallet:  {}\ncounter: {}\nbump:    {}",
		report.wallet, report.counter, report.bump
	))
}

pub fn render_simulate(report: &SimulateReport, json: bool) -> Result<String, CliError> {
	if json {
		return Ok(serde_json::to_string_pretty(report)?);
	}

	Ok(format!(
		"counter: {}\nowner:   {}\ncount:   {} after {} increment(s), overflow {}",
		report.counter, report.owner, report.count, report.increments, report.overflow
	))
}
