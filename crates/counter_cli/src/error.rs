use counter_core::Address;
use counter_ledger::TransactionError;

/// Errors produced by the `counter` commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error("`{input}` is not a valid base58 address")]
	InvalidAddress { input: String },

	#[error("transaction rejected: {0}")]
	Transaction(#[from] TransactionError),

	#[error("no counter found at {0}")]
	MissingCounter(Address),

	#[error("failed to serialize output: {0}")]
	Json(#[from] serde_json::Error),
}
