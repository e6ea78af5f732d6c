use counter_core::Address;
use counter_core::OverflowMode;
use typed_builder::TypedBuilder;

/// Settings of a [`Ledger`](crate::Ledger).
///
/// ```
/// use counter_core::OverflowMode;
/// use counter_ledger::LedgerConfig;
///
/// let config = LedgerConfig::builder()
/// 	.overflow(OverflowMode::Reject)
/// 	.build();
/// assert_eq!(config.program_id, counter_core::ID);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct LedgerConfig {
	/// The address the counter program is deployed at.
	#[builder(default = counter_core::ID)]
	pub program_id: Address,
	/// What `Increment` does at 255.
	#[builder(default)]
	pub overflow: OverflowMode,
}

impl Default for LedgerConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}
