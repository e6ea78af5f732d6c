//! Core of the counter program.
//!
//! Each wallet owns one counter stored at a program derived address seeded by
//! the wallet's address and the `"counter"` tag. The account is 33 bytes:
//!
//! ```text
//! | offset | size | field |
//! |--------|------|-------|
//! | 0      | 32   | owner |
//! | 32     | 1    | count |
//! ```
//!
//! Two instructions mutate it, selected by the first byte of instruction data:
//!
//! | Opcode | Variant      | Description                                 |
//! |--------|--------------|---------------------------------------------|
//! | `0`    | `Initialize` | Allocate the counter PDA with `count = 1`.  |
//! | `1`    | `Increment`  | Add 1 to the count, wrapping at 255.        |
//!
//! Nothing in this crate talks to a runtime directly. The processor works
//! against the [`AccountHandle`] and [`AccountAllocator`] traits, which the
//! on-chain program implements for pinocchio's `AccountView` and the
//! in-memory ledger implements for its own loaded accounts.

#![no_std]

mod error;
mod host;
mod instruction;
mod pda;
pub mod processor;
pub mod state;
mod utils;
mod validation;

pub use solana_address::Address;
pub use solana_address::MAX_SEEDS;
pub use solana_program_error::ProgramError;
#[cfg(feature = "logs")]
#[doc(hidden)]
pub use solana_program_log;

pub use crate::error::*;
pub use crate::host::*;
pub use crate::instruction::*;
pub use crate::pda::*;
pub use crate::processor::process_instruction;
pub use crate::state::CounterState;
pub use crate::state::OverflowMode;
pub use crate::utils::*;
pub use crate::validation::*;

/// Result type returned by instruction handlers and host operations.
pub type ProgramResult = Result<(), ProgramError>;

// The on-chain address of the counter program.
solana_address::declare_id!("An5EyhKcSZ7zjJGRrC6GXMn8k5GWmBG2bFf7RC1CQ57u");

/// The system program, which owns every account that has not been claimed by
/// another program.
pub mod system_program {
	solana_address::declare_id!("11111111111111111111111111111111");
}

#[cfg(feature = "logs")]
#[macro_export]
macro_rules! log {
	($($arg:tt)*) => {
		$crate::solana_program_log::log!($($arg)*);
	};
}

#[cfg(not(feature = "logs"))]
#[macro_export]
macro_rules! log {
	($($arg:tt)*) => {};
}
