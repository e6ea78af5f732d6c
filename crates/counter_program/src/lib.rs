//! On-chain counter program.
//!
//! Thin pinocchio shell around [`counter_core`]: it wraps the runtime's
//! accounts in [`ProgramAccount`], hands account creation to the system
//! program through [`SystemProgram`] and exposes the BPF entrypoint behind
//! the `bpf-entrypoint` feature.
//!
//! ## Instructions
//!
//! | Opcode | Variant      | Accounts                                         |
//! |--------|--------------|--------------------------------------------------|
//! | `0`    | `Initialize` | signer (s, w), counter (w), system program       |
//! | `1`    | `Increment`  | signer (s), counter (w), system program          |
//!
//! ## Features
//!
//! - `bpf-entrypoint`: emit the program entrypoint, allocator and panic
//!   handler.
//! - `checked-count`: fail `Increment` at 255 instead of wrapping to 0.
//! - `logs`: log validation failures (on by default).

#![allow(clippy::inline_always)]
#![no_std]

// On native builds the cdylib target needs std for unwinding and panic
// handling. On BPF, the entrypoint module provides the panic handler and
// allocator. Tests link against std automatically.
#[cfg(all(
	not(any(target_os = "solana", target_arch = "bpf")),
	not(feature = "bpf-entrypoint"),
	not(test)
))]
extern crate std;

mod account;
mod cpi;

pub use counter_core::ID;
pub use counter_core::check_id;
pub use counter_core::id;
use counter_core::Address;
use counter_core::OverflowMode;
use counter_core::ProgramError;
use counter_core::ProgramResult;
use pinocchio::AccountView;

pub use crate::account::*;
pub use crate::cpi::*;

/// What `Increment` does at 255 in this build.
pub const OVERFLOW_MODE: OverflowMode = if cfg!(feature = "checked-count") {
	OverflowMode::Reject
} else {
	OverflowMode::Wrap
};

/// Run one counter instruction against the accounts the runtime loaded.
///
/// Fails with `IncorrectProgramId` when invoked under any address other
/// than [`ID`].
#[inline(always)]
pub fn process_instruction(
	program_id: &Address,
	accounts: &[AccountView],
	data: &[u8],
) -> ProgramResult {
	if program_id != &ID {
		return Err(ProgramError::IncorrectProgramId);
	}

	counter_core::process_instruction(
		&SystemProgram,
		program_id,
		accounts.iter().map(ProgramAccount),
		data,
		OVERFLOW_MODE,
	)
}

#[cfg(feature = "bpf-entrypoint")]
pub mod entrypoint {
	pinocchio::program_entrypoint!(super::process_instruction);
	pinocchio::no_allocator!();
	pinocchio::nostd_panic_handler!();
}
