//! An in-memory ledger that runs the counter program natively.
//!
//! The ledger stores accounts by address, checks signatures and account
//! privileges the way the runtime does and executes each transaction
//! atomically against [`counter_core::process_instruction`]. Rent and fees
//! are not modelled.
//!
//! ```
//! use counter_core::derive_counter_address;
//! use counter_ledger::Ledger;
//! use counter_ledger::Transaction;
//! use counter_ledger::increment_instruction;
//! use counter_ledger::initialize_instruction;
//! use counter_ledger::read_counter;
//!
//! let wallet = counter_core::Address::new_from_array([1; 32]);
//! let mut ledger = Ledger::default();
//! ledger.airdrop(&wallet, 1_000_000_000);
//!
//! let program_id = ledger.config().program_id;
//! let transaction = Transaction::new(
//! 	vec![
//! 		initialize_instruction(&program_id, &wallet),
//! 		increment_instruction(&program_id, &wallet),
//! 	],
//! 	&[wallet],
//! );
//! ledger.process_transaction(&transaction).unwrap();
//!
//! let (counter, _) = derive_counter_address(&wallet, &program_id);
//! assert_eq!(read_counter(&ledger, &counter).map(|state| state.count), Some(2));
//! ```

mod account;
mod client;
mod config;
mod error;
mod ledger;
mod system;

pub use crate::account::*;
pub use crate::client::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::ledger::*;
pub use crate::system::*;
