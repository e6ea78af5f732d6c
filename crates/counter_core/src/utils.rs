#[cfg(feature = "logs")]
use core::panic::Location;

#[cfg(feature = "logs")]
use crate::log;

/// Logs caller file/line/column when `logs` feature is enabled.
///
/// Used by the account validation methods.
#[cfg(feature = "logs")]
#[track_caller]
#[inline(always)]
pub fn log_caller() {
	let caller = Location::caller();
	log!(
		"Location: {}:{}:{}",
		caller.file(),
		caller.line(),
		caller.column()
	);
}

/// No-op variant used when the `logs` feature is disabled.
#[cfg(not(feature = "logs"))]
#[inline(always)]
pub fn log_caller() {}
