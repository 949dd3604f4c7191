/* src/monitor/mod.rs */

//!
//! Reconnect loop around the watch core.
//!
//! - [`Monitor`] - waits for a condition across stream reattachments

use std::time::Duration;

mod backoff;
mod wait;

pub use backoff::FibonacciBackoff;
pub use wait::{Monitor, MonitorBuilder};

/// Tuning for the reconnect loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// First reattach delay; also the second, before the sequence grows.
	pub backoff_min: Duration,

	/// Cap on the reattach delay.
	pub backoff_max: Duration,

	/// Reattach budget. `None` retries until a terminal outcome; once a
	/// bounded budget is spent, the last failure is surfaced verbatim.
	pub max_retries: Option<u32>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			backoff_min: Duration::from_secs(1),
			backoff_max: Duration::from_secs(30),
			max_retries: None,
		}
	}
}
