/* src/lib.rs */

//!
//! This crate integrates three components:
//!
//! - **watch**: Exactly-once condition waiting over object change
//!   events, with retryable/terminal failure classification.
//! - **source**: The subscription seam to an external change-event
//!   transport, plus an in-memory implementation.
//! - **monitor**: A reconnect loop that reattaches the stream after
//!   retryable failures.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `source`: Enables the `source` module.
//! - `monitor`: Enables the `monitor` module (requires `source`).
//! - `stream`: Futures `Stream` entry points for the watch core.
//! - `serde`: Serialization for events and transport errors.
//! - `logging`: Log lines from the monitor.
//!
//! ## Basic Usage
//!
//! See `demos/basic.rs` for a complete example.

pub mod watch;

#[cfg(feature = "source")]
pub mod source;

#[cfg(feature = "monitor")]
pub mod monitor;
