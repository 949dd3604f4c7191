/* src/monitor/wait.rs */

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::source::EventSource;
use crate::watch::{Condition, ConditionWatcher, WaitError, WaitResult, WatchEvent};

use super::{Config, FibonacciBackoff};

#[cfg(feature = "logging")]
use log::{info, warn};

/// Waits for a condition across stream reattachments.
///
/// One attempt spans one subscription and one watcher. A terminal
/// failure that classifies as retryable is consumed here and a fresh
/// attempt starts with the same condition; the caller only ever sees
/// the final outcome. Timeout policy stays with the caller: wrap
/// [`Monitor::wait_until`] in a timeout or drop the future.
pub struct Monitor<T> {
	source: Arc<dyn EventSource<T>>,
	config: Config,
}

/// Builder for Monitor.
pub struct MonitorBuilder<T> {
	source: Option<Arc<dyn EventSource<T>>>,
	config: Config,
}

impl<T> MonitorBuilder<T>
where
	T: Send + Sync + 'static,
{
	pub fn new() -> Self {
		Self {
			source: None,
			config: Config::default(),
		}
	}

	pub fn source<S>(mut self, source: Arc<S>) -> Self
	where
		S: EventSource<T> + 'static,
	{
		let source: Arc<dyn EventSource<T>> = source;
		self.source = Some(source);
		self
	}

	pub fn config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	pub fn build(self) -> Result<Monitor<T>, &'static str> {
		let source = self.source.ok_or("source is required")?;

		Ok(Monitor {
			source,
			config: self.config,
		})
	}
}

impl<T> Default for MonitorBuilder<T>
where
	T: Send + Sync + 'static,
{
	fn default() -> Self {
		Self::new()
	}
}

/// Aborts a still-running pump when an attempt is abandoned mid-wait.
struct PumpGuard(JoinHandle<()>);

impl Drop for PumpGuard {
	fn drop(&mut self) {
		self.0.abort();
	}
}

impl<T> Monitor<T>
where
	T: Send + Sync + 'static,
{
	pub fn builder() -> MonitorBuilder<T> {
		MonitorBuilder::new()
	}

	pub fn new<S>(source: Arc<S>) -> Self
	where
		S: EventSource<T> + 'static,
	{
		let source: Arc<dyn EventSource<T>> = source;
		Self {
			source,
			config: Config::default(),
		}
	}

	pub fn with_config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	/// Runs attempts until the condition is met, the object is reported
	/// absent, or a terminal failure occurs.
	pub async fn wait_until(&self, condition: impl Condition<T> + 'static) -> WaitResult<T> {
		let condition: Arc<dyn Condition<T>> = Arc::new(condition);
		let mut backoff = FibonacciBackoff::new(self.config.backoff_min, self.config.backoff_max);
		let mut retries = 0u32;

		loop {
			match self.attempt(Arc::clone(&condition)).await {
				Ok(value) => {
					#[cfg(feature = "logging")]
					info!("watch condition satisfied after {} attempt(s)", retries + 1);
					return Ok(value);
				}
				Err(error) => {
					if !error.should_retry() {
						#[cfg(feature = "logging")]
						warn!("watch failed terminally: {}", error);
						return Err(error);
					}
					if let Some(max) = self.config.max_retries {
						if retries >= max {
							#[cfg(feature = "logging")]
							warn!("watch retry budget exhausted: {}", error);
							return Err(error);
						}
					}
					retries += 1;
					let delay = backoff.next_delay();
					tracing::debug!(
						"watch stream failed ({}), reattaching in {:?} (attempt {})",
						error,
						delay,
						retries + 1
					);
					tokio::time::sleep(delay).await;
				}
			}
		}
	}

	/// One subscription, one watcher, one outcome.
	async fn attempt(&self, condition: Arc<dyn Condition<T>>) -> WaitResult<T> {
		let mut subscription = self
			.source
			.subscribe()
			.await
			.map_err(|error| WaitError::Closed {
				source: Some(error),
			})?;

		let (watcher, handle) = ConditionWatcher::with_condition(condition);
		let pump = PumpGuard(tokio::spawn(async move {
			while let Some(event) = subscription.recv().await {
				watcher.on_event(event);
				if watcher.is_complete() {
					return;
				}
			}
			// Producer went away without a terminal event.
			watcher.on_event(WatchEvent::Closed(None));
		}));

		let outcome = handle.wait().await;
		drop(pump);
		outcome
	}
}
