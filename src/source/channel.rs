/* src/source/channel.rs */

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use super::{DEFAULT_SUBSCRIPTION_CAPACITY, EventSource, Subscription};
use crate::watch::{StreamError, WatchEvent};

/// An in-memory source that fans published events out to every live
/// subscription. Useful for tests and for bridging a transport that
/// delivers events through callbacks.
pub struct ChannelSource<T> {
	subscribers: Mutex<Vec<mpsc::Sender<WatchEvent<T>>>>,
	capacity: usize,
}

impl<T> ChannelSource<T>
where
	T: Clone + Send,
{
	/// Creates a source with the default subscription buffer.
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_SUBSCRIPTION_CAPACITY)
	}

	/// Creates a source with a custom subscription buffer.
	///
	/// Note: `publish` awaits channel capacity, so a subscriber that
	/// stops draining its subscription stalls publishing.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			subscribers: Mutex::new(Vec::new()),
			capacity,
		}
	}

	/// Delivers `event` to every live subscription, pruning ones whose
	/// receiver is gone.
	pub async fn publish(&self, event: WatchEvent<T>) {
		let mut subscribers = self.subscribers.lock().await;
		let mut live = Vec::with_capacity(subscribers.len());
		for sender in subscribers.drain(..) {
			if sender.send(event.clone()).await.is_ok() {
				live.push(sender);
			}
		}
		*subscribers = live;
	}

	/// Ends every subscription; receivers observe end-of-stream.
	pub async fn close(&self) {
		self.subscribers.lock().await.clear();
	}
}

impl<T> Default for ChannelSource<T>
where
	T: Clone + Send,
{
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl<T> EventSource<T> for ChannelSource<T>
where
	T: Clone + Send,
{
	async fn subscribe(&self) -> Result<Subscription<T>, StreamError> {
		let (sender, receiver) = mpsc::channel(self.capacity);
		self.subscribers.lock().await.push(sender);
		Ok(receiver)
	}
}
