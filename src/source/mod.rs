use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::watch::{StreamError, WatchEvent};

mod channel;

pub use channel::ChannelSource;

/// Default per-subscription event buffer.
pub const DEFAULT_SUBSCRIPTION_CAPACITY: usize = 100;

/// Live delivery side of one subscription. Ends when the producer
/// drops its sender.
pub type Subscription<T> = mpsc::Receiver<WatchEvent<T>>;

/// Abstract transport that can attach a live change-event stream for
/// the tracked object.
#[async_trait]
pub trait EventSource<T>: Send + Sync {
    /// Opens a new subscription.
    ///
    /// Establishment failures surface as [`StreamError`] so callers can
    /// classify them; the error carries the transport's status code
    /// when one is available.
    async fn subscribe(&self) -> Result<Subscription<T>, StreamError>;
}
