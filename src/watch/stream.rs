use futures_util::{Stream, StreamExt};

use super::{Condition, ConditionWatcher, WaitResult, WatchEvent};

#[cfg(feature = "source")]
use crate::source::Subscription;
#[cfg(feature = "source")]
use tokio_stream::wrappers::ReceiverStream;

/// Drives a fresh watcher from an event stream until the outcome is
/// decided.
///
/// A stream that ends without a terminal event counts as a closed
/// stream. This is a single attempt with no reattachment; reconnection
/// belongs to the caller or to the monitor.
pub async fn wait_on_stream<T, S, C>(mut events: S, condition: C) -> WaitResult<T>
where
    T: 'static,
    S: Stream<Item = WatchEvent<T>> + Unpin,
    C: Condition<T> + 'static,
{
    let (watcher, handle) = ConditionWatcher::new(condition);

    while let Some(event) = events.next().await {
        watcher.on_event(event);
        if watcher.is_complete() {
            break;
        }
    }

    if !watcher.is_complete() {
        watcher.on_event(WatchEvent::Closed(None));
    }

    handle.wait().await
}

/// Adapts a subscription into a `Stream` for [`wait_on_stream`].
#[cfg(feature = "source")]
pub fn subscription_stream<T>(subscription: Subscription<T>) -> ReceiverStream<WatchEvent<T>> {
    ReceiverStream::new(subscription)
}
