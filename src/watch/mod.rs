use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod condition;
mod retry;
mod slot;
mod watcher;

#[cfg(feature = "stream")]
mod stream;

pub use condition::Condition;
pub use retry::HTTP_GONE;
pub use slot::WaitHandle;
pub use watcher::ConditionWatcher;

#[cfg(feature = "stream")]
pub use stream::wait_on_stream;

#[cfg(all(feature = "stream", feature = "source"))]
pub use stream::subscription_stream;

/// One notification describing the tracked object's lifecycle, or the
/// end of the stream carrying it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "object", rename_all = "UPPERCASE")
)]
pub enum WatchEvent<T> {
    /// The object came into existence.
    Added(T),

    /// The object's state changed.
    Modified(T),

    /// The object was removed.
    Deleted(T),

    /// The stream explicitly reported an error condition.
    Error(StreamError),

    /// The stream terminated, possibly with an underlying cause.
    Closed(Option<StreamError>),
}

/// Error surfaced by the underlying transport.
///
/// Carries the HTTP-style status code when the transport had one,
/// either directly or inside a status object reported by the remote
/// side; retry classification inspects both.
#[derive(Debug, Clone, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{message}")]
pub struct StreamError {
    pub message: String,
    pub code: Option<u16>,
    pub status: Option<StatusDetails>,
}

impl StreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            status: None,
        }
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_status(mut self, status: StatusDetails) -> Self {
        self.status = Some(status);
        self
    }
}

/// Machine-readable status carried by some transport errors.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatusDetails {
    pub code: Option<u16>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

/// Terminal failure of a single wait attempt.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WaitError {
    /// The stream reported an error event.
    #[error("watch stream reported an error")]
    Protocol {
        #[source]
        source: Option<StreamError>,
    },

    /// The stream ended before the condition was met.
    #[error("watch stream closed")]
    Closed {
        #[source]
        source: Option<StreamError>,
    },

    /// The tracked object was deleted while the condition required it
    /// to exist, so the condition can never be met.
    #[error("unexpected deletion of watched object, condition can never be met")]
    UnexpectedDeletion,
}

/// Outcome of a wait: the satisfying object, explicit absence (the
/// condition accepted deletion), or a terminal failure.
pub type WaitResult<T> = Result<Option<Arc<T>>, WaitError>;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_event_wire_shape() {
        let event: WatchEvent<serde_json::Value> =
            serde_json::from_str(r#"{"type":"ADDED","object":{"phase":"Running"}}"#).unwrap();
        match event {
            WatchEvent::Added(object) => assert_eq!(object["phase"], "Running"),
            other => panic!("expected Added, got {:?}", other),
        }
    }

    #[test]
    fn test_closed_round_trip() {
        let event: WatchEvent<serde_json::Value> =
            WatchEvent::Closed(Some(StreamError::new("gone").with_code(410)));
        let encoded = serde_json::to_string(&event).unwrap();
        let decoded: WatchEvent<serde_json::Value> = serde_json::from_str(&encoded).unwrap();
        match decoded {
            WatchEvent::Closed(Some(error)) => assert_eq!(error.code, Some(410)),
            other => panic!("expected Closed with cause, got {:?}", other),
        }
    }
}
