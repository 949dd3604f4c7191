/* src/watch/watcher.rs */

use std::sync::Arc;

use super::slot::Slot;
use super::{Condition, WaitError, WaitHandle, WatchEvent};

/// Converts a stream of change events for one tracked object into a
/// single-shot outcome.
///
/// One watcher serves one wait attempt: it evaluates the condition on
/// every add/update event, treats deletion as either satisfaction or a
/// terminal failure, and maps stream errors to [`WaitError`]. After the
/// first resolution the watcher is inert and later events are ignored.
pub struct ConditionWatcher<T> {
	condition: Arc<dyn Condition<T>>,
	slot: Arc<Slot<T>>,
}

impl<T> ConditionWatcher<T> {
	/// Creates a watcher and the handle observing its outcome.
	pub fn new(condition: impl Condition<T> + 'static) -> (Self, WaitHandle<T>) {
		Self::with_condition(Arc::new(condition))
	}

	/// Creates a watcher from an already shared condition, so a
	/// reconnect loop can hand the same condition to successive
	/// attempts.
	pub fn with_condition(condition: Arc<dyn Condition<T>>) -> (Self, WaitHandle<T>) {
		let slot = Arc::new(Slot::new());
		let handle = WaitHandle {
			slot: Arc::clone(&slot),
		};
		(Self { condition, slot }, handle)
	}

	/// Another handle on this watcher's outcome.
	pub fn handle(&self) -> WaitHandle<T> {
		WaitHandle {
			slot: Arc::clone(&self.slot),
		}
	}

	/// Whether the outcome has been decided.
	pub fn is_complete(&self) -> bool {
		self.slot.is_resolved()
	}

	/// Feeds one event to the watcher.
	///
	/// Safe to call from any producer thread; never blocks. Events
	/// delivered after resolution can legitimately race with stream
	/// teardown and are silently dropped.
	pub fn on_event(&self, event: WatchEvent<T>) {
		if self.slot.is_resolved() {
			return;
		}
		match event {
			WatchEvent::Added(object) | WatchEvent::Modified(object) => {
				if self.condition.matches(Some(&object)) {
					self.slot.resolve(Ok(Some(Arc::new(object))));
				}
			}
			WatchEvent::Deleted(_) => {
				if self.condition.matches(None) {
					self.slot.resolve(Ok(None));
				} else {
					// Deletion can never satisfy a condition that
					// requires the object to exist; stop waiting now
					// instead of hanging until an external timeout.
					self.slot.resolve(Err(WaitError::UnexpectedDeletion));
				}
			}
			WatchEvent::Error(error) => {
				self.slot.resolve(Err(WaitError::Protocol {
					source: Some(error),
				}));
			}
			WatchEvent::Closed(cause) => {
				self.slot.resolve(Err(WaitError::Closed { source: cause }));
			}
		}
	}
}
