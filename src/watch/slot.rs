/* src/watch/slot.rs */

use std::pin::pin;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tokio::sync::Notify;

use super::WaitResult;

/// Shared single-assignment cell behind a wait.
///
/// The first `resolve` wins; every later attempt is a no-op. Waiters
/// register on `notify` before re-checking the cell, so a resolution
/// racing with the check is never lost.
pub(crate) struct Slot<T> {
	cell: ArcSwapOption<WaitResult<T>>,
	notify: Notify,
}

impl<T> Slot<T> {
	pub(crate) fn new() -> Self {
		Self {
			cell: ArcSwapOption::new(None),
			notify: Notify::new(),
		}
	}

	/// Stores `value` if the slot is still empty. Returns whether this
	/// call performed the assignment.
	pub(crate) fn resolve(&self, value: WaitResult<T>) -> bool {
		let previous = self
			.cell
			.compare_and_swap(&None::<Arc<WaitResult<T>>>, Some(Arc::new(value)));
		if previous.is_none() {
			self.notify.notify_waiters();
			true
		} else {
			false
		}
	}

	pub(crate) fn get(&self) -> Option<Arc<WaitResult<T>>> {
		self.cell.load_full()
	}

	pub(crate) fn is_resolved(&self) -> bool {
		self.cell.load().is_some()
	}
}

/// Cloneable reader side of a wait.
///
/// Any number of handles may observe the outcome; only the watcher
/// bound to the slot ever writes it, and only once effectively.
pub struct WaitHandle<T> {
	pub(crate) slot: Arc<Slot<T>>,
}

impl<T> Clone for WaitHandle<T> {
	fn clone(&self) -> Self {
		Self {
			slot: Arc::clone(&self.slot),
		}
	}
}

impl<T> WaitHandle<T> {
	/// Returns the outcome without suspending, if already decided.
	pub fn peek(&self) -> Option<WaitResult<T>> {
		self.slot.get().map(|outcome| (*outcome).clone())
	}

	pub fn is_resolved(&self) -> bool {
		self.slot.is_resolved()
	}

	/// Suspends until the watcher resolves the slot.
	pub async fn wait(&self) -> WaitResult<T> {
		loop {
			let mut notified = pin!(self.slot.notify.notified());
			notified.as_mut().enable();
			if let Some(outcome) = self.slot.get() {
				return (*outcome).clone();
			}
			notified.await;
		}
	}
}
