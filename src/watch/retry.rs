/* src/watch/retry.rs */

use super::{StreamError, WaitError};

/// Status code the server returns once the watched object's change
/// history has been compacted past the stream's resume position.
pub const HTTP_GONE: u16 = 410;

impl StreamError {
	/// True when either the direct code or the status-object code says
	/// the requested history is gone.
	fn is_gone(&self) -> bool {
		self.code == Some(HTTP_GONE)
			|| self
				.status
				.as_ref()
				.is_some_and(|status| status.code == Some(HTTP_GONE))
	}
}

impl WaitError {
	/// The transport error wrapped by this failure, if any.
	pub fn stream_error(&self) -> Option<&StreamError> {
		match self {
			WaitError::Protocol { source } | WaitError::Closed { source } => source.as_ref(),
			WaitError::UnexpectedDeletion => None,
		}
	}

	/// Whether reattaching the stream is worth attempting.
	///
	/// Gone means the server has discarded the history the stream would
	/// resume from; a fresh subscription from the same point cannot
	/// succeed and the caller must restart from a fresh listing. A
	/// failure with no transport cause carries no evidence either way
	/// and classifies as retryable.
	pub fn should_retry(&self) -> bool {
		match self.stream_error() {
			Some(error) => !error.is_gone(),
			None => true,
		}
	}
}
