/* tests/retry_tests.rs */

use vigil::watch::{HTTP_GONE, StatusDetails, StreamError, WaitError};

#[test]
fn test_gone_code_is_not_retryable() {
	let error = WaitError::Closed {
		source: Some(StreamError::new("resource version too old").with_code(HTTP_GONE)),
	};
	assert!(!error.should_retry());
}

#[test]
fn test_gone_status_object_is_not_retryable() {
	let status = StatusDetails {
		code: Some(HTTP_GONE),
		reason: Some("Expired".to_string()),
		message: None,
	};
	let error = WaitError::Closed {
		source: Some(StreamError::new("watch expired").with_status(status)),
	};
	assert!(!error.should_retry());
}

#[test]
fn test_gone_protocol_error_is_not_retryable() {
	let error = WaitError::Protocol {
		source: Some(StreamError::new("history compacted").with_code(HTTP_GONE)),
	};
	assert!(!error.should_retry());
}

#[test]
fn test_other_codes_are_retryable() {
	let error = WaitError::Closed {
		source: Some(StreamError::new("server hiccup").with_code(500)),
	};
	assert!(error.should_retry());
}

#[test]
fn test_missing_cause_defaults_to_retryable() {
	let closed = WaitError::Closed { source: None };
	assert!(closed.should_retry());

	let protocol = WaitError::Protocol { source: None };
	assert!(protocol.should_retry());
}

#[test]
fn test_cause_without_code_is_retryable() {
	let error = WaitError::Closed {
		source: Some(StreamError::new("connection reset")),
	};
	assert!(error.should_retry());
}

#[test]
fn test_unexpected_deletion_is_retryable() {
	assert!(WaitError::UnexpectedDeletion.should_retry());
	assert!(WaitError::UnexpectedDeletion.stream_error().is_none());
}
