/* tests/stream_tests.rs */

#![cfg(feature = "stream")]

use futures_util::stream;

use vigil::watch::{StreamError, WaitError, WatchEvent, wait_on_stream};

#[derive(Debug, Clone, PartialEq)]
struct TestResource {
	name: String,
	phase: String,
}

fn resource(phase: &str) -> TestResource {
	TestResource {
		name: "tracked".to_string(),
		phase: phase.to_string(),
	}
}

fn phase_running(object: Option<&TestResource>) -> bool {
	object.is_some_and(|o| o.phase == "Running")
}

#[tokio::test]
async fn test_stream_satisfies_condition() {
	let events = stream::iter(vec![
		WatchEvent::Added(resource("Pending")),
		WatchEvent::Modified(resource("Running")),
	]);

	let object = wait_on_stream(events, phase_running).await.unwrap().unwrap();
	assert_eq!(object.phase, "Running");
}

#[tokio::test]
async fn test_exhausted_stream_counts_as_closed() {
	let events = stream::iter(vec![WatchEvent::Added(resource("Pending"))]);

	let error = wait_on_stream(events, phase_running).await.unwrap_err();
	assert!(matches!(error, WaitError::Closed { source: None }));
}

#[tokio::test]
async fn test_stream_error_event_is_terminal() {
	let events = stream::iter(vec![
		WatchEvent::Added(resource("Pending")),
		WatchEvent::Error(StreamError::new("expired").with_code(410)),
		WatchEvent::Modified(resource("Running")),
	]);

	let error = wait_on_stream(events, phase_running).await.unwrap_err();
	assert!(matches!(error, WaitError::Protocol { .. }));
	assert!(!error.should_retry());
}

#[cfg(feature = "source")]
mod subscription {
	use std::sync::Arc;

	use vigil::source::{ChannelSource, EventSource};
	use vigil::watch::subscription_stream;

	use super::*;

	#[tokio::test]
	async fn test_subscription_stream_delivers_events() {
		let source = Arc::new(ChannelSource::new());
		let subscription = source.subscribe().await.unwrap();

		let publisher = Arc::clone(&source);
		tokio::spawn(async move {
			publisher
				.publish(WatchEvent::Added(resource("Pending")))
				.await;
			publisher
				.publish(WatchEvent::Modified(resource("Running")))
				.await;
		});

		let object = wait_on_stream(subscription_stream(subscription), phase_running)
			.await
			.unwrap()
			.unwrap();
		assert_eq!(object.phase, "Running");
	}
}
