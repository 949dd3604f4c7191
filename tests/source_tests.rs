/* tests/source_tests.rs */

#![cfg(feature = "source")]

use vigil::source::{ChannelSource, EventSource};
use vigil::watch::WatchEvent;

#[derive(Debug, Clone, PartialEq)]
struct TestResource {
	name: String,
}

fn resource(name: &str) -> TestResource {
	TestResource {
		name: name.to_string(),
	}
}

#[tokio::test]
async fn test_publish_fans_out_to_all_subscriptions() {
	let source = ChannelSource::new();
	let mut first = source.subscribe().await.unwrap();
	let mut second = source.subscribe().await.unwrap();

	source.publish(WatchEvent::Added(resource("tracked"))).await;

	assert!(matches!(first.recv().await, Some(WatchEvent::Added(o)) if o.name == "tracked"));
	assert!(matches!(second.recv().await, Some(WatchEvent::Added(o)) if o.name == "tracked"));
}

#[tokio::test]
async fn test_close_ends_subscriptions() {
	let source: ChannelSource<TestResource> = ChannelSource::new();
	let mut subscription = source.subscribe().await.unwrap();

	source.close().await;

	assert!(subscription.recv().await.is_none());
}

#[tokio::test]
async fn test_dropped_subscription_is_pruned() {
	let source = ChannelSource::with_capacity(4);
	let first = source.subscribe().await.unwrap();
	let mut second = source.subscribe().await.unwrap();

	drop(first);
	source.publish(WatchEvent::Added(resource("tracked"))).await;
	source
		.publish(WatchEvent::Modified(resource("tracked")))
		.await;

	assert!(matches!(second.recv().await, Some(WatchEvent::Added(_))));
	assert!(matches!(second.recv().await, Some(WatchEvent::Modified(_))));
}
