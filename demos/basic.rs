/* demos/basic.rs */

use std::sync::Arc;
use std::time::Duration;

use vigil::monitor::{Config, Monitor};
use vigil::source::ChannelSource;
use vigil::watch::WatchEvent;

#[derive(Debug, Clone)]
struct Server {
	name: String,
	phase: String,
}

fn server(phase: &str) -> Server {
	Server {
		name: "demo-server".to_string(),
		phase: phase.to_string(),
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 1. An in-memory source stands in for the real transport.
	let source = Arc::new(ChannelSource::new());

	// 2. A publisher task plays the role of the stream: the object is
	// created Pending and becomes Running a little later.
	let publisher = Arc::clone(&source);
	tokio::spawn(async move {
		// Give the monitor a moment to subscribe.
		tokio::time::sleep(Duration::from_millis(100)).await;
		publisher.publish(WatchEvent::Added(server("Pending"))).await;
		println!("published: Added (phase=Pending)");

		tokio::time::sleep(Duration::from_millis(200)).await;
		publisher
			.publish(WatchEvent::Modified(server("Pending")))
			.await;
		println!("published: Modified (phase=Pending)");

		tokio::time::sleep(Duration::from_millis(200)).await;
		publisher
			.publish(WatchEvent::Modified(server("Running")))
			.await;
		println!("published: Modified (phase=Running)");
	});

	// 3. Wait until the tracked object reports Running. The monitor
	// reattaches on retryable stream failures; here the first
	// subscription satisfies the condition directly.
	let monitor = Monitor::new(source).with_config(Config::default());
	let object = monitor
		.wait_until(|object: Option<&Server>| object.is_some_and(|o| o.phase == "Running"))
		.await?;

	match object {
		Some(server) => println!("condition met: {} is {}", server.name, server.phase),
		None => println!("condition met: object is gone"),
	}

	Ok(())
}
