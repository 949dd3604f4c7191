/* src/monitor/backoff.rs */

use std::time::Duration;

/// Fibonacci reattach delays: min, min, 2·min, 3·min, 5·min, ... capped
/// at max. Grows more slowly than exponential backoff, which suits
/// streams that usually reattach on the first try.
#[derive(Debug, Clone)]
pub struct FibonacciBackoff {
	min: Duration,
	max: Duration,
	prev: Duration,
	current: Duration,
}

impl FibonacciBackoff {
	pub fn new(min: Duration, max: Duration) -> Self {
		Self {
			min,
			max,
			prev: Duration::ZERO,
			current: min,
		}
	}

	/// Next delay, advancing the sequence.
	pub fn next_delay(&mut self) -> Duration {
		let delay = self.current;
		let next = self.prev + self.current;
		self.prev = self.current;
		self.current = next.min(self.max);
		delay
	}

	/// Restarts the sequence, e.g. after a healthy reattach.
	pub fn reset(&mut self) {
		self.prev = Duration::ZERO;
		self.current = self.min;
	}
}
