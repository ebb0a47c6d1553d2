use std::time::{Duration, Instant};

/// Rate limiter for bursty event sources. The first call always passes.
pub struct Throttle {
	interval: Duration,
	last: Option<Instant>,
}

impl Throttle {
	pub fn new(interval: Duration) -> Self {
		Throttle {
			interval,
			last: None,
		}
	}

	pub fn ready(&mut self) -> bool {
		let now = Instant::now();

		match self.last {
			Some(last) if now.duration_since(last) < self.interval => false,
			_ => {
				self.last = Some(now);
				true
			},
		}
	}
}
