use std::time::Duration;

use tokio::time::{Instant, sleep};

/// Spaces consecutive requests by a fixed minimum delay
pub struct Throttle {
    delay: Duration,
    last_request: Option<Instant>,
}

impl Throttle {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_request: None,
        }
    }

    /// Sleep until the delay since the previous request has passed.
    /// The first call never waits.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.delay {
                sleep(self.delay - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}
