//! Request pacing
//!
//! The scraper keeps exactly one request in flight. `Pacer` spaces those
//! requests out: once a request has finished and been recorded, the next
//! `ready()` call waits until the configured interval has passed since then.

use crate::config::CrawlerConfig;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Minimum-interval pacing policy for sequential requests
#[derive(Debug, Clone)]
pub struct Pacer {
    /// Minimum time between consecutive requests
    interval: Duration,

    /// When the previous request finished
    last_request: Option<Instant>,

    /// Number of times `ready()` had to sleep
    waits: u64,
}

impl Pacer {
    /// Creates a pacer with the given minimum interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: None,
            waits: 0,
        }
    }

    /// Creates a pacer from the crawler configuration
    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self::new(Duration::from_millis(config.request_interval_ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left before the next request may be issued
    ///
    /// Returns `None` if a request can be made now.
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        let next = self.last_request? + self.interval;
        (next > now).then(|| next - now)
    }

    /// Waits until the next request may be issued
    pub async fn ready(&mut self) {
        let now = Instant::now();
        if let Some(wait) = self.time_until_ready(now) {
            tracing::trace!("Pacing: waiting {:?} before next request", wait);
            self.waits += 1;
            sleep_until(now + wait).await;
        }
    }

    /// Records that a request just finished
    ///
    /// Must be called for failed requests too; a failure does not shorten the
    /// interval.
    pub fn record_request(&mut self) {
        self.last_request = Some(Instant::now());
    }

    /// Forgets the previous request, so the next one is not delayed
    pub fn reset(&mut self) {
        self.last_request = None;
    }

    /// Number of times `ready()` slept
    pub fn waits(&self) -> u64 {
        self.waits
    }
}
