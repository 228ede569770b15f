//! Periodic background cleanup

use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Default pause between cleanup passes
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Background job that wakes on a fixed interval
///
/// Each pass is currently a placeholder that only logs; no state is touched.
#[derive(Debug, Clone)]
pub struct CleanupTask {
    interval: Duration,
}

impl Default for CleanupTask {
    fn default() -> Self {
        Self::new(DEFAULT_CLEANUP_INTERVAL)
    }
}

impl CleanupTask {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run until `token` is cancelled, returning the number of passes made
    ///
    /// The first pass happens one full interval after the call.
    pub async fn run(self, token: CancellationToken) -> u64 {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            interval_secs = self.interval.as_secs(),
            "Started background cleanup task"
        );

        let mut passes = 0;
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {
                    passes += 1;
                    self.cleanup(passes);
                }
            }
        }

        info!(passes, "Background cleanup task stopped");
        passes
    }

    fn cleanup(&self, pass: u64) {
        info!(pass, "Performing background cleanup");
    }
}
