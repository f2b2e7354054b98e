/*!
 * Request pacing between translation calls.
 *
 * The provider enforces a request rate. The pipeline hands control to a
 * pacer after every translation call returns, whether the call succeeded or
 * failed, and only continues once the pacer releases it. Pass-through lines
 * never reach the pacer.
 */

use async_trait::async_trait;
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

/// Default pause after each translation call
pub const DEFAULT_PACE_DELAY: Duration = Duration::from_secs(30);

/// Rate limiter consulted after every translation call
#[async_trait]
pub trait Pacer: Send {
    /// Suspend the pipeline after a translation call has returned
    ///
    /// Called once per call, on success and on failure alike.
    async fn pause(&mut self);
}

/// Pacer sleeping a fixed delay after each call
#[derive(Debug, Clone)]
pub struct FixedDelayPacer {
    /// Pause applied after every call
    delay: Duration,
    /// Pauses taken so far
    pauses: usize,
}

impl FixedDelayPacer {
    /// Create a pacer with the given delay
    pub fn new(delay: Duration) -> Self {
        Self { delay, pauses: 0 }
    }

    /// Delay applied after every call
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of pauses taken so far
    pub fn pauses(&self) -> usize {
        self.pauses
    }
}

impl Default for FixedDelayPacer {
    fn default() -> Self {
        Self::new(DEFAULT_PACE_DELAY)
    }
}

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn pause(&mut self) {
        self.pauses += 1;
        if self.delay.is_zero() {
            return;
        }
        debug!("Waiting {:.1}s before the next translation request", self.delay.as_secs_f64());
        sleep(self.delay).await;
    }
}
