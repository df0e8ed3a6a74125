// ABOUTME: Polling policy and the ticker primitive behind every wait loop.
// ABOUTME: Fixed interval, optional deadline, cancellable; sleep-then-describe ordering.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// How a wait loop polls: fixed sleep interval plus an optional overall
/// deadline. Passed explicitly into each wait so callers control bounds.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub timeout: Option<Duration>,
}

impl PollPolicy {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build READY wait: 15s interval, bounded at one hour by default.
    pub fn build_default() -> Self {
        Self::new(Duration::from_secs(15)).with_timeout(Duration::from_secs(60 * 60))
    }

    /// Fleet ACTIVE wait (including locations): 30s interval, two hours.
    pub fn fleet_default() -> Self {
        Self::new(Duration::from_secs(30)).with_timeout(Duration::from_secs(2 * 60 * 60))
    }

    /// Session drain wait: 60s interval, unbounded. Game sessions can run
    /// arbitrarily long; cancellation is always available.
    pub fn drain_default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

/// Low-level wait failure; converted into `RolloutError` with context.
#[derive(Debug, thiserror::Error)]
pub enum WaitError {
    #[error("timed out after {after:?}")]
    TimedOut { after: Duration },

    #[error("aborted")]
    Aborted,
}

/// One wait's suspension primitive.
///
/// Every polling loop suspends only through `tick()`, which sleeps for the
/// policy interval, honors cancellation, and enforces the deadline measured
/// from the ticker's creation. A two-phase wait can share one ticker to keep
/// a single overall deadline.
pub struct Ticker<'a> {
    interval: Duration,
    started: Instant,
    deadline: Option<Instant>,
    cancel: &'a CancellationToken,
}

impl<'a> Ticker<'a> {
    pub fn new(policy: &PollPolicy, cancel: &'a CancellationToken) -> Self {
        let started = Instant::now();
        Self {
            interval: policy.interval,
            started,
            deadline: policy.timeout.map(|t| started + t),
            cancel,
        }
    }

    /// Suspend for one poll interval.
    ///
    /// # Errors
    ///
    /// `WaitError::Aborted` if the token is (or becomes) cancelled;
    /// `WaitError::TimedOut` once the deadline is reached. The sleep is
    /// capped at the deadline, so a timeout is reported promptly instead of
    /// one interval late.
    pub async fn tick(&self) -> Result<(), WaitError> {
        if self.cancel.is_cancelled() {
            return Err(WaitError::Aborted);
        }

        let wake = match self.deadline {
            Some(deadline) => deadline.min(Instant::now() + self.interval),
            None => Instant::now() + self.interval,
        };

        tokio::select! {
            _ = self.cancel.cancelled() => return Err(WaitError::Aborted),
            _ = tokio::time::sleep_until(wake) => {}
        }

        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(WaitError::TimedOut {
                after: self.started.elapsed(),
            });
        }

        Ok(())
    }
}
