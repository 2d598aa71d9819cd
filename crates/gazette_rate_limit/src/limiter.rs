//! Sliding-window rate limiter.

use crate::LimitConfig;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::time::{Duration, Instant};
use tracing::debug;

/// Bounds how many calls may begin inside any window of fixed length.
///
/// The limiter keeps the start time of every admitted call still inside the
/// window. A caller arriving when the log is full sleeps until the oldest
/// entry ages out, then tries again. Waiters are not queued in order.
///
/// Clones share the same window.
///
/// # Example
///
/// ```rust,ignore
/// let limiter = RateLimiter::new(LimitConfig::new(8, 60));
///
/// let _guard = limiter.acquire().await;
/// let text = backend.generate(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RateLimiter {
    name: &'static str,
    calls: usize,
    window: Duration,
    starts: Arc<Mutex<VecDeque<Instant>>>,
}

impl RateLimiter {
    /// Create a limiter from a limit configuration.
    ///
    /// A limit of zero calls disables limiting.
    pub fn new(limit: LimitConfig) -> Self {
        Self::named("backend", limit)
    }

    /// Create a limiter whose log lines carry `name`.
    pub fn named(name: &'static str, limit: LimitConfig) -> Self {
        Self {
            name,
            calls: limit.calls as usize,
            window: limit.window(),
            starts: Arc::new(Mutex::new(VecDeque::with_capacity(limit.calls as usize))),
        }
    }

    /// Wait until the window admits another call.
    ///
    /// Returns a guard recording when the call was admitted.
    pub async fn acquire(&self) -> RateLimiterGuard {
        loop {
            let wait = match self.admit(Instant::now()) {
                Ok(guard) => return guard,
                Err(wait) => wait,
            };
            debug!(
                limiter = self.name,
                wait_ms = wait.as_millis() as u64,
                "Rate limit reached, waiting"
            );
            tokio::time::sleep(wait).await;
        }
    }

    /// Admit a call only if the window has room right now.
    pub fn try_acquire(&self) -> Option<RateLimiterGuard> {
        self.admit(Instant::now()).ok()
    }

    /// Acquire permission, then run `operation`.
    ///
    /// The operation runs once. Failures are returned as-is.
    pub async fn execute<F, Fut, R>(&self, operation: F) -> R
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        let _guard = self.acquire().await;
        operation().await
    }

    /// Number of calls started within the current window.
    pub fn in_flight(&self) -> usize {
        let mut starts = self.log();
        Self::expire(&mut starts, Instant::now(), self.window);
        starts.len()
    }

    fn admit(&self, now: Instant) -> Result<RateLimiterGuard, Duration> {
        if self.calls == 0 {
            return Ok(RateLimiterGuard { admitted_at: now });
        }

        let mut starts = self.log();
        Self::expire(&mut starts, now, self.window);

        if starts.len() < self.calls {
            starts.push_back(now);
            return Ok(RateLimiterGuard { admitted_at: now });
        }

        // Full: the oldest start decides when a slot opens.
        let oldest = starts.front().copied().unwrap_or(now);
        Err((oldest + self.window).saturating_duration_since(now))
    }

    fn expire(starts: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while let Some(&front) = starts.front() {
            if now.saturating_duration_since(front) >= window {
                starts.pop_front();
            } else {
                break;
            }
        }
    }

    fn log(&self) -> MutexGuard<'_, VecDeque<Instant>> {
        self.starts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Proof of admission returned by [`RateLimiter::acquire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiterGuard {
    admitted_at: Instant,
}

impl RateLimiterGuard {
    /// When the limiter admitted the call.
    pub fn admitted_at(&self) -> Instant {
        self.admitted_at
    }
}
