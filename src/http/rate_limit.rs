use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Response header carrying the remaining request budget.
const REMAINING_HEADER: &str = "x-rate-limit-remaining";

/// Response header carrying seconds until the budget resets.
const RESET_HEADER: &str = "x-rate-limit-reset";

/// Remaining-request budget as reported by the API.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RateBudget {
    /// Requests left before the API enforces a cooldown. Can go negative
    /// by at most the number of in-flight requests between header updates.
    pub remaining: i64,

    /// When the budget replenishes. `None` until the API has said so.
    pub reset_at: Option<Instant>,
}

/// Header-driven rate limiter shared by every request of one client.
///
/// The budget is server-authoritative: each response overwrites the local
/// count from the rate headers. [`acquire`](RateLimiter::acquire) only
/// decrements locally, which keeps concurrent in-flight requests visible
/// between header updates.
pub(crate) struct RateLimiter {
    budget: Mutex<RateBudget>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            // Unknown until the first response reports headers.
            budget: Mutex::new(RateBudget {
                remaining: 1,
                reset_at: None,
            }),
        }
    }

    /// Wait until the budget permits another request, then claim a slot.
    ///
    /// Suspends only while the budget is exhausted and the reset instant
    /// lies in the future; a budget with no known reset never blocks.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut budget = self.budget.lock().await;
                let now = Instant::now();
                match budget.reset_at {
                    Some(reset_at) if budget.remaining <= 0 && now < reset_at => {
                        Some(reset_at.saturating_duration_since(now))
                    }
                    _ => {
                        budget.remaining -= 1;
                        None
                    }
                }
            };

            // Locks released before sleeping.
            match wait {
                Some(delay) => {
                    debug!(?delay, "rate budget exhausted, waiting for reset");
                    sleep(delay).await;
                }
                None => return,
            }
        }
    }

    /// Record the budget headers of a response.
    pub async fn record_headers(&self, headers: &HeaderMap) {
        let remaining = parse_numeric(headers, REMAINING_HEADER);
        let reset_secs = parse_numeric(headers, RESET_HEADER).and_then(|s| u64::try_from(s).ok());

        if remaining.is_none() && reset_secs.is_none() {
            return;
        }

        let mut budget = self.budget.lock().await;
        if let Some(remaining) = remaining {
            budget.remaining = remaining;
        }
        if let Some(secs) = reset_secs {
            budget.reset_at = Some(Instant::now() + Duration::from_secs(secs));
        }
    }

    /// Zero the budget until `retry_after` has elapsed (after a 429).
    pub async fn record_retry_after(&self, retry_after: Duration) {
        let mut budget = self.budget.lock().await;
        budget.remaining = 0;
        budget.reset_at = Some(Instant::now() + retry_after);
    }

    /// Current budget, for tests.
    #[cfg(test)]
    pub async fn snapshot(&self) -> RateBudget {
        *self.budget.lock().await
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a `Retry-After` header as whole seconds.
pub(crate) fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let secs: u64 = headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse().ok()?;
    Some(Duration::from_secs(secs))
}

fn parse_numeric(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
