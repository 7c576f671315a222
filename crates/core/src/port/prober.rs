// Website reachability port
use async_trait::async_trait;
use std::time::Duration;

/// Performs a single reachability check against a URL.
///
/// Stateless from the caller's point of view. An unreachable website is a
/// normal outcome and is reported as `false`; implementations never surface
/// transport errors, timeouts or unexpected status codes as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Prober: Send + Sync {
    /// Issue one GET bounded by `timeout`; `true` only for a `200 OK` response.
    async fn check(&self, url: &str, timeout: Duration) -> bool;
}

// ============================================================================
// Stub Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, PoisonError};

    /// Status code the stub reports for a refused connection
    pub const TRANSPORT_FAILURE: u16 = 0;

    /// Prober that answers from a URL -> status code table.
    ///
    /// Unknown URLs get the default status. A configured latency longer than
    /// the probe timeout behaves like a timeout.
    pub struct StubProber {
        statuses: Mutex<HashMap<String, u16>>,
        default_status: Mutex<u16>,
        latency: Duration,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl StubProber {
        pub fn new(default_status: u16) -> Self {
            Self {
                statuses: Mutex::new(HashMap::new()),
                default_status: Mutex::new(default_status),
                latency: Duration::ZERO,
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }

        /// Every URL answers 200
        pub fn healthy() -> Self {
            Self::new(200)
        }

        pub fn with_latency(mut self, latency: Duration) -> Self {
            self.latency = latency;
            self
        }

        pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
            self.set_status(url, status);
            self
        }

        pub fn set_status(&self, url: impl Into<String>, status: u16) {
            self.statuses.lock().unwrap_or_else(PoisonError::into_inner).insert(url.into(), status);
        }

        pub fn set_default_status(&self, status: u16) {
            *self.default_status.lock().unwrap_or_else(PoisonError::into_inner) = status;
        }

        /// Total number of checks performed
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Highest number of checks that were running at the same time
        pub fn max_in_flight(&self) -> usize {
            self.max_in_flight.load(Ordering::SeqCst)
        }

        fn status_for(&self, url: &str) -> u16 {
            let statuses = self.statuses.lock().unwrap_or_else(PoisonError::into_inner);
            match statuses.get(url) {
                Some(status) => *status,
                None => *self.default_status.lock().unwrap_or_else(PoisonError::into_inner),
            }
        }
    }

    #[async_trait]
    impl Prober for StubProber {
        async fn check(&self, url: &str, timeout: Duration) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            let status = self.status_for(url);
            let outcome = if self.latency.is_zero() {
                status == 200
            } else if self.latency > timeout {
                tokio::time::sleep(timeout).await;
                false
            } else {
                tokio::time::sleep(self.latency).await;
                status == 200
            };

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            outcome
        }
    }

}
