// HTTP Prober implementation
// reason: reqwest for async HTTP with per-request timeouts
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use healthz_core::error::{AppError, Result};
use healthz_core::port::Prober;

const USER_AGENT: &str = concat!("healthz/", env!("CARGO_PKG_VERSION"));

/// Prober issuing a single GET per check
///
/// Redirects are followed; only a final `200 OK` counts as healthy. The
/// timeout is applied per request, so one client serves every caller.
#[derive(Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Create a prober with its own connection pool
    ///
    /// # Example
    /// ```ignore
    /// let prober = HttpProber::new()?;
    /// ```
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn check(&self, url: &str, timeout: Duration) -> bool {
        match self.client.get(url).timeout(timeout).send().await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                debug!(url = %url, status = %response.status(), "Website is not healthy");
                false
            }
            Err(e) if e.is_timeout() => {
                debug!(url = %url, timeout_ms = timeout.as_millis() as u64, "Probe timed out");
                false
            }
            Err(e) => {
                debug!(url = %url, error = %e, "Probe request failed");
                false
            }
        }
    }
}
