//! Healthz Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{DeleteResponse, Stats, Website};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use std::time::Duration;

/// Healthz daemon client
///
/// Provides a high-level interface over the daemon's JSON-RPC API.
///
/// # Example
///
/// ```no_run
/// use healthz_sdk::HealthzClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HealthzClient::connect("http://127.0.0.1:9527").await?;
/// # Ok(())
/// # }
/// ```
pub struct HealthzClient {
    client: HttpClient,
}

impl HealthzClient {
    /// Connect to the Healthz daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9527`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Register a website. The daemon probes it once before replying, so
    /// `healthy` already reflects a real check.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use healthz_sdk::HealthzClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = HealthzClient::connect("http://127.0.0.1:9527").await?;
    /// let website = client.register("https://example.com").await?;
    /// println!("Website ID: {}", website.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn register(&self, url: impl Into<String>) -> Result<Website> {
        let mut params = ObjectParams::new();
        params.insert("url", url.into())?;
        let website: Website = self.client.request("website.create.v1", params).await?;

        Ok(website)
    }

    /// List every monitored website
    pub async fn list(&self) -> Result<Vec<Website>> {
        let websites: Vec<Website> = self.client.request("website.list.v1", rpc_params![]).await?;

        Ok(websites)
    }

    /// Fetch one website by ID
    pub async fn get(&self, id: impl Into<String>) -> Result<Website> {
        let website: Website = self.client.request("website.get.v1", id_params(id)?).await?;

        Ok(website)
    }

    /// Stop monitoring a website. Removing an unknown ID succeeds.
    pub async fn remove(&self, id: impl Into<String>) -> Result<DeleteResponse> {
        let response: DeleteResponse = self
            .client
            .request("website.delete.v1", id_params(id)?)
            .await?;

        Ok(response)
    }

    /// Monitor statistics
    pub async fn stats(&self) -> Result<Stats> {
        let stats: Stats = self.client.request("admin.stats.v1", rpc_params![]).await?;

        Ok(stats)
    }
}

fn id_params(id: impl Into<String>) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    params.insert("id", id.into())?;
    Ok(params)
}
