//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use healthz_core::domain::Target;
use serde::{Deserialize, Serialize};

/// website.create.v1 - Register a website and probe it once
#[derive(Debug, Deserialize)]
pub struct CreateWebsiteRequest {
    pub url: String,
}

/// One website as seen by clients (create, get and list results)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteResponse {
    pub id: String,
    pub url: String,
    pub healthy: bool,
}

impl From<Target> for WebsiteResponse {
    fn from(target: Target) -> Self {
        Self {
            id: target.id().to_string(),
            url: target.url().to_string(),
            healthy: target.healthy(),
        }
    }
}

/// website.get.v1 - Look up one website
#[derive(Debug, Deserialize)]
pub struct GetWebsiteRequest {
    pub id: String,
}

/// website.delete.v1 - Remove a website
#[derive(Debug, Deserialize)]
pub struct DeleteWebsiteRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteWebsiteResponse {
    pub id: String,
    pub deleted: bool,
}

/// admin.stats.v1 - Monitor statistics
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_targets: usize,
    pub healthy_targets: usize,
    pub unhealthy_targets: usize,
    pub sweeper_state: String,
    pub completed_sweeps: u64,
    pub sweep_interval_ms: u64,
    pub probe_timeout_ms: u64,
    pub uptime_seconds: u64,
}
