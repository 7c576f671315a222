//! SDK Response Types
//!
//! Mirrors the JSON-RPC results from the api-rpc crate.

use serde::Deserialize;

/// A monitored website
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Website {
    pub id: String,
    pub url: String,
    pub healthy: bool,
}

/// Response from delete operation
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}

/// Monitor statistics
#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    pub total_targets: usize,
    pub healthy_targets: usize,
    pub unhealthy_targets: usize,
    pub sweeper_state: String,
    #[serde(default)]
    pub completed_sweeps: u64,
    pub sweep_interval_ms: u64,
    pub probe_timeout_ms: u64,
    pub uptime_seconds: u64,
}
