// Website Service - API surface exposed to transport layers

pub mod register;

use crate::config::MonitorConfig;
use crate::domain::{Target, TargetId};
use crate::error::Result;
use crate::port::{Prober, TargetRegistry};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Health counts over the current registry snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WebsiteStats {
    pub total: usize,
    pub healthy: usize,
    pub unhealthy: usize,
}

/// Website Service
///
/// Transport layers (JSON-RPC server, tests) call these operations; request
/// parsing and response encoding stay on their side.
pub struct WebsiteService {
    registry: Arc<dyn TargetRegistry>,
    prober: Arc<dyn Prober>,
    config: MonitorConfig,
}

impl WebsiteService {
    pub fn new(
        registry: Arc<dyn TargetRegistry>,
        prober: Arc<dyn Prober>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            registry,
            prober,
            config,
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Register a website and probe it synchronously before returning
    pub async fn register_and_probe(&self, url: &str) -> Result<Target> {
        register::execute(
            self.registry.as_ref(),
            self.prober.as_ref(),
            self.config.probe_timeout,
            url,
        )
        .await
    }

    /// All registered websites (empty when none)
    pub async fn list_all(&self) -> Vec<Target> {
        let targets = self.registry.list().await;
        debug!(count = targets.len(), "Listed websites");
        targets
    }

    /// Look up a single website
    pub async fn get(&self, id: &TargetId) -> Result<Target> {
        self.registry.get(id).await
    }

    /// Remove a website; succeeds whether or not it existed
    pub async fn remove(&self, id: &TargetId) -> Result<()> {
        self.registry.delete(id).await;
        info!(target_id = %id, "Website removed");
        Ok(())
    }

    pub async fn stats(&self) -> WebsiteStats {
        let targets = self.registry.list().await;
        let healthy = targets.iter().filter(|t| t.healthy()).count();
        WebsiteStats {
            total: targets.len(),
            healthy,
            unhealthy: targets.len() - healthy,
        }
    }
}
