//! RPC Method Handlers
//!
//! Thin adapters from JSON-RPC parameters to `WebsiteService` calls.

use crate::error::{invalid_params, to_rpc_error};
use crate::types::{
    CreateWebsiteRequest, DeleteWebsiteRequest, DeleteWebsiteResponse, GetWebsiteRequest,
    StatsResponse, WebsiteResponse,
};
use healthz_core::application::{SweeperHandle, WebsiteService};
use healthz_core::domain::TargetId;
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;
use std::time::Instant;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: Arc<WebsiteService>,
    sweeper: SweeperHandle,
    start_time: Instant,
}

impl RpcHandler {
    pub fn new(service: Arc<WebsiteService>, sweeper: SweeperHandle) -> Self {
        Self {
            service,
            sweeper,
            start_time: Instant::now(),
        }
    }

    /// website.create.v1
    pub async fn create(
        &self,
        params: CreateWebsiteRequest,
    ) -> Result<WebsiteResponse, ErrorObjectOwned> {
        let target = self
            .service
            .register_and_probe(&params.url)
            .await
            .map_err(to_rpc_error)?;

        Ok(target.into())
    }

    /// website.list.v1
    pub async fn list(&self) -> Result<Vec<WebsiteResponse>, ErrorObjectOwned> {
        Ok(self
            .service
            .list_all()
            .await
            .into_iter()
            .map(WebsiteResponse::from)
            .collect())
    }

    /// website.get.v1
    pub async fn get(&self, params: GetWebsiteRequest) -> Result<WebsiteResponse, ErrorObjectOwned> {
        let id = parse_id(&params.id)?;
        let target = self.service.get(&id).await.map_err(to_rpc_error)?;
        Ok(target.into())
    }

    /// website.delete.v1
    pub async fn delete(
        &self,
        params: DeleteWebsiteRequest,
    ) -> Result<DeleteWebsiteResponse, ErrorObjectOwned> {
        let id = parse_id(&params.id)?;
        self.service.remove(&id).await.map_err(to_rpc_error)?;

        Ok(DeleteWebsiteResponse {
            id: params.id,
            deleted: true,
        })
    }

    /// admin.stats.v1
    pub async fn stats(&self) -> Result<StatsResponse, ErrorObjectOwned> {
        let stats = self.service.stats().await;
        let config = self.service.config();

        Ok(StatsResponse {
            total_targets: stats.total,
            healthy_targets: stats.healthy,
            unhealthy_targets: stats.unhealthy,
            sweeper_state: self.sweeper.state().to_string(),
            completed_sweeps: self.sweeper.completed_sweeps(),
            sweep_interval_ms: config.sweep_interval.as_millis() as u64,
            probe_timeout_ms: config.probe_timeout.as_millis() as u64,
            uptime_seconds: self.start_time.elapsed().as_secs(),
        })
    }
}

fn parse_id(raw: &str) -> Result<TargetId, ErrorObjectOwned> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_params("id must not be empty"));
    }
    Ok(TargetId::new(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use healthz_core::port::prober::mocks::StubProber;
    use healthz_core::MonitorConfig;
    use healthz_infra_memory::InMemoryTargetRegistry;

    fn handler() -> RpcHandler {
        let prober = StubProber::new(500).with_status("https://good.example", 200);
        let service = WebsiteService::new(
            Arc::new(InMemoryTargetRegistry::new()),
            Arc::new(prober),
            MonitorConfig::default(),
        );
        RpcHandler::new(Arc::new(service), SweeperHandle::default())
    }

    #[tokio::test]
    async fn test_create_then_get_and_list() {
        let handler = handler();
        let created = handler
            .create(CreateWebsiteRequest {
                url: "https://good.example".to_string(),
            })
            .await
            .unwrap();
        assert!(created.healthy);
        assert_eq!(created.url, "https://good.example");

        let fetched = handler
            .get(GetWebsiteRequest {
                id: created.id.clone(),
            })
            .await
            .unwrap();
        assert_eq!(fetched, created);
        assert_eq!(handler.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_create_invalid_url() {
        let err = handler()
            .create(CreateWebsiteRequest {
                url: "example.com".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), code::VALIDATION_ERROR);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let response = handler()
            .delete(DeleteWebsiteRequest {
                id: "missing".to_string(),
            })
            .await
            .unwrap();
        assert!(response.deleted);
    }

    #[tokio::test]
    async fn test_empty_id_is_invalid_params() {
        let err = handler()
            .delete(DeleteWebsiteRequest { id: "  ".to_string() })
            .await
            .unwrap_err();
        assert_eq!(err.code(), code::INVALID_PARAMS_CODE);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let err = handler()
            .get(GetWebsiteRequest {
                id: "missing".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), code::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stats() {
        let handler = handler();
        for url in ["https://good.example", "https://bad.example"] {
            handler
                .create(CreateWebsiteRequest {
                    url: url.to_string(),
                })
                .await
                .unwrap();
        }

        let stats = handler.stats().await.unwrap();
        assert_eq!(stats.total_targets, 2);
        assert_eq!(stats.healthy_targets, 1);
        assert_eq!(stats.unhealthy_targets, 1);
        assert_eq!(stats.sweeper_state, "IDLE");
        assert_eq!(stats.sweep_interval_ms, 300_000);
        assert_eq!(stats.probe_timeout_ms, 800);
    }
}
