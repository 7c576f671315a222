//! JSON-RPC Server
//!
//! Serves the website monitor API as JSON-RPC 2.0 over HTTP.

use crate::handler::RpcHandler;
use crate::types::{CreateWebsiteRequest, DeleteWebsiteRequest, GetWebsiteRequest};
use healthz_core::application::{SweeperHandle, WebsiteService};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9527;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// Handle to a started server and the address it actually bound
pub struct RunningServer {
    pub handle: ServerHandle,
    pub local_addr: SocketAddr,
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(
        config: RpcServerConfig,
        service: Arc<WebsiteService>,
        sweeper: SweeperHandle,
    ) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service, sweeper)),
        }
    }

    /// Bind and start serving. Port 0 picks a free port.
    pub async fn start(self) -> Result<RunningServer, String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let module = self.build_module()?;

        let handle = server.start(module);
        info!(addr = %local_addr, "JSON-RPC server started");

        Ok(RunningServer { handle, local_addr })
    }

    fn build_module(&self) -> Result<RpcModule<()>, String> {
        let mut module = RpcModule::new(());

        let handler = self.handler.clone();
        module
            .register_async_method("website.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: CreateWebsiteRequest = params.parse()?;
                    handler.create(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("website.list.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.list().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("website.get.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: GetWebsiteRequest = params.parse()?;
                    handler.get(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("website.delete.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: DeleteWebsiteRequest = params.parse()?;
                    handler.delete(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        // Admin APIs
        let handler = self.handler.clone();
        module
            .register_async_method("admin.stats.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.stats().await }
            })
            .map_err(|e| e.to_string())?;

        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use crate::types::WebsiteResponse;
    use healthz_core::port::prober::mocks::StubProber;
    use healthz_core::MonitorConfig;
    use healthz_infra_memory::InMemoryTargetRegistry;
    use jsonrpsee::core::client::{ClientT, Error as ClientError};
    use jsonrpsee::core::params::ObjectParams;
    use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
    use jsonrpsee::rpc_params;
    use serde_json::Value;

    async fn start_server() -> (RunningServer, HttpClient) {
        let prober = StubProber::new(503).with_status("https://up.example", 200);
        let service = WebsiteService::new(
            Arc::new(InMemoryTargetRegistry::new()),
            Arc::new(prober),
            MonitorConfig::default(),
        );
        let config = RpcServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        let running = RpcServer::new(config, Arc::new(service), SweeperHandle::default())
            .start()
            .await
            .unwrap();
        let client = HttpClientBuilder::default()
            .build(format!("http://{}", running.local_addr))
            .unwrap();
        (running, client)
    }

    fn object(key: &str, value: &str) -> ObjectParams {
        let mut params = ObjectParams::new();
        params.insert(key, value).unwrap();
        params
    }

    fn error_code(err: ClientError) -> i32 {
        match err {
            ClientError::Call(obj) => obj.code(),
            other => panic!("expected call error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_list_get_delete_over_http() {
        let (running, client) = start_server().await;

        let created: WebsiteResponse = client
            .request("website.create.v1", object("url", "https://up.example"))
            .await
            .unwrap();
        assert!(created.healthy);

        let listed: Vec<WebsiteResponse> =
            client.request("website.list.v1", rpc_params![]).await.unwrap();
        assert_eq!(listed, vec![created.clone()]);

        let fetched: WebsiteResponse = client
            .request("website.get.v1", object("id", &created.id))
            .await
            .unwrap();
        assert_eq!(fetched, created);

        let deleted: Value = client
            .request("website.delete.v1", object("id", &created.id))
            .await
            .unwrap();
        assert_eq!(deleted["deleted"], Value::Bool(true));

        let err = client
            .request::<WebsiteResponse, _>("website.get.v1", object("id", &created.id))
            .await
            .unwrap_err();
        assert_eq!(error_code(err), code::NOT_FOUND);

        running.handle.stop().unwrap();
    }

    #[tokio::test]
    async fn test_rejects_bad_requests() {
        let (running, client) = start_server().await;

        let err = client
            .request::<Value, _>("website.create.v1", object("url", "example.com"))
            .await
            .unwrap_err();
        assert_eq!(error_code(err), code::VALIDATION_ERROR);

        let err = client
            .request::<Value, _>("website.create.v1", rpc_params![])
            .await
            .unwrap_err();
        assert_eq!(error_code(err), code::INVALID_PARAMS_CODE);

        let listed: Vec<WebsiteResponse> =
            client.request("website.list.v1", rpc_params![]).await.unwrap();
        assert!(listed.is_empty());

        running.handle.stop().unwrap();
    }

    #[tokio::test]
    async fn test_stats_over_http() {
        let (running, client) = start_server().await;

        for url in ["https://up.example", "https://down.example"] {
            let _: Value = client
                .request("website.create.v1", object("url", url))
                .await
                .unwrap();
        }

        let stats: Value = client.request("admin.stats.v1", rpc_params![]).await.unwrap();
        assert_eq!(stats["total_targets"], 2);
        assert_eq!(stats["healthy_targets"], 1);
        assert_eq!(stats["unhealthy_targets"], 1);
        assert_eq!(stats["sweeper_state"], "IDLE");

        running.handle.stop().unwrap();
    }
}
