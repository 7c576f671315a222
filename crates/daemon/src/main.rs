//! Healthz - Website liveness monitor daemon
//!
//! Composition root: parses configuration, wires the in-memory registry and
//! HTTP prober into the website service, serves JSON-RPC and runs the sweeper
//! until Ctrl+C.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use healthz_api_rpc::RpcServer;
use healthz_core::application::constants::SHUTDOWN_GRACE_PERIOD;
use healthz_core::application::{shutdown_channel, Sweeper, WebsiteService};
use healthz_core::port::{Prober, TargetRegistry};
use healthz_core::VERSION;
use healthz_infra_http::HttpProber;
use healthz_infra_memory::InMemoryTargetRegistry;

use crate::config::Args;

const DEFAULT_LOG_FILTER: &str =
    "healthz_daemon=info,healthz_core=info,healthz_api_rpc=info,healthz_infra_memory=info,healthz_infra_http=info";

fn init_logging() -> Result<()> {
    let log_format = std::env::var("HEALTHZ_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Configuration (malformed flags exit here with usage)
    let args = Args::parse();
    let monitor_config = args
        .monitor_config()
        .context("Invalid monitor configuration")?;

    // 2. Logging
    init_logging()?;
    info!("Healthz v{} starting...", VERSION);
    info!(config = %monitor_config, "Configuration loaded");

    // 3. Dependencies (DI wiring)
    let registry: Arc<dyn TargetRegistry> = Arc::new(InMemoryTargetRegistry::new());
    let prober: Arc<dyn Prober> = Arc::new(HttpProber::new()?);
    let service = Arc::new(WebsiteService::new(
        registry.clone(),
        prober.clone(),
        monitor_config,
    ));
    let sweeper = Sweeper::new(registry, prober, monitor_config);

    // 4. JSON-RPC server
    let rpc_server = RpcServer::new(args.rpc_config(), service, sweeper.handle());
    let rpc = rpc_server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;
    info!(addr = %rpc.local_addr, "Listening for JSON-RPC requests");

    // 5. Sweeper
    let (shutdown_tx, shutdown_token) = shutdown_channel();
    let sweeper_task = tokio::spawn(sweeper.run(shutdown_token));

    info!("System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    shutdown_tx.shutdown();
    rpc.handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc.handle.stopped().await;

    match tokio::time::timeout(SHUTDOWN_GRACE_PERIOD, sweeper_task).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(error = ?e, "Sweeper task failed"),
        Err(_) => warn!(
            grace_ms = SHUTDOWN_GRACE_PERIOD.as_millis() as u64,
            "Sweeper did not stop within the grace period"
        ),
    }

    info!("Shutdown complete.");
    Ok(())
}
