//! Healthz CLI - Command-line interface for the website monitor daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9527";

#[derive(Parser)]
#[command(name = "healthz")]
#[command(about = "Healthz website monitor CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "HEALTHZ_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Register a website (probed once before the reply)
    Add {
        /// Absolute URL, e.g. https://example.com
        url: String,
    },

    /// List monitored websites
    List,

    /// Show one website
    Get {
        /// Website ID
        id: String,
    },

    /// Stop monitoring a website
    Remove {
        /// Website ID
        id: String,
    },

    /// Show monitor status
    Status,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct Website {
    id: String,
    url: String,
    healthy: bool,
}

#[derive(Tabled)]
struct WebsiteRow {
    id: String,
    url: String,
    status: String,
}

impl From<Website> for WebsiteRow {
    fn from(w: Website) -> Self {
        let status = if w.healthy {
            "HEALTHY".green().to_string()
        } else {
            "UNHEALTHY".red().to_string()
        };
        Self {
            id: w.id,
            url: w.url,
            status,
        }
    }
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

fn print_websites(websites: Vec<Website>) {
    let rows: Vec<WebsiteRow> = websites.into_iter().map(WebsiteRow::from).collect();
    println!("{}", Table::new(rows));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add { url } => {
            let result = call_rpc(&cli.rpc_url, "website.create.v1", json!({ "url": url })).await?;
            let website: Website = serde_json::from_value(result)?;

            println!("{}", "✓ Website registered".green().bold());
            println!();
            print_websites(vec![website]);
        }

        Commands::List => {
            let result = call_rpc(&cli.rpc_url, "website.list.v1", json!({})).await?;
            let websites: Vec<Website> = serde_json::from_value(result)?;

            if websites.is_empty() {
                println!("{}", "No websites registered".yellow());
            } else {
                print_websites(websites);
            }
        }

        Commands::Get { id } => {
            let result = call_rpc(&cli.rpc_url, "website.get.v1", json!({ "id": id })).await?;
            let website: Website = serde_json::from_value(result)?;
            print_websites(vec![website]);
        }

        Commands::Remove { id } => {
            call_rpc(&cli.rpc_url, "website.delete.v1", json!({ "id": id })).await?;

            println!("{}", format!("✓ Website {} removed", id).green().bold());
        }

        Commands::Status => {
            println!("{}", "Monitor Status".cyan().bold());
            println!();

            match call_rpc(&cli.rpc_url, "admin.stats.v1", json!({})).await {
                Ok(stats) => {
                    println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!();
                    println!("  {} {}", "Websites:".bold(), stats["total_targets"]);
                    println!("  {} {}", "Healthy:".bold(), stats["healthy_targets"]);
                    println!("  {} {}", "Unhealthy:".bold(), stats["unhealthy_targets"]);
                    println!();
                    println!(
                        "  {} {}",
                        "Sweeper:".bold(),
                        stats["sweeper_state"].as_str().unwrap_or("UNKNOWN")
                    );
                    println!("  {} {}", "Sweeps:".bold(), stats["completed_sweeps"]);
                    println!("  {} {} ms", "Interval:".bold(), stats["sweep_interval_ms"]);
                    println!("  {} {} ms", "Timeout:".bold(), stats["probe_timeout_ms"]);
                    println!("  {} {} seconds", "Uptime:".bold(), stats["uptime_seconds"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
