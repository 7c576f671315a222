//! Healthz SDK - Rust Client Library
//!
//! Provides a convenient client for the Healthz website monitor daemon.
//!
//! # Example
//!
//! ```no_run
//! use healthz_sdk::HealthzClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to daemon
//!     let client = HealthzClient::connect("http://127.0.0.1:9527").await?;
//!
//!     // Register a website; it is probed once before the call returns
//!     let website = client.register("https://www.rust-lang.org").await?;
//!
//!     println!("{} healthy={}", website.id, website.healthy);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::HealthzClient;
pub use error::{Result, SdkError};
pub use types::{DeleteResponse, Stats, Website};
