//! JSON-RPC API Layer
//!
//! Implements the JSON-RPC 2.0 server for the Healthz website monitor.
//! Request parsing, response encoding and error-code mapping live here;
//! the operations themselves live in `healthz_core::application`.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig, RunningServer};
