// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic testing
pub mod prober;
pub mod target_registry;

// Re-exports
pub use id_provider::{IdProvider, UuidProvider};
pub use prober::Prober;
pub use target_registry::TargetRegistry;
