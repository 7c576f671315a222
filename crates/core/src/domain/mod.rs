// Domain Layer - Pure business logic and entities

pub mod error;
pub mod target;

// Re-exports
pub use error::DomainError;
pub use target::{Target, TargetId, TargetUrl};
