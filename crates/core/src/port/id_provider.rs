// ID Provider Port (for deterministic testing)

use crate::domain::TargetId;

/// ID provider interface (allows deterministic IDs in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a new target ID
    fn generate_id(&self) -> TargetId;
}

/// UUID v4 provider (production)
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> TargetId {
        TargetId::new(uuid::Uuid::new_v4().to_string())
    }
}
