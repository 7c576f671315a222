// Target Registry Port (Interface)

use crate::domain::{Target, TargetId};
use crate::error::Result;
use async_trait::async_trait;

/// Concurrency-safe store of monitored targets
///
/// Implementations serialize every mutation against each other and against
/// reads, never perform I/O inside their critical section, and only ever hand
/// out copies of the stored targets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TargetRegistry: Send + Sync {
    /// Validate `url`, assign a fresh unique ID and store the target.
    ///
    /// `initial_health` is the outcome of a probe the caller already ran;
    /// `None` stores the target as pending (`healthy = false`). Duplicate URLs
    /// are accepted and tracked independently.
    async fn create(&self, url: &str, initial_health: Option<bool>) -> Result<TargetId>;

    /// Point-in-time snapshot of all targets (unordered, possibly empty)
    async fn list(&self) -> Vec<Target>;

    /// Exact lookup, `AppError::NotFound` if absent
    async fn get(&self, id: &TargetId) -> Result<Target>;

    /// Replace the health flag of `id`.
    ///
    /// Returns `false` when the target no longer exists; that is not an error
    /// because it may have been deleted while a sweep was running.
    async fn update(&self, id: &TargetId, healthy: bool) -> bool;

    /// Remove `id` if present. Deleting an absent ID is a successful no-op.
    async fn delete(&self, id: &TargetId);

    /// Number of stored targets
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
