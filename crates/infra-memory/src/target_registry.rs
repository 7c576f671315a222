// In-Memory TargetRegistry Implementation

use async_trait::async_trait;
use healthz_core::domain::{Target, TargetId, TargetUrl};
use healthz_core::error::{AppError, Result};
use healthz_core::port::{IdProvider, TargetRegistry, UuidProvider};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Registry of monitored websites kept in process memory.
///
/// One `RwLock` guards the whole map: writers (create, update, delete) are
/// serialized against each other and against readers, and every critical
/// section is a single map operation. Readers always receive clones.
#[derive(Clone)]
pub struct InMemoryTargetRegistry {
    targets: Arc<RwLock<HashMap<TargetId, Target>>>,
    id_provider: Arc<dyn IdProvider>,
}

impl InMemoryTargetRegistry {
    /// Empty registry issuing UUID v4 IDs
    pub fn new() -> Self {
        Self::with_id_provider(Arc::new(UuidProvider))
    }

    /// Empty registry with injected ID generation (deterministic tests)
    pub fn with_id_provider(id_provider: Arc<dyn IdProvider>) -> Self {
        Self {
            targets: Arc::new(RwLock::new(HashMap::new())),
            id_provider,
        }
    }
}

impl Default for InMemoryTargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TargetRegistry for InMemoryTargetRegistry {
    async fn create(&self, url: &str, initial_health: Option<bool>) -> Result<TargetId> {
        let url = TargetUrl::parse(url)?;
        let healthy = initial_health.unwrap_or(false);

        let mut targets = self.targets.write().await;
        let mut id = self.id_provider.generate_id();
        while targets.contains_key(&id) {
            debug!(target_id = %id, "Generated ID already taken, drawing another");
            id = self.id_provider.generate_id();
        }
        targets.insert(id.clone(), Target::new(id.clone(), url, healthy));
        drop(targets);

        debug!(target_id = %id, healthy, "Target stored");
        Ok(id)
    }

    async fn list(&self) -> Vec<Target> {
        self.targets.read().await.values().cloned().collect()
    }

    async fn get(&self, id: &TargetId) -> Result<Target> {
        self.targets
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Website {} not found", id)))
    }

    async fn update(&self, id: &TargetId, healthy: bool) -> bool {
        match self.targets.write().await.get_mut(id) {
            Some(target) => {
                *target = Target::new(target.id().clone(), target.url().clone(), healthy);
                true
            }
            None => false,
        }
    }

    async fn delete(&self, id: &TargetId) {
        let removed = self.targets.write().await.remove(id);
        if removed.is_some() {
            info!(target_id = %id, "Target deleted");
        } else {
            debug!(target_id = %id, "Delete of unknown target ignored");
        }
    }

    async fn len(&self) -> usize {
        self.targets.read().await.len()
    }
}
