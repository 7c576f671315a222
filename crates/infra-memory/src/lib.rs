// Healthz Infrastructure - In-Memory Adapter
// Implements: TargetRegistry
// State lives only in process memory and is lost on restart.

mod target_registry;

pub use target_registry::InMemoryTargetRegistry;
