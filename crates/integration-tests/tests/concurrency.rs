//! Concurrency Tests
//!
//! Many API callers hammering the registry while sweeps run.

use healthz_core::application::{shutdown_channel, Sweeper, WebsiteService};
use healthz_core::domain::TargetId;
use healthz_core::port::prober::mocks::StubProber;
use healthz_core::port::TargetRegistry;
use healthz_core::MonitorConfig;
use healthz_infra_memory::InMemoryTargetRegistry;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

const CALLERS: usize = 16;
const OPS_PER_CALLER: usize = 50;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_yield_unique_ids() {
    let registry = Arc::new(InMemoryTargetRegistry::new());

    let mut handles = Vec::new();
    for caller in 0..CALLERS {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            let mut ids = Vec::new();
            for op in 0..OPS_PER_CALLER {
                let url = format!("https://site-{caller}-{op}.example");
                ids.push(registry.create(&url, None).await.unwrap());
            }
            ids
        }));
    }

    let mut all = HashSet::new();
    for handle in handles {
        for id in handle.await.unwrap() {
            assert!(all.insert(id), "duplicate id issued");
        }
    }

    assert_eq!(all.len(), CALLERS * OPS_PER_CALLER);
    assert_eq!(registry.len().await, CALLERS * OPS_PER_CALLER);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_mixed_operations_during_sweeps() {
    let registry = Arc::new(InMemoryTargetRegistry::new());
    let prober = Arc::new(StubProber::healthy().with_latency(Duration::from_millis(1)));
    let config = MonitorConfig::new(Duration::from_millis(20), Duration::from_millis(800)).unwrap();
    let service = Arc::new(WebsiteService::new(
        registry.clone(),
        prober.clone(),
        config,
    ));

    // Seed so early sweeps have work to do
    for i in 0..20 {
        registry
            .create(&format!("https://seed-{i}.example"), Some(false))
            .await
            .unwrap();
    }

    let sweeper = Sweeper::new(registry.clone(), prober.clone(), config);
    let sweeper_handle = sweeper.handle();
    let (shutdown_tx, token) = shutdown_channel();
    let sweeper_task = tokio::spawn(sweeper.run(token));

    let mut callers = Vec::new();
    for caller in 0..CALLERS {
        let service = service.clone();
        callers.push(tokio::spawn(async move {
            let mut kept: Vec<TargetId> = Vec::new();
            for op in 0..OPS_PER_CALLER {
                let url = format!("https://c{caller}-{op}.example");
                let target = service.register_and_probe(&url).await.unwrap();

                // Delete every other target, twice to exercise idempotence
                if op % 2 == 0 {
                    service.remove(target.id()).await.unwrap();
                    service.remove(target.id()).await.unwrap();
                } else {
                    kept.push(target.id().clone());
                }

                let snapshot = service.list_all().await;
                let unique: HashSet<_> = snapshot.iter().map(|t| t.id().clone()).collect();
                assert_eq!(unique.len(), snapshot.len(), "list returned duplicates");
            }
            kept
        }));
    }

    let mut expected: HashSet<TargetId> = HashSet::new();
    for caller in callers {
        expected.extend(caller.await.unwrap());
    }

    // Let at least one more sweep run over the final set
    let before = sweeper_handle.completed_sweeps();
    tokio::time::timeout(Duration::from_secs(15), async {
        while sweeper_handle.completed_sweeps() < before + 2 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("sweeper stalled");

    shutdown_tx.shutdown();
    tokio::time::timeout(Duration::from_secs(5), sweeper_task)
        .await
        .expect("sweeper did not stop")
        .unwrap();

    let remaining = registry.list().await;
    let remaining_ids: HashSet<TargetId> = remaining.iter().map(|t| t.id().clone()).collect();

    // Seeds plus every kept caller target; deleted ones never came back
    assert_eq!(remaining.len(), 20 + CALLERS * OPS_PER_CALLER / 2);
    assert!(expected.is_subset(&remaining_ids));
    assert!(remaining.iter().all(|t| t.healthy()), "final sweep marks all healthy");
}
