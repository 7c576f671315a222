//! Sweeper - Periodically re-probes every registered website
//!
//! Two states: `Idle` (waiting for the next tick) and `Sweeping` (one pass
//! over a registry snapshot). The loop awaits each sweep before asking for the
//! next tick, so sweeps never overlap; ticks missed while sweeping are
//! coalesced instead of replayed.

use crate::application::constants::MAX_CONFIG_DURATION;
use crate::application::ShutdownToken;
use crate::config::MonitorConfig;
use crate::port::{Prober, TargetRegistry};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SweeperState {
    Idle,
    Sweeping,
}

impl std::fmt::Display for SweeperState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweeperState::Idle => write!(f, "IDLE"),
            SweeperState::Sweeping => write!(f, "SWEEPING"),
        }
    }
}

/// Outcome counts of one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub probed: usize,
    pub healthy: usize,
    pub unhealthy: usize,
    /// Targets deleted between the snapshot and their update
    pub vanished: usize,
}

/// Read-only view of a sweeper, usable after the sweeper moved into its task
#[derive(Clone, Default)]
pub struct SweeperHandle {
    sweeping: Arc<AtomicBool>,
    completed: Arc<AtomicU64>,
}

impl SweeperHandle {
    pub fn state(&self) -> SweeperState {
        if self.sweeping.load(Ordering::Acquire) {
            SweeperState::Sweeping
        } else {
            SweeperState::Idle
        }
    }

    /// Number of sweeps that ran to completion
    pub fn completed_sweeps(&self) -> u64 {
        self.completed.load(Ordering::Acquire)
    }
}

/// Flips the handle back to `Idle` even when a sweep future is dropped
struct SweepingGuard<'a>(&'a AtomicBool);

impl<'a> SweepingGuard<'a> {
    fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for SweepingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Sweeper drives periodic probes across the registry's contents
pub struct Sweeper {
    registry: Arc<dyn TargetRegistry>,
    prober: Arc<dyn Prober>,
    config: MonitorConfig,
    handle: SweeperHandle,
    sweep_lock: Mutex<()>,
}

impl Sweeper {
    pub fn new(
        registry: Arc<dyn TargetRegistry>,
        prober: Arc<dyn Prober>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            registry,
            prober,
            config,
            handle: SweeperHandle::default(),
            sweep_lock: Mutex::new(()),
        }
    }

    pub fn handle(&self) -> SweeperHandle {
        self.handle.clone()
    }

    /// Run one full sweep over a snapshot of the registry.
    ///
    /// Each target is probed and updated on its own; an unreachable target
    /// or one deleted mid-sweep never stops the others from being checked.
    pub async fn sweep_once(&self) -> SweepReport {
        let _exclusive = self.sweep_lock.lock().await;
        let _state = SweepingGuard::enter(&self.handle.sweeping);

        let targets = self.registry.list().await;
        let mut report = SweepReport::default();

        for target in targets {
            let healthy = self
                .prober
                .check(target.url().as_str(), self.config.probe_timeout)
                .await;
            report.probed += 1;

            if !self.registry.update(target.id(), healthy).await {
                debug!(target_id = %target.id(), "Website removed during sweep, skipping");
                report.vanished += 1;
                continue;
            }

            if healthy {
                report.healthy += 1;
            } else {
                debug!(
                    target_id = %target.id(),
                    url = %target.url(),
                    "Website is not healthy"
                );
                report.unhealthy += 1;
            }
        }

        self.handle.completed.fetch_add(1, Ordering::AcqRel);
        report
    }

    /// Run sweep loop until shutdown (background task)
    ///
    /// The first sweep fires one full interval after start. Should be
    /// spawned with `tokio::spawn`.
    pub async fn run(self, mut shutdown: ShutdownToken) {
        // Config fields are public; clamp to the accepted range again
        let period = self.config.sweep_interval.min(MAX_CONFIG_DURATION);
        info!(
            interval_ms = period.as_millis() as u64,
            probe_timeout_ms = self.config.probe_timeout.as_millis() as u64,
            "Sweeper started"
        );

        let Some(first_tick) = Instant::now().checked_add(period) else {
            error!(
                interval_ms = period.as_millis() as u64,
                "Sweep interval out of range, sweeper not started"
            );
            return;
        };
        let mut tick = interval_at(first_tick, period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                _ = tick.tick() => {}
            }

            let started = Instant::now();
            tokio::select! {
                biased;
                _ = shutdown.wait() => {
                    warn!("Shutdown requested mid-sweep, abandoning in-flight probes");
                    break;
                }
                report = self.sweep_once() => {
                    info!(
                        probed = report.probed,
                        healthy = report.healthy,
                        unhealthy = report.unhealthy,
                        vanished = report.vanished,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Sweep completed"
                    );
                    if started.elapsed() > period {
                        warn!(
                            interval_ms = period.as_millis() as u64,
                            "Sweep took longer than the interval, next tick coalesced"
                        );
                    }
                }
            }
        }

        info!("Sweeper stopped");
    }
}
