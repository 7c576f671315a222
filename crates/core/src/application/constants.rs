// Monitor constants (no magic values)
use std::time::Duration;

/// Default time between two sweeps (5 minutes)
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Default upper bound for one probe (800ms)
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(800);

/// How long the daemon waits for the sweeper task on shutdown (5 seconds)
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Longest accepted sweep interval or probe timeout (365 days)
pub const MAX_CONFIG_DURATION: Duration = Duration::from_secs(365 * 24 * 60 * 60);
