// Register Use Case

use crate::domain::{Target, TargetUrl};
use crate::error::Result;
use crate::port::{Prober, TargetRegistry};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Execute register use case: validate, probe once, store the outcome.
///
/// The probe runs before the registry is touched, so no registry lock is
/// ever held across network I/O and a rejected URL never reaches the network.
///
/// # Arguments
///
/// * `registry` - Target registry
/// * `prober` - Reachability check (injected for determinism)
/// * `probe_timeout` - Upper bound for the initial probe
/// * `raw_url` - URL as supplied by the caller
pub async fn execute(
    registry: &dyn TargetRegistry,
    prober: &dyn Prober,
    probe_timeout: Duration,
    raw_url: &str,
) -> Result<Target> {
    let url = TargetUrl::parse(raw_url).inspect_err(|e| {
        warn!(url = %raw_url, error = %e, "Rejected website registration");
    })?;

    let healthy = prober.check(url.as_str(), probe_timeout).await;
    if !healthy {
        debug!(url = %url, "Website is not healthy at registration");
    }

    let id = registry.create(url.as_str(), Some(healthy)).await?;

    info!(target_id = %id, url = %url, healthy, "Website registered");

    Ok(Target::new(id, url, healthy))
}
