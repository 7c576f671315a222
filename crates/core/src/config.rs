// Monitor Configuration
// Supplied once at process start, immutable afterwards.

use crate::application::constants::{
    DEFAULT_PROBE_TIMEOUT, DEFAULT_SWEEP_INTERVAL, MAX_CONFIG_DURATION,
};
use crate::error::{AppError, Result};
use std::fmt;
use std::time::Duration;

/// Sweep cadence and per-probe timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Time between two sweeps
    pub sweep_interval: Duration,
    /// Upper bound for a single probe (registration and sweeps alike)
    pub probe_timeout: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

impl MonitorConfig {
    pub fn new(sweep_interval: Duration, probe_timeout: Duration) -> Result<Self> {
        if sweep_interval.is_zero() {
            return Err(AppError::Config("sweep interval must be positive".to_string()));
        }
        if probe_timeout.is_zero() {
            return Err(AppError::Config("probe timeout must be positive".to_string()));
        }
        if sweep_interval > MAX_CONFIG_DURATION || probe_timeout > MAX_CONFIG_DURATION {
            return Err(AppError::Config(format!(
                "sweep interval and probe timeout must not exceed {}",
                format_duration(MAX_CONFIG_DURATION)
            )));
        }
        Ok(Self {
            sweep_interval,
            probe_timeout,
        })
    }

    /// Build from duration strings such as `"5m"` and `"800ms"`
    pub fn parse(sweep_interval: &str, probe_timeout: &str) -> Result<Self> {
        Self::new(parse_duration(sweep_interval)?, parse_duration(probe_timeout)?)
    }
}

impl fmt::Display for MonitorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "update_interval={} http_client_timeout={}",
            format_duration(self.sweep_interval),
            format_duration(self.probe_timeout)
        )
    }
}

/// Parse a duration string like "800ms", "30s", "5m", "1h" or "1m30s".
pub fn parse_duration(s: &str) -> Result<Duration> {
    let input = s.trim();
    if input.is_empty() {
        return Err(AppError::Config("empty duration".to_string()));
    }

    let mut total = Duration::ZERO;
    let mut rest = input;
    while !rest.is_empty() {
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if digits == 0 {
            return Err(AppError::Config(format!("invalid duration {input:?}")));
        }
        let value: u64 = rest[..digits]
            .parse()
            .map_err(|_| AppError::Config(format!("invalid duration {input:?}")))?;
        rest = &rest[digits..];

        let unit_len = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let out_of_range = || AppError::Config(format!("duration {input:?} out of range"));
        let segment = match &rest[..unit_len] {
            "ms" => Duration::from_millis(value),
            "s" => Duration::from_secs(value),
            "m" => Duration::from_secs(value.checked_mul(60).ok_or_else(out_of_range)?),
            "h" => Duration::from_secs(value.checked_mul(3600).ok_or_else(out_of_range)?),
            "" => {
                return Err(AppError::Config(format!(
                    "missing unit in duration {input:?}"
                )))
            }
            unit => {
                return Err(AppError::Config(format!(
                    "unknown unit {unit:?} in duration {input:?}"
                )))
            }
        };
        total = total.checked_add(segment).ok_or_else(out_of_range)?;
        rest = &rest[unit_len..];
    }

    Ok(total)
}

/// Render a duration compactly: "800ms", "30s", "5m", "1h30m".
pub fn format_duration(d: Duration) -> String {
    let millis = d.as_millis();
    if millis == 0 {
        return "0s".to_string();
    }
    if millis % 1000 != 0 {
        return format!("{millis}ms");
    }

    let mut secs = d.as_secs();
    let mut out = String::new();
    let hours = secs / 3600;
    secs %= 3600;
    let minutes = secs / 60;
    secs %= 60;
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if secs > 0 {
        out.push_str(&format!("{secs}s"));
    }
    out
}
