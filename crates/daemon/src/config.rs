// Daemon configuration: command-line flags with environment fallbacks

use clap::Parser;
use healthz_api_rpc::RpcServerConfig;
use healthz_core::config::parse_duration;
use healthz_core::MonitorConfig;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "healthz-daemon")]
#[command(version, about = "Website liveness monitor daemon", long_about = None)]
pub struct Args {
    /// Time between two sweeps over every registered website
    #[arg(long, env = "HEALTHZ_INTERVAL", default_value = "5m", value_parser = duration_arg)]
    pub interval: Duration,

    /// Upper bound for a single probe
    #[arg(long, env = "HEALTHZ_TIMEOUT", default_value = "800ms", value_parser = duration_arg)]
    pub timeout: Duration,

    /// Address the JSON-RPC server binds to
    #[arg(long, env = "HEALTHZ_RPC_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port the JSON-RPC server listens on
    #[arg(long, env = "HEALTHZ_RPC_PORT", default_value_t = 9527)]
    pub port: u16,
}

fn duration_arg(s: &str) -> Result<Duration, String> {
    parse_duration(s).map_err(|e| e.to_string())
}

impl Args {
    pub fn monitor_config(&self) -> healthz_core::Result<MonitorConfig> {
        MonitorConfig::new(self.interval, self.timeout)
    }

    pub fn rpc_config(&self) -> RpcServerConfig {
        RpcServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["healthz-daemon"]).unwrap();
        let config = args.monitor_config().unwrap();
        assert_eq!(config, MonitorConfig::default());
        assert_eq!(config.to_string(), "update_interval=5m http_client_timeout=800ms");
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "healthz-daemon",
            "--interval",
            "1m30s",
            "--timeout",
            "2s",
            "--port",
            "0",
        ])
        .unwrap();

        let config = args.monitor_config().unwrap();
        assert_eq!(config.sweep_interval, Duration::from_secs(90));
        assert_eq!(config.probe_timeout, Duration::from_secs(2));
        assert_eq!(args.rpc_config().port, 0);
    }

    #[test]
    fn test_malformed_duration_is_rejected() {
        assert!(Args::try_parse_from(["healthz-daemon", "--interval", "soon"]).is_err());
    }

    #[test]
    fn test_overflowing_duration_is_rejected() {
        assert!(Args::try_parse_from(["healthz-daemon", "--interval", "6000000000000000h"]).is_err());
        assert!(Args::try_parse_from(["healthz-daemon", "--timeout", "18446744073709551615s1s"]).is_err());
    }

    #[test]
    fn test_huge_interval_is_rejected() {
        let args =
            Args::try_parse_from(["healthz-daemon", "--interval", "18446744073709551615s"]).unwrap();
        assert!(args.monitor_config().is_err());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let args = Args::try_parse_from(["healthz-daemon", "--interval", "0s"]).unwrap();
        assert!(args.monitor_config().is_err());
    }
}
