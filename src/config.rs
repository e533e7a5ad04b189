//! Dashboard configuration loaded from environment variables (and `.env`).
//!
//! - `DASHBOARD_API_URL` base URL of the trading backend
//! - `DASHBOARD_EXPLORER_URL` block explorer transaction URL prefix
//! - `DASHBOARD_OUTPUT_DIR` where `index.html` and the chart are written
//! - `DASHBOARD_REQUEST_TIMEOUT_SECS` per-request timeout
//! - `DASHBOARD_REFRESH_INTERVAL_SECS` if set, refresh periodically
//! - `WALLET_RPC_URL` if set, wallet JSON-RPC endpoint
//!
//! Empty values are treated as unset.

use std::path::PathBuf;
use std::time::Duration;

use crate::utils::DashboardError;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_EXPLORER_URL: &str = "https://polygonscan.com/tx";
const DEFAULT_OUTPUT_DIR: &str = "dashboard";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_url: String,
    pub explorer_url: String,
    pub output_dir: PathBuf,
    pub request_timeout: Duration,
    pub refresh_interval: Option<Duration>,
    pub wallet_rpc_url: Option<String>,
}

impl DashboardConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DashboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|s| !s.trim().is_empty());

        let request_timeout = match var("DASHBOARD_REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_secs("DASHBOARD_REQUEST_TIMEOUT_SECS", &raw)?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let refresh_interval = var("DASHBOARD_REFRESH_INTERVAL_SECS")
            .map(|raw| parse_secs("DASHBOARD_REFRESH_INTERVAL_SECS", &raw))
            .transpose()?;

        Ok(DashboardConfig {
            api_url: var("DASHBOARD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            explorer_url: var("DASHBOARD_EXPLORER_URL")
                .unwrap_or_else(|| DEFAULT_EXPLORER_URL.to_string()),
            output_dir: PathBuf::from(
                var("DASHBOARD_OUTPUT_DIR").unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            ),
            request_timeout,
            refresh_interval,
            wallet_rpc_url: var("WALLET_RPC_URL"),
        })
    }
}

/// Parse a positive number of seconds
fn parse_secs(name: &str, raw: &str) -> Result<Duration, DashboardError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(DashboardError::Config(format!("{} must be greater than zero", name))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(DashboardError::Config(format!(
            "{} must be a whole number of seconds, got '{}'",
            name, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<DashboardConfig, DashboardError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_without_env_vars() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.explorer_url, DEFAULT_EXPLORER_URL);
        assert_eq!(config.output_dir, PathBuf::from("dashboard"));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.refresh_interval.is_none());
        assert!(config.wallet_rpc_url.is_none());
    }

    #[test]
    fn overrides_from_env() {
        let config = load(&[
            ("DASHBOARD_API_URL", "http://backend:9000"),
            ("DASHBOARD_EXPLORER_URL", "https://amoy.polygonscan.com/tx"),
            ("DASHBOARD_OUTPUT_DIR", "/tmp/out"),
            ("DASHBOARD_REQUEST_TIMEOUT_SECS", "3"),
            ("DASHBOARD_REFRESH_INTERVAL_SECS", "60"),
            ("WALLET_RPC_URL", "http://localhost:8545"),
        ])
        .unwrap();
        assert_eq!(config.api_url, "http://backend:9000");
        assert_eq!(config.explorer_url, "https://amoy.polygonscan.com/tx");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(60)));
        assert_eq!(config.wallet_rpc_url.as_deref(), Some("http://localhost:8545"));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = load(&[("DASHBOARD_API_URL", ""), ("WALLET_RPC_URL", "  ")]).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.wallet_rpc_url.is_none());
    }

    #[test]
    fn rejects_invalid_durations() {
        let err = load(&[("DASHBOARD_REQUEST_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("whole number of seconds"));

        let err = load(&[("DASHBOARD_REFRESH_INTERVAL_SECS", "0")]).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }
}
