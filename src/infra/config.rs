//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact text: timestamp LEVEL target - message
    Compact,
    /// JSON Lines for structured log shipping
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" | "jsonl" => Ok(LogFormat::Json),
            other => anyhow::bail!("unknown log format '{}' (expected compact or json)", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `CRM_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `CRM_SEED_SAMPLE_DATA`
    pub seed_sample_data: bool,
    /// `CRM_LOG_LEVEL`, only used when `RUST_LOG` is unset.
    pub log_level: String,
    /// `CRM_LOG_FORMAT`
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Reads `.env` (if present) and the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("CRM_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("CRM_BIND_ADDR must be host:port, got '{}'", bind))?;

        let seed_sample_data = match lookup("CRM_SEED_SAMPLE_DATA") {
            Some(v) => parse_bool(&v).context("CRM_SEED_SAMPLE_DATA")?,
            None => true,
        };

        let log_level = lookup("CRM_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let log_format = match lookup("CRM_LOG_FORMAT") {
            Some(v) => LogFormat::parse(&v)?,
            None => LogFormat::Compact,
        };

        Ok(Self {
            bind_addr,
            seed_sample_data,
            log_level,
            log_format,
        })
    }
}

fn parse_bool(v: &str) -> anyhow::Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr.port(), 5000);
        assert!(cfg.seed_sample_data);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.log_format, LogFormat::Compact);
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = config(&[
            ("CRM_BIND_ADDR", "127.0.0.1:8088"),
            ("CRM_SEED_SAMPLE_DATA", "off"),
            ("CRM_LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8088");
        assert!(!cfg.seed_sample_data);
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config(&[("CRM_BIND_ADDR", "nowhere")]).is_err());
        assert!(config(&[("CRM_SEED_SAMPLE_DATA", "maybe")]).is_err());
        assert!(config(&[("CRM_LOG_FORMAT", "xml")]).is_err());
    }
}
