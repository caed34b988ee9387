use std::{env, time::Duration};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub slow_request_threshold: Duration,
    pub seed_on_startup: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://catalog.db?mode=rwc".to_string());
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "APP_PORT", 5000u16)?;
        let timeout_secs = parse_or(&lookup, "API_TIMEOUT", 5u64)?;
        let slow_ms = parse_or(&lookup, "SLOW_REQUEST_MS", 1000u64)?;
        let seed_on_startup = parse_or(&lookup, "SEED_ON_STARTUP", true)?;
        Ok(Self {
            database_url,
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
            slow_request_threshold: Duration::from_millis(slow_ms),
            seed_on_startup,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
