//! Configuration types for the server and the console runner.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: String,
    /// Server port
    pub port: u16,
    /// Upper bound on `runs` accepted by a single tick request
    pub max_runs: u32,
    /// OpenTelemetry endpoint
    pub otel_endpoint: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            max_runs: 10_000,
            otel_endpoint: None,
        }
    }
}

impl ServerConfig {
    /// Defaults overlaid with `LIFE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("LIFE_BIND_ADDRESS") {
            config.bind_address = addr;
        }
        if let Some(port) = lookup("LIFE_PORT") {
            config.port = parse_var("LIFE_PORT", &port)?;
        }
        if let Some(max_runs) = lookup("LIFE_MAX_RUNS") {
            config.max_runs = parse_var("LIFE_MAX_RUNS", &max_runs)?;
        }
        if let Some(endpoint) = lookup("LIFE_OTEL_ENDPOINT") {
            config.otel_endpoint = Some(endpoint);
        }

        debug!(?config, "Loaded server configuration");
        Ok(config)
    }
}

/// Console runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Seed file to load
    pub seed_path: Option<String>,
    /// Number of generations to compute after the seed
    pub runs: u32,
    /// OpenTelemetry endpoint
    pub otel_endpoint: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            runs: 10,
            otel_endpoint: None,
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("LIFE_SEED_PATH") {
            config.seed_path = Some(path);
        }
        if let Some(runs) = lookup("LIFE_RUNS") {
            config.runs = parse_var("LIFE_RUNS", &runs)?;
        }
        if let Some(endpoint) = lookup("LIFE_OTEL_ENDPOINT") {
            config.otel_endpoint = Some(endpoint);
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Validation(format!("{} has invalid value {:?}", key, value)))
}
