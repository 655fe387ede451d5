//! services/api/src/config.rs
//!
//! Defines the services' configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Which of the two HTTP services is being configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    Extraction,
    Preview,
}

impl ServiceKind {
    /// Name reported by the health endpoint and in logs.
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Extraction => "extraction-api",
            ServiceKind::Preview => "preview-api",
        }
    }

    fn default_bind_address(self) -> &'static str {
        match self {
            ServiceKind::Extraction => "0.0.0.0:8080",
            ServiceKind::Preview => "0.0.0.0:8081",
        }
    }
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub service: ServiceKind,
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// Directory holding rendered preview documents.
    pub preview_dir: PathBuf,
    /// Evict the oldest extractions beyond this count. Uncapped when `None`.
    pub max_extractions: Option<usize>,
    /// Reject request bodies larger than this. Uncapped when `None`.
    pub max_body_bytes: Option<usize>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env(service: ServiceKind) -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(service, |key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(service: ServiceKind, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address_str = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| service.default_bind_address().to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let preview_dir = lookup("PREVIEW_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./previews"));

        let max_extractions = parse_optional_cap(&lookup, "MAX_EXTRACTIONS")?;
        let max_body_bytes = parse_optional_cap(&lookup, "MAX_BODY_BYTES")?;

        Ok(Self {
            service,
            bind_address,
            log_level,
            preview_dir,
            max_extractions,
            max_body_bytes,
        })
    }
}

fn parse_optional_cap<F>(lookup: &F, key: &str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(ConfigError::InvalidValue(
                key.to_string(),
                format!("'{}' is not a positive integer", raw),
            )),
        },
    }
}
