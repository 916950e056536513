//! Configuration loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while building a [`crate::config::ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for the expected shape.
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The API base URL is not an http(s) URL.
    #[error("invalid API base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),

    /// An environment override could not be parsed.
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },

    /// The HTTP transport could not be built from the configuration.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "E_CFG_READ",
            ConfigError::Parse { .. } => "E_CFG_PARSE",
            ConfigError::InvalidBaseUrl(_) => "E_CFG_URL",
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
            ConfigError::HttpClient(_) => "E_CFG_HTTP",
        }
    }
}
