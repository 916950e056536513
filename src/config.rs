//! Client configuration.
//!
//! Values are layered: built-in defaults, then `~/.learnpath/config.json`
//! when present, then environment variables.
//!
//! ```json
//! {
//!   "api_url": "https://api.example.com",
//!   "user_id": "u-42",
//!   "timeout_secs": 20,
//!   "navigation_delay_ms": 1000
//! }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_URL: &str = "LEARNPATH_API_URL";
pub const ENV_USER_ID: &str = "LEARNPATH_USER_ID";
pub const ENV_TIMEOUT_SECS: &str = "LEARNPATH_TIMEOUT_SECS";

const CONFIG_DIR: &str = ".learnpath";
const CONFIG_FILE: &str = "config.json";

/// Runtime configuration for the API client and view state.
///
/// # Example
///
/// ```ignore
/// use learnpath::config::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_base_url("https://api.example.com")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Learner id used for progress updates.
    pub user_id: Option<String>,
    /// Pause between enrollment and navigation.
    pub navigation_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_id: None,
            navigation_delay: crate::view_state::DEFAULT_NAVIGATION_DELAY,
        }
    }
}

/// On-disk shape; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_url: Option<String>,
    user_id: Option<String>,
    timeout_secs: Option<u64>,
    navigation_delay_ms: Option<u64>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the learner id.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the post-enrollment navigation delay.
    pub fn with_navigation_delay(mut self, delay: Duration) -> Self {
        self.navigation_delay = delay;
        self
    }

    /// `~/.learnpath/config.json`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from the default file location and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::default_path().as_deref())
    }

    /// Load from `path` (skipped when missing) and the environment.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = path {
            if path.exists() {
                config = config.merge_file(path)?;
                tracing::debug!(path = %path.display(), "loaded config file");
            }
        }
        config = config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn merge_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(url) = file.api_url {
            self = self.with_base_url(url);
        }
        if let Some(user_id) = file.user_id {
            self.user_id = Some(user_id);
        }
        if let Some(secs) = file.timeout_secs {
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "timeout_secs",
                    value: secs.to_string(),
                });
            }
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = file.navigation_delay_ms {
            self.navigation_delay = Duration::from_millis(ms);
        }
        Ok(self)
    }

    /// Apply `LEARNPATH_*` environment overrides.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Some(url) = env_var(ENV_API_URL) {
            self = self.with_base_url(url);
        }
        if let Some(user_id) = env_var(ENV_USER_ID) {
            self.user_id = Some(user_id);
        }
        if let Some(raw) = env_var(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    /// Check that the base URL is http(s) with a host.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rest = self
            .base_url
            .strip_prefix("https://")
            .or_else(|| self.base_url.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
            _ => Err(ConfigError::InvalidBaseUrl(self.base_url.clone())),
        }
    }
}

/// Non-empty environment variable.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
