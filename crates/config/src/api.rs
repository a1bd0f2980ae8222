//! Persistence service configuration.
//!
//! This module provides the [`ApiConfig`] type which controls whether newly
//! created habits are posted to the remote habit service, and where.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default base URL of the habit service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout (10 seconds).
pub const DEFAULT_TIMEOUT_SECS: u32 = 10;

/// Minimum allowed request timeout (1 second).
pub const MIN_TIMEOUT_SECS: u32 = 1;

/// Maximum allowed request timeout (2 minutes).
pub const MAX_TIMEOUT_SECS: u32 = 120;

/// Configuration for the habit persistence service.
///
/// # Examples
///
/// ```
/// use habitflow_config::ApiConfig;
///
/// let config = ApiConfig::default();
/// assert!(config.enabled);
/// assert_eq!(config.base_url, "http://localhost:3000");
///
/// let config = ApiConfig::with_base_url("https://habits.example.com");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service; `/api/habits` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whether create requests are sent at all.
    ///
    /// When false, cards stay local only.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_timeout_secs() -> u32 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            enabled: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Creates an enabled configuration pointing at `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Creates a configuration with persistence turned off.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Validates the URL scheme and the timeout range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL is not http(s), or
    /// [`ConfigError::InvalidTimeout`] if the timeout is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use habitflow_config::ApiConfig;
    ///
    /// assert!(ApiConfig::with_base_url("localhost:3000").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidApiUrl(self.base_url.clone()));
        }
        if self.timeout_secs < MIN_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                reason: format!("must be at least {MIN_TIMEOUT_SECS} second"),
            });
        }
        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                reason: format!("must be at most {MAX_TIMEOUT_SECS} seconds"),
            });
        }
        Ok(())
    }
}
