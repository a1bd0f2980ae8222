//! The top-level [`Config`] and where it is loaded from.

use serde::{Deserialize, Serialize};

use crate::api::ApiConfig;
use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Overrides the persistence service base URL.
pub const ENV_API_URL: &str = "HABITFLOW_API_URL";

/// Disables the persistence service when set to `1` or `true`.
pub const ENV_OFFLINE: &str = "HABITFLOW_OFFLINE";

/// Overrides the log level.
pub const ENV_LOG: &str = "HABITFLOW_LOG";

/// All user settings, one field per section.
///
/// # Examples
///
/// ```
/// use habitflow_config::{ApiConfig, Config, LoggingConfig};
///
/// let config = Config::default();
/// assert!(config.api.enabled);
///
/// let config = Config {
///     api: ApiConfig::with_base_url("https://habits.example.com"),
///     logging: LoggingConfig::default(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Habit persistence service settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Reads the first file [`find_config_file`] finds, or starts from
    /// defaults, then applies `HABITFLOW_*` overrides and validates.
    ///
    /// # Errors
    ///
    /// Fails on an unreadable or malformed file, and on invalid values.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use habitflow_config::Config;
    ///
    /// # async fn example() -> habitflow_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Posting habits to {}", config.api.base_url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates one file, without environment overrides.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let loaded: Self = read_config_file(path)?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Writes the settings as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteFile`](crate::ConfigError::WriteFile)
    /// on I/O failure.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns the first section error.
    ///
    /// # Examples
    ///
    /// ```
    /// use habitflow_config::{ApiConfig, Config};
    ///
    /// let settings = Config {
    ///     api: ApiConfig::with_base_url("not a url"),
    ///     ..Config::default()
    /// };
    /// assert!(settings.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Applies `HABITFLOW_*` overrides read through `lookup`.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(offline) = lookup(ENV_OFFLINE) {
            let offline = offline.trim();
            if offline == "1" || offline.eq_ignore_ascii_case("true") {
                self.api.enabled = false;
            }
        }
        if let Some(level) = lookup(ENV_LOG).filter(|l| !l.trim().is_empty()) {
            self.logging.level = level.trim().to_string();
        }
    }

    /// Returns whether created habits should be posted to the service.
    #[must_use]
    pub fn persistence_enabled(&self) -> bool {
        self.api.enabled
    }
}
