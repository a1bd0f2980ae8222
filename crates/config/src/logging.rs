//! Log output configuration.
//!
//! The terminal is owned by the UI, so log records go to a file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default log level directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in the config file.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration for log output.
///
/// # Examples
///
/// ```
/// use habitflow_config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert_eq!(config.level, "info");
/// assert!(config.file.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level recorded; `RUST_LOG` takes precedence at runtime.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log file path. Defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Validates the log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for unknown levels.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel(self.level.clone()))
        }
    }

    /// Returns the configured log file, or the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no file is configured and the home directory
    /// cannot be determined.
    pub fn resolved_file(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => crate::persistence::default_log_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_valid() {
        assert!(LoggingConfig::default().validate().is_ok());
    }

    #[test]
    fn level_is_case_insensitive() {
        let config = LoggingConfig {
            level: "DEBUG".to_string(),
            file: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = LoggingConfig {
            level: "verbose".to_string(),
            file: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel(level)) if level == "verbose"
        ));
    }

    #[test]
    fn configured_file_wins() {
        let config = LoggingConfig {
            level: default_level(),
            file: Some(PathBuf::from("/tmp/habitflow.log")),
        };
        assert_eq!(
            config.resolved_file().unwrap(),
            PathBuf::from("/tmp/habitflow.log")
        );
    }
}
