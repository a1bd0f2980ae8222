//! File locations and JSON5/JSON file access.
//!
//! Configuration is looked up in the working directory first
//! (`habitflow.json5`, then `habitflow.json`), then in the user config
//! directory (`~/.config/habitflow/config.json5`, then `config.json`).
//!
//! The same directory holds `theme.json`, the persisted theme preference.
//! Logs go to `~/.local/share/habitflow/habitflow.log` unless configured.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Name of the per-user directories.
const APP_DIR: &str = "habitflow";

/// Candidate names in the working directory, by priority.
const LOCAL_FILE_NAMES: &[&str] = &["habitflow.json5", "habitflow.json"];

/// Candidate names in the user config directory, by priority.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

const THEME_FILE_NAME: &str = "theme.json";

const LOG_FILE_NAME: &str = "habitflow.log";

/// Lists config file candidates by priority.
///
/// `user_dir` is the user config directory, when one is known.
fn candidates(user_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(PathBuf::from);
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));
    local.chain(user).collect()
}

/// Returns the first existing configuration file.
///
/// # Examples
///
/// ```no_run
/// use habitflow_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = user_config_dir().ok();
    candidates(user_dir.as_deref())
        .into_iter()
        .find(|path| path.exists())
}

/// Returns `~/.config/habitflow` (or the platform equivalent).
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if it cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the path of the persisted theme preference.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the user config directory
/// cannot be determined.
pub fn theme_preference_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(THEME_FILE_NAME))
}

/// Returns the default log file path.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the user data directory
/// cannot be determined.
pub fn default_log_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR).join(LOG_FILE_NAME))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads a JSON5 (or plain JSON) file into `T`.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read, or
/// [`ConfigError::ParseJson5`] if its content does not match `T`.
///
/// # Examples
///
/// ```no_run
/// use habitflow_config::Config;
/// use habitflow_config::persistence::read_config_file;
///
/// # fn main() -> habitflow_config::Result<()> {
/// let config: Config = read_config_file("habitflow.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes `value` as pretty JSON, creating parent directories.
///
/// serde_json5 cannot serialize, so files written here are plain JSON,
/// which the reader accepts too.
///
/// # Errors
///
/// Returns [`ConfigError::WriteFile`] on I/O failure, or
/// [`ConfigError::SerializeJson`] if `value` cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source: std::io::Error| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        title: String,
        streak: u32,
    }

    #[test]
    fn candidates_prefer_local_then_json5() {
        let user = PathBuf::from("/home/me/.config/habitflow");
        let paths = candidates(Some(user.as_path()));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("habitflow.json5"),
                PathBuf::from("habitflow.json"),
                user.join("config.json5"),
                user.join("config.json"),
            ]
        );
        assert_eq!(candidates(None).len(), 2);
    }

    #[test]
    fn reads_json5_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json5");
        std::fs::write(
            &path,
            r#"
            {
                // trailing commas and bare keys are fine
                title: "Morning Run",
                streak: 4,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.title, "Morning Run");
        assert_eq!(sample.streak, 4);
    }

    #[test]
    fn read_errors_are_typed() {
        let missing: Result<Sample> = read_config_file("/nonexistent/habitflow.json");
        assert!(matches!(missing, Err(ConfigError::ReadFile { .. })));

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ title: ").unwrap();
        let broken: Result<Sample> = read_config_file(&path);
        assert!(matches!(broken, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn write_creates_parents_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("sample.json");
        let sample = Sample {
            title: "Journal".to_string(),
            streak: 0,
        };

        write_config_file(&path, &sample).unwrap();
        let loaded: Sample = read_config_file(&path).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn user_paths_live_under_app_dir() {
        if dirs::config_dir().is_some() {
            assert!(user_config_dir().unwrap().ends_with(APP_DIR));
            assert!(theme_preference_path().unwrap().ends_with("habitflow/theme.json"));
        }
        if dirs::data_local_dir().is_some() {
            assert!(default_log_path().unwrap().ends_with("habitflow/habitflow.log"));
        }
    }
}
