//! The error type shared by config loading and theme persistence.

use std::path::PathBuf;

/// Everything that can go wrong while loading, validating or saving
/// settings files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A settings file exists but cannot be read.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings file or its parent directory cannot be written.
    #[error("cannot write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is neither valid JSON5 nor the expected shape.
    #[error("malformed settings: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    #[error("cannot encode settings: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The persistence service URL is not an http(s) URL.
    #[error("invalid api base url: {0}")]
    InvalidApiUrl(String),

    #[error("invalid api timeout: {reason}")]
    InvalidTimeout { reason: String },

    /// Not one of `trace`, `debug`, `info`, `warn` or `error`.
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Neither a config nor a data directory is known for this user.
    #[error("no per-user directory available")]
    NoHomeDirectory,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
