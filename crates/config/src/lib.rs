//! Settings for the habitflow dashboard.
//!
//! [`Config`] covers the persistence service ([`api`]) and log output
//! ([`logging`]). The dark/light preference is kept in its own file, see
//! [`theme`]. File locations and JSON5 access are in [`persistence`].
//!
//! Sources, highest priority first:
//!
//! 1. `HABITFLOW_API_URL`, `HABITFLOW_OFFLINE`, `HABITFLOW_LOG`
//! 2. `./habitflow.json5`, then `./habitflow.json`
//! 3. `config.json5`, then `config.json`, under `~/.config/habitflow/`
//! 4. built-in defaults
//!
//! ```json5
//! {
//!   api: {
//!     base_url: "http://localhost:3000",
//!     enabled: true,
//!     timeout_secs: 10,
//!   },
//!   logging: { level: "info" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use habitflow_config::Config;
//!
//! # async fn example() -> habitflow_config::Result<()> {
//! let config = Config::load().await?;
//! if config.persistence_enabled() {
//!     println!("Posting habits to {}", config.api.base_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod theme;

pub use api::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
pub use theme::{ThemeMode, ThemeState};
