//! habitflow - A terminal habit-tracking dashboard.
//!
//! This is the main binary that loads configuration, sets up logging, and
//! launches the TUI application.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use habitflow_client::HabitClient;
use habitflow_config::{
    Config, LoggingConfig, ThemeState, persistence,
    theme::{detect_ambient_mode, load_preference},
};
use habitflow_protocol::dummy::dummy_registry;
use habitflow_tui::{App, terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Configuration errors are printed before the screen is taken over
    let config = Config::load().await.context("invalid configuration")?;
    init_logging(&config.logging)?;

    let mut app = App::new(dummy_registry(), initial_theme());
    if let Ok(path) = persistence::theme_preference_path() {
        app = app.with_theme_path(path);
    }
    if config.persistence_enabled() {
        let timeout = Duration::from_secs(u64::from(config.api.timeout_secs));
        let client = HabitClient::new(&config.api.base_url, timeout)?;
        info!(endpoint = client.endpoint(), "persisting new habits");
        app = app.with_client(client);
    } else {
        info!("running offline, new habits stay local");
    }

    let mut terminal = terminal::setup_terminal()?;

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Sends log records to the log file; the terminal belongs to the UI.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let path = logging.resolved_file()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Picks the saved theme, falling back to the terminal background.
fn initial_theme() -> ThemeState {
    let saved = persistence::theme_preference_path()
        .and_then(load_preference)
        .unwrap_or_else(|err| {
            warn!(error = %err, "ignoring saved theme preference");
            None
        });
    ThemeState::initialize(saved, detect_ambient_mode())
}
