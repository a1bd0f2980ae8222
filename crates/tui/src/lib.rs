//! Ratatui front end of habitflow.
//!
//! [`App`] owns the [`AppState`] and turns input [`Message`]s into state
//! changes; everything on screen is drawn from that state each frame.
//! Card operations and their timers live in [`lifecycle`], screen geometry
//! shared by drawing and click hit-testing in [`layout`], and the two
//! dashboard charts behind the bridge in [`charts`].
//!
//! [`Message`]: habitflow_protocol::Message
//!
//! # Example
//!
//! ```no_run
//! use habitflow_config::{ThemeMode, ThemeState};
//! use habitflow_protocol::dummy::dummy_registry;
//! use habitflow_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let theme = ThemeState::initialize(None, ThemeMode::Dark);
//!     let mut app = App::new(dummy_registry(), theme);
//!
//!     let mut screen = terminal::setup_terminal()?;
//!     let outcome = app.run(&mut screen).await;
//!     terminal::restore_terminal(&mut screen)?;
//!     outcome
//! }
//! ```

pub mod app;
pub mod charts;
pub mod event;
pub mod form;
pub mod layout;
pub mod lifecycle;
pub mod menu;
pub mod notification;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::{App, SyncReport};
pub use state::{AppState, Modal};
