//! Widget components for the habitflow TUI.
//!
//! Each widget is a function that renders state into a buffer. Geometry
//! comes from [`crate::layout`] so that hit-testing matches what is drawn,
//! and colors come from a [`Palette`](crate::theme::Palette) computed once
//! per frame.
//!
//! # Modules
//!
//! - [`grid`]: the card grid and its empty states
//! - [`habit_card`]: a single habit card with progress bar and buttons
//! - [`filter_bar`]: category chips
//! - [`menu`]: the card options popup
//! - [`notification`]: the toast in the bottom-right corner
//! - [`modal`]: create/edit form, delete confirmation, and stats
//! - [`charts`]: dashboard charts drawn from the chart bridge's state
//! - [`help`]: key binding overlay
//! - [`status_bar`]: key hints for the current input mode
//!
//! # Example
//!
//! ```
//! use habitflow_config::ThemeMode;
//! use habitflow_protocol::dummy::dummy_registry;
//! use habitflow_tui::lifecycle::Lifecycle;
//! use habitflow_tui::theme::Palette;
//! use habitflow_tui::widgets;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let lifecycle = Lifecycle::new(dummy_registry());
//! let area = Rect::new(0, 0, 90, 21);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_grid(&lifecycle, Some(0), area, &mut buf, &Palette::for_mode(ThemeMode::Dark));
//! ```

pub mod charts;
pub mod filter_bar;
pub mod grid;
pub mod habit_card;
pub mod help;
pub mod menu;
pub mod modal;
pub mod notification;
pub mod status_bar;

pub use charts::render_chart;
pub use filter_bar::render_filter_bar;
pub use grid::render_grid;
pub use habit_card::{CardLook, render_habit_card};
pub use help::render_help_overlay;
pub use menu::render_menu;
pub use modal::{render_confirm, render_form, render_stats};
pub use notification::render_notification;
pub use status_bar::render_status_bar;

/// Shortens `text` to `width` characters, ending with `…` when cut.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}
