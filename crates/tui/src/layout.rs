//! Centralized layout measurements for the TUI.
//!
//! Rendering and click hit-testing both derive their geometry from the
//! functions in this module, so a region drawn on screen is always the
//! region that reacts to clicks.

use habitflow_protocol::{Category, CategoryFilter};
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the filter bar in rows.
pub const FILTER_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum width of a habit card.
pub const CARD_MIN_WIDTH: u16 = 30;

/// Height of a habit card: borders, meta, description, progress, spacer,
/// buttons.
pub const CARD_HEIGHT: u16 = 7;

/// Height of the chart row below the grid.
pub const CHART_HEIGHT: u16 = 10;

/// Minimum terminal height for useful rendering.
pub const MIN_HEIGHT: u16 =
    HEADER_HEIGHT + FILTER_BAR_HEIGHT + CARD_HEIGHT + STATUS_BAR_HEIGHT;

/// Minimum terminal height for showing the chart row.
pub const MIN_HEIGHT_WITH_CHARTS: u16 = MIN_HEIGHT + CHART_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 64;

/// Width of the "Complete" card button.
const COMPLETE_BUTTON_WIDTH: u16 = 12;

/// Width of the "Stats" card button.
const STATS_BUTTON_WIDTH: u16 = 7;

/// Width of the options card button.
const MENU_BUTTON_WIDTH: u16 = 3;

/// Label of the advanced filter chip.
pub const ADVANCED_FILTER_LABEL: &str = "⚙ Filter";

/// Screen regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Title bar.
    pub header: Rect,
    /// Category chips.
    pub filter_bar: Rect,
    /// Card grid.
    pub grid: Rect,
    /// Chart row, when tall enough.
    pub charts: Option<Rect>,
    /// Key hints.
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Splits `area` into dashboard regions.
    ///
    /// Returns `None` if the terminal is below the minimum size.
    #[must_use]
    pub fn compute(area: Rect) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }
        let chart_height = if area.height >= MIN_HEIGHT_WITH_CHARTS {
            CHART_HEIGHT
        } else {
            0
        };
        let [header, filter_bar, grid, charts, status_bar] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(chart_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        Some(Self {
            header,
            filter_bar,
            grid,
            charts: (chart_height > 0).then_some(charts),
            status_bar,
        })
    }
}

/// Returns how many card columns fit in `width`.
#[must_use]
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_MIN_WIDTH).max(1))
}

/// Returns the screen area of each visible card.
///
/// Cards are laid out row by row. Rows scroll so that `selected` stays on
/// screen. Each entry holds the card's index among the visible cards.
#[must_use]
pub fn card_slots(grid: Rect, count: usize, selected: Option<usize>) -> Vec<(usize, Rect)> {
    let columns = grid_columns(grid.width);
    let visible_rows = usize::from((grid.height / CARD_HEIGHT).max(1));
    let selected_row = selected.map_or(0, |s| s / columns);
    let first_row = (selected_row + 1).saturating_sub(visible_rows);

    let columns_u16 = u16::try_from(columns).unwrap_or(1);
    let card_width = grid.width / columns_u16;

    (first_row * columns..count)
        .take(visible_rows * columns)
        .map(|index| {
            let row = u16::try_from(index / columns - first_row).unwrap_or(0);
            let column = u16::try_from(index % columns).unwrap_or(0);
            let rect = Rect {
                x: grid.x + column * card_width,
                y: grid.y + row * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            };
            (index, rect)
        })
        .collect()
}

/// Clickable buttons of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardButtons {
    /// Marks the habit done.
    pub complete: Rect,
    /// Opens the stats modal.
    pub stats: Rect,
    /// Opens the options menu; also the menu anchor.
    pub menu: Rect,
}

/// Returns the button regions of the card drawn in `card`.
#[must_use]
pub fn card_buttons(card: Rect) -> CardButtons {
    let inner_x = card.x + 2;
    let inner_right = (card.x + card.width).saturating_sub(2);
    let row = (card.y + card.height).saturating_sub(2);
    let complete = Rect::new(inner_x, row, COMPLETE_BUTTON_WIDTH, 1);
    let stats = Rect::new(complete.right() + 1, row, STATS_BUTTON_WIDTH, 1);
    let menu = Rect::new(
        inner_right.saturating_sub(MENU_BUTTON_WIDTH),
        row,
        MENU_BUTTON_WIDTH,
        1,
    );
    CardButtons {
        complete,
        stats,
        menu,
    }
}

/// Returns the short chip label of a filter.
#[must_use]
pub const fn chip_label(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "All",
        CategoryFilter::Only(category) => match category {
            Category::Health => "Health",
            Category::Productivity => "Productivity",
            Category::Education => "Education",
            Category::Personal => "Personal",
            Category::Other => "Other",
        },
    }
}

/// Returns the filter chips and their screen regions.
#[must_use]
pub fn filter_chips(bar: Rect) -> Vec<(CategoryFilter, Rect)> {
    let mut x = bar.x + 1;
    let mut chips = Vec::new();
    for filter in CategoryFilter::all() {
        let width = label_width(chip_label(filter)) + 2;
        if x + width > bar.right() {
            break;
        }
        chips.push((filter, Rect::new(x, bar.y, width, 1)));
        x += width + 1;
    }
    chips
}

/// Returns the region of the advanced filter chip, right-aligned.
#[must_use]
pub fn advanced_filter_chip(bar: Rect) -> Rect {
    let width = label_width(ADVANCED_FILTER_LABEL) + 2;
    Rect::new(bar.right().saturating_sub(width + 1), bar.y, width, 1)
}

/// Returns the area of a notification with a message of `message_width`.
///
/// The toast sits in the bottom-right corner, above the status bar.
#[must_use]
pub fn toast_area(area: Rect, message_width: u16) -> Rect {
    // border + icon + space + message + space + close + border
    let width = (message_width + 8).min(area.width.saturating_sub(2));
    let height = 3.min(area.height);
    Rect::new(
        area.right().saturating_sub(width + 1),
        area.bottom().saturating_sub(height + STATUS_BAR_HEIGHT),
        width,
        height,
    )
}

/// Returns the close button of a toast.
#[must_use]
pub fn toast_close(toast: Rect) -> Rect {
    Rect::new(toast.right().saturating_sub(4), toast.y + 1, 3, 1)
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// is clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(x, y, popup_width, popup_height)
}

/// Size of the create/edit form.
pub const FORM_SIZE: (u16, u16) = (56, 14);

/// Size of the delete confirmation.
pub const CONFIRM_SIZE: (u16, u16) = (60, 8);

/// Size of the stats modal.
pub const STATS_SIZE: (u16, u16) = (60, 18);

/// Returns the cancel and delete buttons of the confirmation modal.
#[must_use]
pub fn confirm_buttons(modal: Rect) -> (Rect, Rect) {
    let row = modal.bottom().saturating_sub(2);
    let cancel = Rect::new(modal.x + 2, row, 10, 1);
    let delete = Rect::new(modal.right().saturating_sub(12), row, 10, 1);
    (cancel, delete)
}

fn label_width(label: &str) -> u16 {
    u16::try_from(label.chars().count()).unwrap_or(u16::MAX)
}
