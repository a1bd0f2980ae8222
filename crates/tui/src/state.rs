//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! the lifecycle controller with its cards, the grid selection, the single
//! modal slot, and the theme.

use habitflow_config::ThemeState;
use habitflow_protocol::{CardRegistry, HabitCard, HabitId};

use crate::form::HabitForm;
use crate::lifecycle::Lifecycle;

/// The modal currently shown, at most one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Create or edit form.
    Form(HabitForm),
    /// Delete confirmation.
    ConfirmDelete {
        /// Card to delete.
        card: HabitId,
        /// Question shown to the user.
        prompt: String,
    },
    /// Per-habit statistics.
    Stats {
        /// Card whose stats are shown.
        card: HabitId,
    },
}

/// The application state.
///
/// Contains all mutable state for the TUI application except transient
/// render-derived data (hit regions, chart instances), which the
/// [`App`](crate::App) keeps.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cards, notifications, and their timers.
    pub lifecycle: Lifecycle,
    /// Index of the selected card among the visible cards, if any.
    pub selected: Option<usize>,
    /// Open modal, if any.
    pub modal: Option<Modal>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Current theme.
    pub theme: ThemeState,
    /// Number of card columns in the last rendered grid.
    pub grid_columns: usize,
}

impl AppState {
    /// Creates a new application state over `registry`.
    ///
    /// The first visible card is selected, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use habitflow_config::{ThemeMode, ThemeState};
    /// use habitflow_protocol::dummy::dummy_registry;
    /// use habitflow_tui::AppState;
    ///
    /// let state = AppState::new(dummy_registry(), ThemeState::initialize(None, ThemeMode::Dark));
    /// assert_eq!(state.selected, Some(0));
    /// ```
    #[must_use]
    pub fn new(registry: CardRegistry, theme: ThemeState) -> Self {
        let selected = (registry.visible_len() > 0).then_some(0);
        Self {
            lifecycle: Lifecycle::new(registry),
            selected,
            modal: None,
            help_visible: false,
            theme,
            grid_columns: 1,
        }
    }

    /// Returns the card registry.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        self.lifecycle.registry()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Returns the selected card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&HabitCard> {
        self.registry().visible_at(self.selected?)
    }

    /// Returns the identifier of the selected card, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<HabitId> {
        self.selected_card().map(|card| card.id)
    }

    /// Selects the card with `id` if it is visible.
    pub fn select_id(&mut self, id: HabitId) {
        if let Some(index) = self.registry().visible_index(id) {
            self.selected = Some(index);
        }
    }

    /// Moves the selection one card to the left.
    pub fn navigate_left(&mut self) {
        self.move_selection(|index, _, _| index.checked_sub(1));
    }

    /// Moves the selection one card to the right.
    pub fn navigate_right(&mut self) {
        self.move_selection(|index, _, len| (index + 1 < len).then_some(index + 1));
    }

    /// Moves the selection one row up.
    pub fn navigate_up(&mut self) {
        self.move_selection(|index, columns, _| index.checked_sub(columns));
    }

    /// Moves the selection one row down.
    pub fn navigate_down(&mut self) {
        self.move_selection(|index, columns, len| {
            (index + columns < len).then_some(index + columns)
        });
    }

    /// Applies a grid move; stays put when the move leaves the grid.
    fn move_selection(&mut self, step: impl Fn(usize, usize, usize) -> Option<usize>) {
        let len = self.registry().visible_len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = match self.selected {
            None => Some(0),
            Some(index) => {
                let index = index.min(len - 1);
                Some(step(index, self.grid_columns.max(1), len).unwrap_or(index))
            }
        };
    }

    /// Keeps the selection within the visible cards.
    ///
    /// Call after the visible set shrinks or the filter changes.
    pub fn clamp_selection(&mut self) {
        let len = self.registry().visible_len();
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(index), _) => Some(index.min(len - 1)),
        };
    }

    /// Clears the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Opens a modal, replacing any open modal.
    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    /// Closes the modal. Returns it if one was open.
    pub fn close_modal(&mut self) -> Option<Modal> {
        self.modal.take()
    }

    /// Returns the open form, if the modal is a form.
    pub fn form_mut(&mut self) -> Option<&mut HabitForm> {
        match &mut self.modal {
            Some(Modal::Form(form)) => Some(form),
            _ => None,
        }
    }
}
