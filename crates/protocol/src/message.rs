//! Input-level intents for the dashboard.
//!
//! Keys and clicks are translated into a [`Message`] before the app state
//! sees them. Anything aimed at one card goes through [`CardAction`].

use serde::{Deserialize, Serialize};

use crate::registry::CategoryFilter;

/// An action targeting a single habit card.
///
/// Card buttons, option menu entries, and shortcut keys all resolve to one
/// of these before being dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    /// Mark the habit as done for today.
    Complete,
    /// Show the per-habit statistics modal.
    Stats,
    /// Open the options menu anchored on the card.
    Menu,
    /// Open the edit form.
    Edit,
    /// Acknowledge skipping today.
    Skip,
    /// Insert a copy right after the card.
    Duplicate,
    /// Reminder placeholder.
    Remind,
    /// Ask for confirmation, then delete.
    Delete,
}

/// One user intent, independent of the key or click that produced it.
///
/// # Examples
///
/// ```
/// use habitflow_protocol::{CardAction, Message};
///
/// let msg = Message::Card(CardAction::Complete);
/// assert!(!msg.is_form());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the selection left in the grid.
    NavigateLeft,
    /// Move the selection right in the grid.
    NavigateRight,
    /// Move the selection up one row (or up one menu entry).
    NavigateUp,
    /// Move the selection down one row (or down one menu entry).
    NavigateDown,
    /// Activate the highlighted menu entry.
    Select,
    /// Close the topmost overlay.
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Left click on a terminal cell.
    ClickAt { column: u16, row: u16 },
    /// Run an action on the selected card.
    Card(CardAction),
    /// Open the new habit form.
    NewHabit,
    /// Show only the given category.
    SetFilter(CategoryFilter),
    /// Switch to the next category filter.
    CycleFilter,
    /// Advanced filter placeholder.
    AdvancedFilter,
    /// Switch between dark and light themes.
    ToggleTheme,
    /// Close the current notification early.
    DismissNotification,

    /// Answer the delete confirmation.
    Confirm { accepted: bool },
    /// Type a character into the focused form field.
    FormInput { ch: char },
    /// Delete the character before the cursor.
    FormBackspace,
    /// Focus the next form field.
    FormNextField,
    /// Focus the previous form field.
    FormPrevField,
    /// Step a selector field; negative steps go backwards.
    FormCycle { delta: i32 },
    /// Submit the form.
    FormSubmit,
}

impl Message {
    /// Returns `true` if this message only makes sense while a form is open.
    #[must_use]
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FormInput { .. }
                | Self::FormBackspace
                | Self::FormNextField
                | Self::FormPrevField
                | Self::FormCycle { .. }
                | Self::FormSubmit
        )
    }
}
