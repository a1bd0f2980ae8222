//! Terminal input: polling plus the key and mouse bindings.
//!
//! Keys map differently depending on what has input focus, see
//! [`InputMode`]. Mouse clicks map the same way everywhere.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use habitflow_protocol::{CardAction, CategoryFilter, Message};

/// How long one poll waits before the loop ticks again.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Which component receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The card grid.
    #[default]
    Normal,
    /// An open options menu.
    Menu,
    /// The create/edit form.
    Form,
    /// The delete confirmation.
    Confirm,
}

/// Waits up to [`POLL_TIMEOUT`] for the next terminal event.
///
/// # Errors
///
/// Propagates I/O failures from crossterm.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Maps a terminal event to a message, routing keys by focus.
///
/// Unbound input yields `None`.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) => match mode {
            InputMode::Normal => key_to_message(*key),
            InputMode::Menu => key_to_menu_message(*key),
            InputMode::Form => key_to_form_message(*key),
            InputMode::Confirm => key_to_confirm_message(*key),
        },
        Event::Mouse(mouse) => click_message(mouse),
        _ => None,
    }
}

/// Left button presses become clicks; other mouse activity is ignored.
fn click_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Grid bindings.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Close overlay |
/// | Arrows | Move selection |
/// | `Enter` or `Space` | Complete selected habit |
/// | `n` | New habit |
/// | `s` | Stats |
/// | `m` | Options menu |
/// | `e` / `d` / `D` / `k` / `r` | Edit / duplicate / delete / skip / reminder |
/// | `0`-`5` | Filter by category |
/// | `f` | Next filter |
/// | `F` | Advanced filter |
/// | `t` | Toggle theme |
/// | `x` | Dismiss notification |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_quit(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Card(CardAction::Complete)),
        KeyCode::Char('s') => Some(Message::Card(CardAction::Stats)),
        KeyCode::Char('m') => Some(Message::Card(CardAction::Menu)),
        KeyCode::Char('e') => Some(Message::Card(CardAction::Edit)),
        KeyCode::Char('d') => Some(Message::Card(CardAction::Duplicate)),
        KeyCode::Char('D') => Some(Message::Card(CardAction::Delete)),
        KeyCode::Char('k') => Some(Message::Card(CardAction::Skip)),
        KeyCode::Char('r') => Some(Message::Card(CardAction::Remind)),

        KeyCode::Char('n') => Some(Message::NewHabit),
        KeyCode::Char(digit @ '0'..='5') => digit
            .to_digit(10)
            .and_then(|d| CategoryFilter::from_index(d as usize))
            .map(Message::SetFilter),
        KeyCode::Char('f') => Some(Message::CycleFilter),
        KeyCode::Char('F') => Some(Message::AdvancedFilter),
        KeyCode::Char('t') => Some(Message::ToggleTheme),
        KeyCode::Char('x') => Some(Message::DismissNotification),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Bindings while an options menu is open.
#[must_use]
pub fn key_to_menu_message(key: KeyEvent) -> Option<Message> {
    if is_quit(key) {
        return Some(Message::Quit);
    }
    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),
        _ => None,
    }
}

/// Form bindings.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Tab` / `Down` | Next field |
/// | `Shift+Tab` / `Up` | Previous field |
/// | `Left` / `Right` | Change category or frequency |
/// | `Enter` | Submit |
/// | `Esc` | Cancel |
/// | `Backspace` | Delete character |
/// | Any char | Input |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if is_quit(key) {
        return Some(Message::Quit);
    }
    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Tab | KeyCode::Down => Some(Message::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Message::FormPrevField),
        KeyCode::Left => Some(Message::FormCycle { delta: -1 }),
        KeyCode::Right => Some(Message::FormCycle { delta: 1 }),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}

/// Answers to the delete confirmation.
#[must_use]
pub fn key_to_confirm_message(key: KeyEvent) -> Option<Message> {
    if is_quit(key) {
        return Some(Message::Quit);
    }
    match key.code {
        KeyCode::Char('y' | 'Y') => Some(Message::Confirm { accepted: true }),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::Confirm { accepted: false }),
        _ => None,
    }
}
