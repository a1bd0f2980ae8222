//! Terminal setup and teardown.
//!
//! The dashboard runs on the alternate screen with raw mode, mouse capture
//! and focus reporting enabled. [`install_panic_hook`] makes sure a panic
//! leaves the user's shell usable.

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error};

/// Ratatui terminal drawing to stdout.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Window title set while the dashboard is open.
const WINDOW_TITLE: &str = "habitflow";

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("cannot take over the terminal: {0}")]
    Setup(#[source] io::Error),

    /// The shell may be left in raw mode.
    #[error("cannot hand the terminal back: {0}")]
    Restore(#[source] io::Error),
}

/// Enters raw mode and the alternate screen, with mouse capture.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use habitflow_tui::terminal;
///
/// # fn main() -> Result<(), terminal::TerminalError> {
/// let mut screen = terminal::setup_terminal()?;
/// terminal::restore_terminal(&mut screen)?;
/// # Ok(())
/// # }
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut out = io::stdout();
    execute!(
        out,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle(WINDOW_TITLE)
    )
    .map_err(TerminalError::Setup)?;
    debug!("terminal ready");
    Terminal::new(CrosstermBackend::new(out)).map_err(TerminalError::Setup)
}

/// Undoes [`setup_terminal`] and shows the cursor again.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    leave_screen(terminal.backend_mut()).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    debug!("terminal restored");
    Ok(())
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(
        out,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
}

/// Installs a panic hook that restores the terminal first.
///
/// The previous hook still runs afterwards, so the panic message is printed
/// on the main screen. Call this once, before [`setup_terminal`].
///
/// # Examples
///
/// ```no_run
/// habitflow_tui::terminal::install_panic_hook();
/// ```
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // best effort, we are already panicking
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
        error!(panic = %info, "dashboard panicked");
        previous(info);
    }));
}
