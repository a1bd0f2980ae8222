//! Transient notifications.
//!
//! At most one notification is shown at a time. A new notification
//! replaces the current one together with its timers. Timers are plain
//! deadlines checked by [`Notifier::tick`], so callers pass the current
//! instant explicitly.

use std::time::{Duration, Instant};

/// How long a notification stays before it starts leaving.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Length of the exit transition after dismissal.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// A mutation succeeded.
    #[default]
    Success,
    /// Informational, no data changed.
    Info,
    /// A request was rejected.
    Error,
}

impl Severity {
    /// Returns the glyph shown before the message.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Info => "ℹ",
            Self::Error => "✖",
        }
    }
}

/// Lifecycle phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully visible until the deadline.
    Shown {
        /// When auto-dismissal starts.
        expires_at: Instant,
    },
    /// Playing the exit transition.
    Leaving {
        /// When the notification is removed.
        remove_at: Instant,
    },
}

/// A notification currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Sequence number, unique per notifier.
    pub id: u64,
    /// Text shown to the user.
    pub message: String,
    /// Severity, drives icon and color.
    pub severity: Severity,
    /// Current phase.
    pub phase: Phase,
}

impl Notification {
    /// Returns `true` while the exit transition plays.
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, Phase::Leaving { .. })
    }
}

/// The single notification slot.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use habitflow_tui::notification::{Notifier, Severity};
///
/// let start = Instant::now();
/// let mut notifier = Notifier::new();
/// notifier.notify("Saved", Severity::Success, start);
/// notifier.notify("Saved again", Severity::Info, start);
/// assert_eq!(notifier.current().map(|n| n.message.as_str()), Some("Saved again"));
///
/// notifier.tick(start + Duration::from_secs(4));
/// assert!(notifier.current().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    slot: Option<Notification>,
    emitted: u64,
}

impl Notifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing any current one.
    ///
    /// Returns the notification's sequence number.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        self.emitted += 1;
        self.slot = Some(Notification {
            id: self.emitted,
            message: message.into(),
            severity,
            phase: Phase::Shown {
                expires_at: now + DISPLAY_DURATION,
            },
        });
        self.emitted
    }

    /// Starts the exit transition early.
    ///
    /// The auto-dismiss deadline is dropped. Returns `false` when there is
    /// nothing to dismiss or the notification is already leaving.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        match &mut self.slot {
            Some(notification) if !notification.is_leaving() => {
                notification.phase = Phase::Leaving {
                    remove_at: now + EXIT_DURATION,
                };
                true
            }
            _ => false,
        }
    }

    /// Advances timers. Returns `true` if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(notification) = &mut self.slot else {
            return false;
        };
        let phase = notification.phase;
        match phase {
            Phase::Shown { expires_at } if now >= expires_at => {
                let remove_at = expires_at + EXIT_DURATION;
                if now >= remove_at {
                    self.slot = None;
                } else {
                    notification.phase = Phase::Leaving { remove_at };
                }
                true
            }
            Phase::Leaving { remove_at } if now >= remove_at => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the current notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.slot.as_ref()
    }

    /// Returns how many notifications were emitted so far.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}
