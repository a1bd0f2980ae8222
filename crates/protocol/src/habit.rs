//! Habit card types.
//!
//! This module defines the habit card itself together with the fixed
//! category table, the repeat frequency, and the persistence state that
//! every card carries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a habit card.
///
/// Uses UUID v4; identifiers are never reused within a session.
pub type HabitId = uuid::Uuid;

/// Progress value of a completed habit.
pub const COMPLETE_PERCENT: u8 = 100;

/// The fixed classification of a habit.
///
/// Drives the display label, the color token, and filter membership.
///
/// # Examples
///
/// ```
/// use habitflow_protocol::Category;
///
/// assert_eq!(Category::Health.display_name(), "Health & Fitness");
/// assert_eq!(Category::parse("Productivity"), Category::Productivity);
/// assert_eq!(Category::parse("Gardening"), Category::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Category {
    /// Health & Fitness.
    Health,
    /// Productivity.
    Productivity,
    /// Education.
    Education,
    /// Personal Development.
    Personal,
    /// Anything else.
    #[default]
    Other,
}

impl Category {
    /// Returns the human-readable label for this category.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Health => "Health & Fitness",
            Self::Productivity => "Productivity",
            Self::Education => "Education",
            Self::Personal => "Personal Development",
            Self::Other => "Other",
        }
    }

    /// Returns the wire value used by the persistence service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Productivity => "Productivity",
            Self::Education => "Education",
            Self::Personal => "Personal",
            Self::Other => "Other",
        }
    }

    /// Returns the color token for this category.
    #[must_use]
    pub const fn color(self) -> CategoryColor {
        match self {
            Self::Health => CategoryColor::Green,
            Self::Productivity => CategoryColor::Purple,
            Self::Education => CategoryColor::Orange,
            Self::Personal => CategoryColor::Red,
            Self::Other => CategoryColor::Gray,
        }
    }

    /// Parses a category value, falling back to [`Category::Other`].
    ///
    /// Unknown values never fail.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or(Self::Other)
    }

    /// Returns all categories in table order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Health,
            Self::Productivity,
            Self::Education,
            Self::Personal,
            Self::Other,
        ]
    }

    /// Returns the position of this category in table order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Health => 0,
            Self::Productivity => 1,
            Self::Education => 2,
            Self::Personal => 3,
            Self::Other => 4,
        }
    }

    /// Returns the next category in table order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Health => Self::Productivity,
            Self::Productivity => Self::Education,
            Self::Education => Self::Personal,
            Self::Personal => Self::Other,
            Self::Other => Self::Health,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Color token attached to a category.
///
/// Renderers map tokens onto concrete colors for the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryColor {
    /// Used by Health & Fitness.
    Green,
    /// Used by Productivity.
    Purple,
    /// Used by Education.
    Orange,
    /// Used by Personal Development.
    Red,
    /// Used by Other.
    Gray,
}

/// How often a habit is meant to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Every day.
    #[default]
    Daily,
    /// Monday to Friday.
    Weekdays,
    /// Saturday and Sunday.
    Weekends,
    /// Once a week.
    Weekly,
    /// User-defined schedule.
    Custom,
}

impl Frequency {
    /// Returns the display (and wire) value of this frequency.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekdays => "Weekdays",
            Self::Weekends => "Weekends",
            Self::Weekly => "Weekly",
            Self::Custom => "Custom",
        }
    }

    /// Returns the next frequency, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Daily => Self::Weekdays,
            Self::Weekdays => Self::Weekends,
            Self::Weekends => Self::Weekly,
            Self::Weekly => Self::Custom,
            Self::Custom => Self::Daily,
        }
    }
}

/// Whether a card has reached the persistence service.
///
/// Cards are inserted before the remote call returns, so a card can be
/// visible while its create request is still in flight or after it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    /// Never sent: demo data, duplicates, or persistence disabled.
    #[default]
    LocalOnly,
    /// Create request in flight.
    Pending,
    /// The service acknowledged the card.
    Synced,
    /// The create request failed; the card is kept but flagged.
    Failed,
}

impl SyncState {
    /// Returns `true` if the card is known not to be persisted.
    #[must_use]
    pub const fn is_stale(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// A single tracked habit.
///
/// `progress_percent` and `completed` are kept consistent: a card is
/// completed exactly when its progress is 100.
///
/// # Examples
///
/// ```
/// use habitflow_protocol::{Category, HabitCard};
///
/// let mut card = HabitCard::new("Drink Water", Category::Health);
/// assert_eq!(card.progress_percent(), 0);
/// assert!(card.complete());
/// assert!(card.completed());
/// assert!(!card.complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitCard {
    /// Unique identifier for this card.
    pub id: HabitId,
    /// Display title, never blank.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Classification of the habit.
    pub category: Category,
    /// Repeat schedule.
    pub frequency: Frequency,
    /// Persistence state of the card.
    pub sync: SyncState,
    progress_percent: u8,
    completed: bool,
    /// When this card was created.
    pub created_at: DateTime<Utc>,
    /// When this card was last modified.
    pub updated_at: DateTime<Utc>,
}

impl HabitCard {
    /// Creates a card with zero progress.
    ///
    /// No validation happens here; use
    /// [`create_card`](crate::factory::create_card) for user input.
    #[must_use]
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        let now = Utc::now();
        Self {
            id: HabitId::new_v4(),
            title: title.into(),
            description: None,
            category,
            frequency: Frequency::default(),
            sync: SyncState::default(),
            progress_percent: 0,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description, treating blank text as absent.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalize_description(description.into());
        self
    }

    /// Sets the repeat frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the progress, clamping to 100.
    #[must_use]
    pub fn with_progress(mut self, percent: u8) -> Self {
        self.set_progress(percent);
        self
    }

    /// Returns the progress percentage in `0..=100`.
    #[must_use]
    pub const fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    /// Returns `true` once the habit reached 100%.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Sets the progress percentage and derives the completed flag.
    ///
    /// Values above 100 are clamped.
    pub fn set_progress(&mut self, percent: u8) {
        self.progress_percent = percent.min(COMPLETE_PERCENT);
        self.completed = self.progress_percent == COMPLETE_PERCENT;
        self.updated_at = Utc::now();
    }

    /// Marks the habit as completed.
    ///
    /// Returns `false` (and changes nothing) if it was already completed.
    pub fn complete(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.set_progress(COMPLETE_PERCENT);
        true
    }

    /// Returns the description to display, with a placeholder when absent.
    #[must_use]
    pub fn description_or_placeholder(&self) -> &str {
        self.description.as_deref().unwrap_or("No description.")
    }

    /// Marks the card as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Trims a description, mapping blank text to `None`.
pub(crate) fn normalize_description(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_string())
    }
}
