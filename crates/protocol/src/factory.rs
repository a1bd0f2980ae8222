//! Card construction from user input.
//!
//! All cards that originate from the user go through [`create_card`], which
//! is the single place titles are validated. Duplication reuses it so a
//! copy is built exactly like a fresh card.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::habit::{Category, Frequency, HabitCard, normalize_description};

/// Suffix appended to the title of a duplicated card.
pub const COPY_SUFFIX: &str = " (Copy)";

/// User-supplied fields for a new or edited habit.
///
/// # Examples
///
/// ```
/// use habitflow_protocol::{CardDraft, Category};
///
/// let draft = CardDraft::new("Drink Water", Category::Health).description("8 glasses");
/// assert_eq!(draft.title, "Drink Water");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardDraft {
    /// Requested title, validated on use.
    pub title: String,
    /// Free-text description; blank means none.
    pub description: String,
    /// Requested category.
    pub category: Category,
    /// Requested repeat frequency.
    pub frequency: Frequency,
}

impl CardDraft {
    /// Creates a draft with the given title and category.
    #[must_use]
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            category,
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Builds a draft from an existing card's fields.
    #[must_use]
    pub fn from_card(card: &HabitCard) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone().unwrap_or_default(),
            category: card.category,
            frequency: card.frequency,
        }
    }

    /// Returns the trimmed title, or an error if it is blank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] for empty or whitespace-only
    /// titles.
    pub fn validated_title(&self) -> Result<String, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(title.to_string())
    }

    /// Overwrites the editable fields of `card` with this draft.
    ///
    /// Progress and completion are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] without touching `card` if
    /// the title is blank.
    pub fn apply_to(&self, card: &mut HabitCard) -> Result<(), ValidationError> {
        let title = self.validated_title()?;
        card.title = title;
        card.description = normalize_description(self.description.clone());
        card.category = self.category;
        card.frequency = self.frequency;
        card.touch();
        Ok(())
    }
}

/// Builds a new card from a draft.
///
/// The card starts at 0% progress, not completed, and local only.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyTitle`] if the title is empty or only
/// whitespace.
///
/// # Examples
///
/// ```
/// use habitflow_protocol::{CardDraft, Category, ValidationError, create_card};
///
/// let card = create_card(&CardDraft::new("Drink Water", Category::Health)).unwrap();
/// assert_eq!(card.category.display_name(), "Health & Fitness");
///
/// let err = create_card(&CardDraft::new("   ", Category::Health)).unwrap_err();
/// assert_eq!(err, ValidationError::EmptyTitle);
/// ```
pub fn create_card(draft: &CardDraft) -> Result<HabitCard, ValidationError> {
    let title = draft.validated_title()?;
    Ok(HabitCard::new(title, draft.category)
        .with_description(draft.description.clone())
        .with_frequency(draft.frequency))
}

/// Builds a copy of `source` titled `"<title> (Copy)"` with zero progress.
///
/// The copy gets a fresh identifier.
#[must_use]
pub fn duplicate_card(source: &HabitCard) -> HabitCard {
    let mut draft = CardDraft::from_card(source);
    draft.title.push_str(COPY_SUFFIX);
    let mut copy = HabitCard::new(draft.title, draft.category).with_frequency(draft.frequency);
    copy.description = source.description.clone();
    copy
}
