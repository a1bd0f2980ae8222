//! Wire types for the habit service.

use habitflow_protocol::HabitCard;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/habits`.
///
/// # Examples
///
/// ```
/// use habitflow_client::NewHabit;
/// use habitflow_protocol::{Category, HabitCard};
///
/// let card = HabitCard::new("Drink Water", Category::Health).with_description("8 glasses");
/// let body = NewHabit::from_card(&card);
/// assert_eq!(body.category, "Health");
/// assert_eq!(body.frequency, "Daily");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHabit {
    /// Habit title.
    pub name: String,
    /// Description, empty when absent.
    pub description: String,
    /// Category wire value.
    pub category: String,
    /// Frequency wire value.
    pub frequency: String,
}

impl NewHabit {
    /// Builds the request body for a card.
    #[must_use]
    pub fn from_card(card: &HabitCard) -> Self {
        Self {
            name: card.title.clone(),
            description: card.description.clone().unwrap_or_default(),
            category: card.category.as_str().to_string(),
            frequency: card.frequency.display_name().to_string(),
        }
    }
}

/// Response of `POST /api/habits`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateHabitResponse {
    /// Whether the service stored the habit.
    pub success: bool,
    /// Optional explanation on failure.
    #[serde(default)]
    pub message: Option<String>,
}
