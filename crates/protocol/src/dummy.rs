//! Demo data for first launch and tests.
//!
//! This module provides a sample set of habit cards and a past completion
//! history so the dashboard has something to show before the user adds
//! their own habits.
//!
//! # Examples
//!
//! ```
//! use habitflow_protocol::dummy::{dummy_registry, sample_completion_history};
//!
//! let registry = dummy_registry();
//! assert_eq!(registry.len(), 6);
//!
//! let history = sample_completion_history(29);
//! assert_eq!(history.len(), 29);
//! assert!(history.iter().all(|v| (50..=95).contains(v)));
//! ```

use crate::habit::{Category, Frequency, HabitCard};
use crate::registry::CardRegistry;

/// Lower bound of the sample completion history.
const HISTORY_MIN: i32 = 50;

/// Upper bound of the sample completion history.
const HISTORY_MAX: i32 = 95;

/// Generates the demo habit cards, in display order.
///
/// One card per category at least, with a mix of progress values and one
/// card already completed.
#[must_use]
pub fn dummy_cards() -> Vec<HabitCard> {
    vec![
        HabitCard::new("Morning Run", Category::Health)
            .with_description("30 minutes around the park")
            .with_progress(60),
        HabitCard::new("Drink Water", Category::Health)
            .with_description("8 glasses throughout the day")
            .with_progress(100),
        HabitCard::new("Deep Work Session", Category::Productivity)
            .with_description("2 hours without notifications")
            .with_frequency(Frequency::Weekdays)
            .with_progress(40),
        HabitCard::new("Read 20 Pages", Category::Education)
            .with_description("Non-fiction before bed")
            .with_progress(75),
        HabitCard::new("Journal", Category::Personal).with_frequency(Frequency::Daily),
        HabitCard::new("Call Family", Category::Other)
            .with_description("Catch up with parents")
            .with_frequency(Frequency::Weekly)
            .with_progress(20),
    ]
}

/// Generates a registry holding [`dummy_cards`].
#[must_use]
pub fn dummy_registry() -> CardRegistry {
    CardRegistry::with_cards(dummy_cards())
}

/// Generates `days` of past daily completion rates, oldest first.
///
/// The series is a bounded random walk between 50 and 95 percent. It is
/// deterministic so screenshots and tests stay stable.
#[must_use]
pub fn sample_completion_history(days: usize) -> Vec<u8> {
    let mut seed: u32 = 0x2545_f491;
    let mut value: i32 = 70;
    let mut history = Vec::with_capacity(days);
    for _ in 0..days {
        // xorshift32
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let step = i32::try_from(seed % 7).unwrap_or(3) - 3;
        value = (value + step).clamp(HISTORY_MIN, HISTORY_MAX);
        history.push(u8::try_from(value).unwrap_or(u8::MAX));
    }
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_cards_cover_every_category() {
        let registry = dummy_registry();
        for (category, count) in registry.category_counts() {
            assert!(count > 0, "no demo card for {category}");
        }
    }

    #[test]
    fn dummy_cards_have_one_completed() {
        assert_eq!(dummy_registry().completed_count(), 1);
    }

    #[test]
    fn history_is_deterministic_and_bounded() {
        let a = sample_completion_history(29);
        let b = sample_completion_history(29);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (50..=95).contains(v)));
    }

    #[test]
    fn history_steps_are_small() {
        let history = sample_completion_history(60);
        for pair in history.windows(2) {
            assert!(pair[0].abs_diff(pair[1]) <= 3);
        }
    }
}
