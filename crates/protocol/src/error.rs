//! Error types for the habitflow-protocol crate.
//!
//! This module defines the errors that can occur when creating or mutating
//! habit cards. Validation failures are user-facing (they surface as an
//! error notification); the other variants are silent outcomes the caller
//! may ignore.

use thiserror::Error;

use crate::habit::HabitId;

/// Errors raised while validating user-supplied habit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The habit title was empty or contained only whitespace.
    #[error("invalid habit title: title cannot be empty")]
    EmptyTitle,
}

impl ValidationError {
    /// Returns the message shown to the user for this validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use habitflow_protocol::ValidationError;
    ///
    /// assert_eq!(ValidationError::EmptyTitle.user_message(), "Please enter a habit name.");
    /// ```
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::EmptyTitle => "Please enter a habit name.",
        }
    }
}

/// Errors that can occur during habit lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HabitError {
    /// The supplied fields failed validation. Nothing was mutated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced habit is not (or no longer) in the registry.
    #[error("habit not found: {0}")]
    NotFound(HabitId),

    /// The user declined a destructive action.
    #[error("deletion of habit {0} was not confirmed")]
    ConfirmationDeclined(HabitId),
}

/// A specialized Result type for habit operations.
pub type Result<T> = std::result::Result<T, HabitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = HabitError::from(ValidationError::EmptyTitle);
        assert_eq!(err.to_string(), "invalid habit title: title cannot be empty");

        let id = HabitId::new_v4();
        let err = HabitError::NotFound(id);
        assert!(err.to_string().contains("habit not found"));

        let err = HabitError::ConfirmationDeclined(id);
        assert!(err.to_string().contains("not confirmed"));
    }
}
