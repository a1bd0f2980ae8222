//! Shared protocol types for the habitflow application.
//!
//! This crate defines the core types used across all habitflow components,
//! including habit cards, the card registry, messages, and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`habit`]: Habit identifiers, categories, and the `HabitCard` struct
//! - [`registry`]: The `CardRegistry` and its category filter
//! - [`factory`]: Validated card creation and duplication
//! - [`message`]: TUI event messages and card actions
//! - [`error`]: Error types for habit operations
//! - [`dummy`]: Demo data
//!
//! # Examples
//!
//! Creating and managing habits in a registry:
//!
//! ```
//! use habitflow_protocol::{CardDraft, CardRegistry, Category, create_card, duplicate_card};
//!
//! let mut registry = CardRegistry::new();
//!
//! let card = create_card(&CardDraft::new("Drink Water", Category::Health)).unwrap();
//! let id = card.id;
//! registry.add_front(card);
//!
//! if let Some(card) = registry.get_mut(id) {
//!     card.complete();
//! }
//!
//! let copy = duplicate_card(registry.get(id).unwrap());
//! registry.insert_after(id, copy);
//! assert_eq!(registry.len(), 2);
//! ```

pub mod dummy;
pub mod error;
pub mod factory;
pub mod habit;
pub mod message;
pub mod registry;

// Re-export primary types at crate root for convenience
pub use error::{HabitError, Result, ValidationError};
pub use factory::{COPY_SUFFIX, CardDraft, create_card, duplicate_card};
pub use habit::{Category, CategoryColor, Frequency, HabitCard, HabitId, SyncState};
pub use message::{CardAction, Message};
pub use registry::{CardRegistry, CategoryFilter};
