//! Habit lifecycle controller.
//!
//! [`Lifecycle`] owns the card registry and the notifier. Every user-level
//! operation on a habit goes through it: validation first, then the
//! mutation, then exactly one notification describing the outcome.
//! Rejected operations notify an error and mutate nothing; operations on
//! unknown cards and declined confirmations are silent.

use std::time::{Duration, Instant};

use habitflow_protocol::{
    CardDraft, CardRegistry, CategoryFilter, HabitCard, HabitError, HabitId, Result, SyncState,
    create_card, duplicate_card,
};
use tracing::{debug, info};

use crate::notification::{Notifier, Severity};

/// Delay between a confirmed delete and the card leaving the registry.
pub const COLLAPSE_DURATION: Duration = Duration::from_millis(300);

/// How long a freshly completed card stays highlighted.
pub const PULSE_DURATION: Duration = Duration::from_millis(500);

/// Outcome of a lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A card was inserted at the front.
    Created(HabitId),
    /// A card reached 100%.
    Completed(HabitId),
    /// A card's fields were overwritten.
    Edited(HabitId),
    /// A copy was inserted after its source.
    Duplicated {
        /// The original card.
        source: HabitId,
        /// The new card.
        copy: HabitId,
    },
    /// A confirmed delete is waiting for its collapse delay.
    RemovalScheduled(HabitId),
    /// A card left the registry.
    Removed(HabitId),
    /// Skip acknowledged, no data change.
    Skipped(HabitId),
    /// Reminder acknowledged, no data change.
    Reminded(HabitId),
    /// Nothing happened (repeated completion).
    Unchanged,
}

impl Change {
    /// Returns `true` if dashboard charts depend on this change.
    #[must_use]
    pub const fn affects_dashboard(self) -> bool {
        matches!(
            self,
            Self::Created(_)
                | Self::Completed(_)
                | Self::Edited(_)
                | Self::Duplicated { .. }
                | Self::Removed(_)
        )
    }
}

/// Builds the delete confirmation prompt for `title`.
#[must_use]
pub fn delete_prompt(title: &str) -> String {
    format!("Are you sure you want to delete \"{title}\"? This action cannot be undone.")
}

/// Owner of the habit cards and their state transitions.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
/// use habitflow_protocol::{CardDraft, CardRegistry, Category};
/// use habitflow_tui::lifecycle::{Change, Lifecycle};
///
/// let now = Instant::now();
/// let mut lifecycle = Lifecycle::new(CardRegistry::new());
/// let Change::Created(id) = lifecycle
///     .create(&CardDraft::new("Drink Water", Category::Health), now)
///     .unwrap()
/// else {
///     unreachable!()
/// };
///
/// lifecycle.complete(id, now).unwrap();
/// assert_eq!(lifecycle.complete(id, now).unwrap(), Change::Unchanged);
/// assert_eq!(lifecycle.notifier().emitted(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    registry: CardRegistry,
    notifier: Notifier,
    collapsing: Vec<(HabitId, Instant)>,
    pulse: Option<(HabitId, Instant)>,
}

impl Lifecycle {
    /// Creates a controller over `registry`.
    #[must_use]
    pub fn new(registry: CardRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Returns the registry.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Returns the notifier.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Returns the notifier for messages outside the habit lifecycle.
    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Changes the category filter.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        debug!(filter = filter.label(), "filter changed");
        self.registry.set_filter(filter);
    }

    /// Returns `true` while a confirmed delete of `id` is pending.
    #[must_use]
    pub fn is_collapsing(&self, id: HabitId) -> bool {
        self.collapsing.iter().any(|(c, _)| *c == id)
    }

    /// Returns the card currently highlighted after completion.
    #[must_use]
    pub fn pulsing(&self) -> Option<HabitId> {
        self.pulse.map(|(id, _)| id)
    }

    /// Returns a card that accepts actions.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::NotFound`] if the card is absent or collapsing.
    pub fn card(&self, id: HabitId) -> Result<&HabitCard> {
        if self.is_collapsing(id) {
            return Err(HabitError::NotFound(id));
        }
        self.registry.get(id).ok_or(HabitError::NotFound(id))
    }

    fn card_mut(&mut self, id: HabitId) -> Result<&mut HabitCard> {
        if self.is_collapsing(id) {
            return Err(HabitError::NotFound(id));
        }
        self.registry.get_mut(id).ok_or(HabitError::NotFound(id))
    }

    /// Creates a card from `draft` and inserts it at the front.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::Validation`] for a blank title, after
    /// notifying the user.
    pub fn create(&mut self, draft: &CardDraft, now: Instant) -> Result<Change> {
        let card = match create_card(draft) {
            Ok(card) => card,
            Err(err) => {
                self.notifier.notify(err.user_message(), Severity::Error, now);
                return Err(err.into());
            }
        };
        let id = card.id;
        info!(%id, title = %card.title, "habit created");
        self.registry.add_front(card);
        self.notifier
            .notify("New habit created successfully!", Severity::Success, now);
        Ok(Change::Created(id))
    }

    /// Marks a card as done for today.
    ///
    /// Completing a completed card returns [`Change::Unchanged`] without a
    /// notification.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::NotFound`] for unknown or collapsing cards.
    pub fn complete(&mut self, id: HabitId, now: Instant) -> Result<Change> {
        let card = self.card_mut(id)?;
        if !card.complete() {
            return Ok(Change::Unchanged);
        }
        let message = format!("\"{}\" completed! Great job!", card.title);
        debug!(%id, "habit completed");
        self.pulse = Some((id, now + PULSE_DURATION));
        self.notifier.notify(message, Severity::Success, now);
        Ok(Change::Completed(id))
    }

    /// Returns the confirmation prompt for deleting `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::NotFound`] for unknown or collapsing cards.
    pub fn request_delete(&self, id: HabitId) -> Result<String> {
        self.card(id).map(|card| delete_prompt(&card.title))
    }

    /// Applies the user's answer to a delete prompt.
    ///
    /// An accepted delete starts the collapse delay; the card leaves the
    /// registry on the first [`tick`](Self::tick) after it.
    ///
    /// # Errors
    ///
    /// - [`HabitError::NotFound`] for unknown or collapsing cards
    /// - [`HabitError::ConfirmationDeclined`] when `accepted` is false
    pub fn confirm_delete(&mut self, id: HabitId, accepted: bool, now: Instant) -> Result<Change> {
        self.card(id)?;
        if !accepted {
            return Err(HabitError::ConfirmationDeclined(id));
        }
        self.collapsing.push((id, now + COLLAPSE_DURATION));
        Ok(Change::RemovalScheduled(id))
    }

    /// Overwrites a card's editable fields.
    ///
    /// # Errors
    ///
    /// - [`HabitError::NotFound`] for unknown or collapsing cards
    /// - [`HabitError::Validation`] for a blank title, after notifying the
    ///   user; the card is unchanged
    pub fn edit(&mut self, id: HabitId, draft: &CardDraft, now: Instant) -> Result<Change> {
        let card = self.card_mut(id)?;
        if let Err(err) = draft.apply_to(card) {
            self.notifier.notify(err.user_message(), Severity::Error, now);
            return Err(err.into());
        }
        self.notifier
            .notify("Habit updated successfully!", Severity::Success, now);
        Ok(Change::Edited(id))
    }

    /// Inserts a zero-progress copy right after the card.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::NotFound`] for unknown or collapsing cards.
    pub fn duplicate(&mut self, id: HabitId, now: Instant) -> Result<Change> {
        let copy = duplicate_card(self.card(id)?);
        let copy_id = copy.id;
        self.registry.insert_after(id, copy);
        self.notifier
            .notify("Habit duplicated successfully!", Severity::Success, now);
        Ok(Change::Duplicated {
            source: id,
            copy: copy_id,
        })
    }

    /// Acknowledges skipping the card today.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::NotFound`] for unknown or collapsing cards.
    pub fn skip(&mut self, id: HabitId, now: Instant) -> Result<Change> {
        let message = format!("\"{}\" skipped for today", self.card(id)?.title);
        self.notifier.notify(message, Severity::Info, now);
        Ok(Change::Skipped(id))
    }

    /// Acknowledges a reminder request.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::NotFound`] for unknown or collapsing cards.
    pub fn remind(&mut self, id: HabitId, now: Instant) -> Result<Change> {
        let message = format!(
            "Reminder feature for \"{}\" coming soon!",
            self.card(id)?.title
        );
        self.notifier.notify(message, Severity::Info, now);
        Ok(Change::Reminded(id))
    }

    /// Records the persistence state of a card.
    ///
    /// Returns `false` if the card is gone.
    pub fn set_sync(&mut self, id: HabitId, sync: SyncState) -> bool {
        match self.registry.get_mut(id) {
            Some(card) => {
                card.sync = sync;
                true
            }
            None => false,
        }
    }

    /// Advances the collapse, pulse, and notification timers.
    ///
    /// Returns a [`Change::Removed`] for every card that left the registry.
    pub fn tick(&mut self, now: Instant) -> Vec<Change> {
        if self.pulse.is_some_and(|(_, until)| now >= until) {
            self.pulse = None;
        }

        let (due, pending): (Vec<_>, Vec<_>) = self
            .collapsing
            .drain(..)
            .partition(|(_, remove_at)| now >= *remove_at);
        self.collapsing = pending;

        let mut removed = Vec::new();
        for (id, _) in due {
            if self.registry.remove(id).is_some() {
                info!(%id, "habit deleted");
                self.notifier
                    .notify("Habit deleted successfully", Severity::Info, now);
                removed.push(Change::Removed(id));
            }
        }

        self.notifier.tick(now);
        removed
    }
}
