//! The card registry and category filter.
//!
//! [`CardRegistry`] exclusively owns every [`HabitCard`] in the session, in
//! display order (newest first). Visibility under the active
//! [`CategoryFilter`] is never stored on a card: it is computed on read.

use serde::{Deserialize, Serialize};

use crate::habit::{Category, HabitCard, HabitId};

/// The active category filter.
///
/// # Examples
///
/// ```
/// use habitflow_protocol::{Category, CategoryFilter};
///
/// assert!(CategoryFilter::All.matches(Category::Health));
/// assert!(CategoryFilter::Only(Category::Health).matches(Category::Health));
/// assert!(!CategoryFilter::Only(Category::Health).matches(Category::Other));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Every card is visible.
    #[default]
    All,
    /// Only cards of this category are visible.
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` if a card of `category` is visible under this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Returns the label shown on the filter chip.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.display_name(),
        }
    }

    /// Returns every selectable filter, `All` first.
    #[must_use]
    pub fn all() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::all().into_iter().map(Self::Only))
            .collect()
    }

    /// Returns the chip index of this filter (`All` is 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Only(category) => category.index() + 1,
        }
    }

    /// Returns the filter at the given chip index, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Returns the next filter, wrapping back to `All`.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Self::All)
    }
}

/// Owner of all habit cards, kept in display order.
///
/// # Examples
///
/// ```
/// use habitflow_protocol::{CardRegistry, Category, CategoryFilter, HabitCard};
///
/// let mut registry = CardRegistry::new();
/// registry.add_front(HabitCard::new("Run", Category::Health));
/// registry.add_front(HabitCard::new("Read", Category::Education));
///
/// registry.set_filter(CategoryFilter::Only(Category::Health));
/// let visible: Vec<_> = registry.visible().map(|c| c.title.as_str()).collect();
/// assert_eq!(visible, ["Run"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRegistry {
    cards: Vec<HabitCard>,
    filter: CategoryFilter,
}

impl CardRegistry {
    /// Creates an empty registry with the `All` filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `cards` in the given order.
    #[must_use]
    pub fn with_cards(cards: Vec<HabitCard>) -> Self {
        Self {
            cards,
            filter: CategoryFilter::All,
        }
    }

    /// Inserts a card at the front (newest first).
    pub fn add_front(&mut self, card: HabitCard) {
        self.cards.insert(0, card);
    }

    /// Inserts a card immediately after `source`.
    ///
    /// Falls back to the front when `source` is not in the registry.
    pub fn insert_after(&mut self, source: HabitId, card: HabitCard) {
        match self.position(source) {
            Some(index) => self.cards.insert(index + 1, card),
            None => self.add_front(card),
        }
    }

    /// Removes a card by identifier.
    ///
    /// Removing an absent card is a no-op returning `None`.
    pub fn remove(&mut self, id: HabitId) -> Option<HabitCard> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    /// Returns the card with the given identifier.
    #[must_use]
    pub fn get(&self, id: HabitId) -> Option<&HabitCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Returns a mutable reference to the card with the given identifier.
    pub fn get_mut(&mut self, id: HabitId) -> Option<&mut HabitCard> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Returns the display index of the card, ignoring the filter.
    #[must_use]
    pub fn position(&self, id: HabitId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Returns `true` if the registry holds the card.
    #[must_use]
    pub fn contains(&self, id: HabitId) -> bool {
        self.position(id).is_some()
    }

    /// Returns all cards in display order, ignoring the filter.
    pub fn iter(&self) -> impl Iterator<Item = &HabitCard> {
        self.cards.iter()
    }

    /// Returns the number of cards, ignoring the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the registry holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Sets the active filter.
    ///
    /// Visibility follows immediately; nothing is cached.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Returns `true` if the card is visible under the active filter.
    #[must_use]
    pub fn is_visible(&self, card: &HabitCard) -> bool {
        self.filter.matches(card.category)
    }

    /// Returns the visible cards in display order.
    pub fn visible(&self) -> impl Iterator<Item = &HabitCard> {
        let filter = self.filter;
        self.cards.iter().filter(move |c| filter.matches(c.category))
    }

    /// Returns the number of visible cards.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible().count()
    }

    /// Returns the visible card at `index`.
    #[must_use]
    pub fn visible_at(&self, index: usize) -> Option<&HabitCard> {
        self.visible().nth(index)
    }

    /// Returns the index of the card among visible cards.
    #[must_use]
    pub fn visible_index(&self, id: HabitId) -> Option<usize> {
        self.visible().position(|c| c.id == id)
    }

    /// Returns the number of completed cards, ignoring the filter.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.cards.iter().filter(|c| c.completed()).count()
    }

    /// Returns the share of completed cards as a whole percentage.
    ///
    /// An empty registry has a rate of 0.
    #[must_use]
    pub fn completion_rate(&self) -> u8 {
        if self.cards.is_empty() {
            return 0;
        }
        let rate = (self.completed_count() * 100 + self.cards.len() / 2) / self.cards.len();
        u8::try_from(rate).unwrap_or(100)
    }

    /// Returns the number of cards per category, in table order.
    #[must_use]
    pub fn category_counts(&self) -> [(Category, usize); 5] {
        Category::all().map(|category| {
            let count = self.cards.iter().filter(|c| c.category == category).count();
            (category, count)
        })
    }
}
