//! Habit form state.
//!
//! This module provides the state behind the create and edit modals:
//! field focus, text editing with a cursor, and the selector fields.

use habitflow_protocol::{CardDraft, Category, Frequency, HabitCard, HabitId};

/// Fields of the habit form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Habit name.
    #[default]
    Title,
    /// Free-text description.
    Description,
    /// Category selector.
    Category,
    /// Frequency selector.
    Frequency,
}

impl FormField {
    /// Returns the next field (wrapping around).
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Frequency,
            Self::Frequency => Self::Title,
        }
    }

    /// Returns the previous field (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Frequency,
            Self::Description => Self::Title,
            Self::Category => Self::Description,
            Self::Frequency => Self::Category,
        }
    }

    /// Returns the label shown next to this field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Habit Name",
            Self::Description => "Description",
            Self::Category => "Category",
            Self::Frequency => "Frequency",
        }
    }

    /// Returns all fields in order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Title,
            Self::Description,
            Self::Category,
            Self::Frequency,
        ]
    }

    /// Returns `true` for fields edited by typing.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Title | Self::Description)
    }
}

/// A single-line text input with a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    value: String,
    /// Byte offset of the cursor within `value`.
    cursor: usize,
}

impl TextInput {
    /// Creates an input holding `value`, cursor at the end.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position in characters.
    #[must_use]
    pub fn cursor_chars(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if let Some(ch) = self.value[..self.cursor].chars().next_back() {
            self.cursor -= ch.len_utf8();
            self.value.remove(self.cursor);
        }
    }
}

/// Whether the form creates a new habit or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting inserts a new card.
    Create,
    /// Submitting overwrites the given card.
    Edit(HabitId),
}

/// State of the create/edit habit modal.
///
/// # Examples
///
/// ```
/// use habitflow_tui::form::HabitForm;
///
/// let mut form = HabitForm::create();
/// for ch in "Stretch".chars() {
///     form.input_char(ch);
/// }
/// assert_eq!(form.to_draft().title, "Stretch");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitForm {
    mode: FormMode,
    focus: FormField,
    title: TextInput,
    description: TextInput,
    category: Category,
    frequency: Frequency,
}

impl HabitForm {
    /// Creates an empty form for a new habit.
    #[must_use]
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            focus: FormField::Title,
            title: TextInput::default(),
            description: TextInput::default(),
            category: Category::Health,
            frequency: Frequency::Daily,
        }
    }

    /// Creates a form pre-filled from `card`.
    #[must_use]
    pub fn edit(card: &HabitCard) -> Self {
        Self {
            mode: FormMode::Edit(card.id),
            focus: FormField::Title,
            title: TextInput::new(card.title.clone()),
            description: TextInput::new(card.description.clone().unwrap_or_default()),
            category: card.category,
            frequency: card.frequency,
        }
    }

    /// Returns the form mode.
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Returns the modal heading.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New Habit",
            FormMode::Edit(_) => "Edit Habit",
        }
    }

    /// Returns the focused field.
    #[must_use]
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Returns the title input.
    #[must_use]
    pub fn title(&self) -> &TextInput {
        &self.title
    }

    /// Returns the description input.
    #[must_use]
    pub fn description(&self) -> &TextInput {
        &self.description
    }

    /// Returns the selected category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the selected frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Moves focus to the next field.
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types a character into the focused text field.
    ///
    /// Ignored on selector fields.
    pub fn input_char(&mut self, ch: char) {
        match self.focus {
            FormField::Title => self.title.insert_char(ch),
            FormField::Description => self.description.insert_char(ch),
            FormField::Category | FormField::Frequency => {}
        }
    }

    /// Deletes the character before the cursor in the focused text field.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => self.title.backspace(),
            FormField::Description => self.description.backspace(),
            FormField::Category | FormField::Frequency => {}
        }
    }

    /// Cycles the focused selector forward (`delta > 0`) or backward.
    pub fn cycle(&mut self, delta: i32) {
        let steps = if delta >= 0 { 1 } else { 4 };
        for _ in 0..steps {
            match self.focus {
                FormField::Category => self.category = self.category.next(),
                FormField::Frequency => self.frequency = self.frequency.next(),
                FormField::Title | FormField::Description => return,
            }
        }
    }

    /// Returns the draft the form would submit.
    #[must_use]
    pub fn to_draft(&self) -> CardDraft {
        CardDraft::new(self.title.value(), self.category)
            .description(self.description.value())
            .frequency(self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_navigation_wraps() {
        assert_eq!(FormField::Frequency.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Frequency);
        for field in FormField::all() {
            assert_eq!(field.next().prev(), *field);
        }
    }

    #[test]
    fn text_input_editing() {
        let mut input = TextInput::default();
        input.insert_char('h');
        input.insert_char('é');
        input.insert_char('y');
        assert_eq!(input.value(), "héy");
        assert_eq!(input.cursor_chars(), 3);

        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "h");

        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = HabitForm::create();
        form.input_char('a');
        form.next_field();
        form.input_char('b');
        form.next_field();
        form.input_char('c');

        assert_eq!(form.title().value(), "a");
        assert_eq!(form.description().value(), "b");
        assert_eq!(form.focus(), FormField::Category);
    }

    #[test]
    fn cycle_selectors() {
        let mut form = HabitForm::create();
        form.next_field();
        form.next_field();
        form.cycle(1);
        assert_eq!(form.category(), Category::Productivity);
        form.cycle(-1);
        assert_eq!(form.category(), Category::Health);
        form.cycle(-1);
        assert_eq!(form.category(), Category::Other);

        form.next_field();
        form.cycle(1);
        assert_eq!(form.frequency(), Frequency::Weekdays);
    }

    #[test]
    fn cycle_ignored_on_text_fields() {
        let mut form = HabitForm::create();
        form.cycle(1);
        assert_eq!(form.category(), Category::Health);
    }

    #[test]
    fn edit_prefills_from_card() {
        let card = HabitCard::new("Run", Category::Personal).with_description("5km");
        let form = HabitForm::edit(&card);
        assert_eq!(form.mode(), FormMode::Edit(card.id));
        assert_eq!(form.heading(), "Edit Habit");
        assert_eq!(form.title().value(), "Run");
        assert_eq!(form.description().value(), "5km");
        assert_eq!(form.category(), Category::Personal);

        let draft = form.to_draft();
        assert_eq!(draft.title, "Run");
        assert_eq!(draft.description, "5km");
    }
}
