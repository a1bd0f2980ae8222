//! Card options menu and its placement.
//!
//! [`place_menu`] is a pure function deciding where a menu opens relative
//! to the element that triggered it. [`MenuSlot`] holds the single menu
//! that may be open at any time.

use habitflow_protocol::{CardAction, HabitId};
use ratatui::layout::{Position as CellPosition, Rect};

/// An axis-aligned box, in the same units as the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Bounds {
    /// Creates a box.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge.
    #[must_use]
    pub const fn top(self) -> i32 {
        self.y
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// Right edge (exclusive).
    #[must_use]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::new(
            i32::from(rect.x),
            i32::from(rect.y),
            i32::from(rect.width),
            i32::from(rect.height),
        )
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Where the menu's top-left corner goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Distance from the viewport top.
    pub top: i32,
    /// Distance from the viewport left.
    pub left: i32,
}

/// Spacing rules for [`place_menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    /// Gap between the anchor and the menu.
    pub gap: i32,
    /// Minimum distance from the viewport edges.
    pub margin: i32,
}

impl Spacing {
    /// Pixel spacing: 5 gap, 10 margin.
    pub const DEFAULT: Self = Self { gap: 5, margin: 10 };

    /// Cell spacing used in the terminal.
    pub const TERMINAL: Self = Self { gap: 0, margin: 1 };
}

impl Default for Spacing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Computes the menu position for an anchor.
///
/// The menu opens below the anchor, right-aligned with it. It is shifted
/// horizontally to stay `margin` away from the viewport edges, flipped
/// above the anchor when it would overflow the bottom, and finally kept at
/// least `margin` from the top.
///
/// # Examples
///
/// ```
/// use habitflow_tui::menu::{Bounds, Size, Spacing, place_menu};
///
/// let anchor = Bounds::new(100, 100, 20, 20);
/// let pos = place_menu(anchor, Size::new(160, 200), Size::new(1024, 768), Spacing::DEFAULT);
/// // Would be at left = -40, clamped to the margin.
/// assert_eq!((pos.top, pos.left), (125, 10));
/// ```
#[must_use]
pub fn place_menu(anchor: Bounds, menu: Size, viewport: Size, spacing: Spacing) -> Position {
    let mut top = anchor.bottom() + spacing.gap;
    let mut left = anchor.right() - menu.width;

    if left < spacing.margin {
        left = spacing.margin;
    } else if left + menu.width > viewport.width - spacing.margin {
        left = viewport.width - menu.width - spacing.margin;
    }

    if top + menu.height > viewport.height - spacing.margin {
        top = anchor.top() - menu.height - spacing.gap;
    }
    if top < spacing.margin {
        top = spacing.margin;
    }

    Position { top, left }
}

/// Entries of the card options menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Open the edit form.
    Edit,
    /// Skip today.
    Skip,
    /// Duplicate the card.
    Duplicate,
    /// Reminder placeholder.
    Remind,
    /// Delete, after confirmation.
    Delete,
}

impl MenuAction {
    /// Returns all entries in display order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Edit,
            Self::Skip,
            Self::Duplicate,
            Self::Remind,
            Self::Delete,
        ]
    }

    /// Returns the entry label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit Habit",
            Self::Skip => "Skip Today",
            Self::Duplicate => "Duplicate",
            Self::Remind => "Add Reminder",
            Self::Delete => "Delete",
        }
    }

    /// Returns the glyph shown before the label.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Edit => "✎",
            Self::Skip => "⏭",
            Self::Duplicate => "⧉",
            Self::Remind => "⏰",
            Self::Delete => "🗑",
        }
    }

    /// Returns `true` for the entry styled as dangerous.
    #[must_use]
    pub const fn is_danger(self) -> bool {
        matches!(self, Self::Delete)
    }

    /// Returns the card action this entry dispatches.
    #[must_use]
    pub const fn card_action(self) -> CardAction {
        match self {
            Self::Edit => CardAction::Edit,
            Self::Skip => CardAction::Skip,
            Self::Duplicate => CardAction::Duplicate,
            Self::Remind => CardAction::Remind,
            Self::Delete => CardAction::Delete,
        }
    }
}

/// Rendered size of the menu in cells (borders included).
#[must_use]
pub fn menu_size() -> Size {
    let widest = MenuAction::all()
        .iter()
        .map(|a| a.label().chars().count())
        .max()
        .unwrap_or(0);
    // border + padding + icon + space + label + padding + border
    let width = i32::try_from(widest).unwrap_or(i32::MAX) + 7;
    let height = i32::try_from(MenuAction::all().len()).unwrap_or(i32::MAX) + 2;
    Size::new(width, height)
}

/// The open menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveMenu {
    /// Card the menu acts on.
    pub card: HabitId,
    /// Screen area of the element that opened it.
    pub anchor: Rect,
    /// Screen area of the menu.
    pub area: Rect,
    /// Highlighted entry index.
    pub highlighted: usize,
}

impl ActiveMenu {
    /// Returns the highlighted entry.
    #[must_use]
    pub fn highlighted_action(&self) -> MenuAction {
        MenuAction::all()[self.highlighted.min(MenuAction::all().len() - 1)]
    }

    /// Returns the entry under a screen cell, if any.
    #[must_use]
    pub fn action_at(&self, column: u16, row: u16) -> Option<MenuAction> {
        let inner = Rect {
            x: self.area.x + 1,
            y: self.area.y + 1,
            width: self.area.width.saturating_sub(2),
            height: self.area.height.saturating_sub(2),
        };
        if !inner.contains(CellPosition::new(column, row)) {
            return None;
        }
        MenuAction::all().get(usize::from(row - inner.y)).copied()
    }

    /// Returns `true` if the cell lies inside the menu.
    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(CellPosition::new(column, row))
    }
}

/// Holder of the at-most-one open menu.
///
/// # Examples
///
/// ```
/// use habitflow_protocol::HabitId;
/// use habitflow_tui::menu::MenuSlot;
/// use ratatui::layout::Rect;
///
/// let viewport = Rect::new(0, 0, 80, 24);
/// let mut slot = MenuSlot::default();
/// slot.open(HabitId::new_v4(), Rect::new(10, 5, 3, 1), viewport);
/// let b = HabitId::new_v4();
/// slot.open(b, Rect::new(40, 5, 3, 1), viewport);
/// assert_eq!(slot.active().map(|m| m.card), Some(b));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuSlot {
    active: Option<ActiveMenu>,
}

impl MenuSlot {
    /// Opens a menu for `card`, closing any open menu first.
    pub fn open(&mut self, card: HabitId, anchor: Rect, viewport: Rect) -> ActiveMenu {
        self.close();
        let size = menu_size();
        let position = place_menu(
            Bounds::from(anchor),
            size,
            Size::new(i32::from(viewport.width), i32::from(viewport.height)),
            Spacing::TERMINAL,
        );
        let area = clip(
            Rect {
                x: to_cell(position.left),
                y: to_cell(position.top),
                width: to_cell(size.width),
                height: to_cell(size.height),
            },
            viewport,
        );
        let menu = ActiveMenu {
            card,
            anchor,
            area,
            highlighted: 0,
        };
        self.active = Some(menu);
        menu
    }

    /// Closes the menu. Returns it if one was open.
    pub fn close(&mut self) -> Option<ActiveMenu> {
        self.active.take()
    }

    /// Returns the open menu.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveMenu> {
        self.active.as_ref()
    }

    /// Returns `true` if a menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Moves the highlight, wrapping around.
    pub fn move_highlight(&mut self, delta: i32) {
        if let Some(menu) = &mut self.active {
            let len = MenuAction::all().len();
            let step = if delta >= 0 { 1 } else { len - 1 };
            menu.highlighted = (menu.highlighted + step) % len;
        }
    }

    /// Closes the menu for a card that no longer exists.
    pub fn close_for(&mut self, card: HabitId) {
        if self.active.is_some_and(|m| m.card == card) {
            self.active = None;
        }
    }
}

fn to_cell(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

fn clip(area: Rect, viewport: Rect) -> Rect {
    area.intersection(viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEWPORT: Size = Size::new(1024, 768);

    #[test]
    fn default_opens_below_right_aligned() {
        let anchor = Bounds::new(400, 100, 30, 20);
        let pos = place_menu(anchor, Size::new(160, 200), VIEWPORT, Spacing::DEFAULT);
        assert_eq!(pos, Position { top: 125, left: 270 });
    }

    #[test]
    fn clamps_to_left_margin() {
        let anchor = Bounds::new(0, 100, 30, 20);
        let pos = place_menu(anchor, Size::new(160, 200), VIEWPORT, Spacing::DEFAULT);
        assert_eq!(pos.left, 10);
    }

    #[test]
    fn clamps_to_right_margin() {
        let anchor = Bounds::new(1000, 100, 100, 20);
        let pos = place_menu(anchor, Size::new(160, 200), VIEWPORT, Spacing::DEFAULT);
        assert_eq!(pos.left, 1024 - 160 - 10);
    }

    #[test]
    fn flips_above_near_bottom() {
        let anchor = Bounds::new(400, 700, 30, 20);
        let pos = place_menu(anchor, Size::new(160, 200), VIEWPORT, Spacing::DEFAULT);
        assert_eq!(pos.top, 700 - 200 - 5);
    }

    #[test]
    fn flipped_then_clamped_to_top_margin() {
        let anchor = Bounds::new(400, 50, 30, 20);
        let pos = place_menu(anchor, Size::new(160, 740), VIEWPORT, Spacing::DEFAULT);
        assert_eq!(pos.top, 10);
    }

    #[test]
    fn terminal_spacing() {
        let anchor = Bounds::new(30, 5, 3, 1);
        let size = menu_size();
        let pos = place_menu(anchor, size, Size::new(80, 24), Spacing::TERMINAL);
        assert_eq!(pos.top, 6);
        assert_eq!(pos.left, 33 - size.width);
    }

    #[test]
    fn menu_labels_in_order() {
        let labels: Vec<_> = MenuAction::all().iter().map(|a| a.label()).collect();
        insta::assert_snapshot!(
            labels.join(" | "),
            @"Edit Habit | Skip Today | Duplicate | Add Reminder | Delete"
        );
        assert!(MenuAction::Delete.is_danger());
        assert!(!MenuAction::Edit.is_danger());
    }

    #[test]
    fn opening_second_menu_replaces_first() {
        let viewport = Rect::new(0, 0, 80, 24);
        let mut slot = MenuSlot::default();
        let a = HabitId::new_v4();
        let b = HabitId::new_v4();

        slot.open(a, Rect::new(10, 5, 3, 1), viewport);
        slot.open(b, Rect::new(40, 5, 3, 1), viewport);

        assert_eq!(slot.active().map(|m| m.card), Some(b));
        assert!(slot.close().is_some());
        assert!(!slot.is_open());
    }

    #[test]
    fn action_at_maps_rows() {
        let viewport = Rect::new(0, 0, 80, 24);
        let mut slot = MenuSlot::default();
        let menu = slot.open(HabitId::new_v4(), Rect::new(40, 5, 3, 1), viewport);

        let column = menu.area.x + 2;
        assert_eq!(menu.action_at(column, menu.area.y), None);
        assert_eq!(menu.action_at(column, menu.area.y + 1), Some(MenuAction::Edit));
        assert_eq!(menu.action_at(column, menu.area.y + 5), Some(MenuAction::Delete));
        assert!(menu.contains(column, menu.area.y));
        assert!(!menu.contains(0, 0));
    }

    #[test]
    fn highlight_wraps() {
        let mut slot = MenuSlot::default();
        slot.open(HabitId::new_v4(), Rect::new(40, 5, 3, 1), Rect::new(0, 0, 80, 24));
        slot.move_highlight(-1);
        assert_eq!(
            slot.active().map(ActiveMenu::highlighted_action),
            Some(MenuAction::Delete)
        );
        slot.move_highlight(1);
        assert_eq!(
            slot.active().map(ActiveMenu::highlighted_action),
            Some(MenuAction::Edit)
        );
    }

    #[test]
    fn close_for_other_card_keeps_menu() {
        let mut slot = MenuSlot::default();
        let card = HabitId::new_v4();
        slot.open(card, Rect::new(40, 5, 3, 1), Rect::new(0, 0, 80, 24));
        slot.close_for(HabitId::new_v4());
        assert!(slot.is_open());
        slot.close_for(card);
        assert!(!slot.is_open());
    }

    proptest! {
        #[test]
        fn stays_within_margins_when_it_fits(
            ax in 0i32..1024,
            ay in 0i32..768,
            aw in 1i32..60,
            ah in 1i32..40,
            mw in 20i32..400,
            mh in 20i32..300,
        ) {
            let anchor = Bounds::new(ax, ay, aw, ah);
            let pos = place_menu(anchor, Size::new(mw, mh), VIEWPORT, Spacing::DEFAULT);
            prop_assert!(pos.left >= 10);
            prop_assert!(pos.left + mw <= 1024 - 10);
            prop_assert!(pos.top >= 10);
        }
    }
}
