//! Card grid widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget, Wrap},
};

use super::habit_card::{CardLook, render_habit_card};
use crate::layout::card_slots;
use crate::lifecycle::Lifecycle;
use crate::theme::Palette;

/// Renders the visible cards of `lifecycle` into `area`.
///
/// `selected` is an index among the visible cards. When no card is
/// visible an empty-state hint is shown instead.
pub fn render_grid(
    lifecycle: &Lifecycle,
    selected: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
) {
    let registry = lifecycle.registry();
    if registry.visible_len() == 0 {
        let hint = if registry.is_empty() {
            "No habits yet. Press n to create one."
        } else {
            "No habits in this category."
        };
        let y = area.y + area.height / 2;
        Paragraph::new(hint)
            .style(
                Style::default()
                    .fg(palette.text_muted)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(Rect::new(area.x, y, area.width, 2.min(area.bottom() - y)), buf);
        return;
    }

    let pulsing = lifecycle.pulsing();
    let slots = card_slots(area, registry.visible_len(), selected);
    for (index, rect) in slots {
        let Some(card) = registry.visible_at(index) else {
            continue;
        };
        let look = CardLook {
            selected: selected == Some(index),
            pulsing: pulsing == Some(card.id),
            collapsing: lifecycle.is_collapsing(card.id),
        };
        render_habit_card(card, look, rect, buf, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use habitflow_config::ThemeMode;
    use habitflow_protocol::{CardRegistry, Category, CategoryFilter, dummy::dummy_registry};

    fn render(lifecycle: &Lifecycle, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        render_grid(
            lifecycle,
            Some(0),
            area,
            &mut buf,
            &Palette::for_mode(ThemeMode::Dark),
        );
        buffer_to_string(&buf)
    }

    #[test]
    fn renders_cards_in_rows() {
        let lifecycle = Lifecycle::new(dummy_registry());
        let text = render(&lifecycle, Rect::new(0, 0, 90, 14));

        let first_row: String = text.lines().take(7).collect::<Vec<_>>().join("\n");
        assert!(first_row.contains("Morning Run"));
        assert!(first_row.contains("Drink Water"));
        assert!(first_row.contains("Deep Work Session"));
        assert!(text.contains("Read 20 Pages"));
        assert!(text.contains("Call Family"));
    }

    #[test]
    fn empty_registry_hint() {
        let lifecycle = Lifecycle::new(CardRegistry::new());
        let text = render(&lifecycle, Rect::new(0, 0, 60, 7));
        assert!(text.contains("No habits yet"));
    }

    #[test]
    fn filtered_out_hint() {
        let mut lifecycle = Lifecycle::new(CardRegistry::with_cards(vec![
            habitflow_protocol::HabitCard::new("Run", Category::Health),
        ]));
        lifecycle.set_filter(CategoryFilter::Only(Category::Other));
        let text = render(&lifecycle, Rect::new(0, 0, 60, 7));
        assert!(text.contains("No habits in this category."));
        assert!(!text.contains("Run"));
    }
}
