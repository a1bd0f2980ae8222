//! Category filter chips.

use habitflow_protocol::CategoryFilter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::layout::{ADVANCED_FILTER_LABEL, advanced_filter_chip, chip_label, filter_chips};
use crate::theme::Palette;

/// Renders the filter chips with `active` highlighted.
pub fn render_filter_bar(active: CategoryFilter, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let chips = filter_chips(area);
    let chips_end = chips.last().map_or(area.x, |(_, rect)| rect.right());

    for (filter, rect) in chips {
        let style = if filter == active {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(palette.text_muted)
        };
        buf.set_stringn(
            rect.x,
            rect.y,
            format!(" {} ", chip_label(filter)),
            usize::from(rect.width),
            style,
        );
    }

    let advanced = advanced_filter_chip(area);
    if advanced.x > chips_end {
        buf.set_stringn(
            advanced.x,
            advanced.y,
            format!(" {ADVANCED_FILTER_LABEL} "),
            usize::from(advanced.width),
            Style::default().fg(palette.text_muted),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use habitflow_config::ThemeMode;
    use habitflow_protocol::Category;

    #[test]
    fn shows_all_chips() {
        let area = Rect::new(0, 0, 90, 1);
        let mut buf = Buffer::empty(area);
        render_filter_bar(
            CategoryFilter::All,
            area,
            &mut buf,
            &Palette::for_mode(ThemeMode::Dark),
        );
        let text = buffer_to_string(&buf);
        assert!(text.contains("All   Health   Productivity   Education   Personal   Other"));
        assert!(text.trim_end().ends_with("⚙ Filter"));
    }

    #[test]
    fn active_chip_is_reversed() {
        let area = Rect::new(0, 0, 90, 1);
        let mut buf = Buffer::empty(area);
        render_filter_bar(
            CategoryFilter::Only(Category::Education),
            area,
            &mut buf,
            &Palette::for_mode(ThemeMode::Dark),
        );

        let chips = filter_chips(area);
        let (_, education) = chips[Category::Education.index() + 1];
        let (_, all) = chips[0];
        assert!(buf[(education.x, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(all.x, 0)].modifier.contains(Modifier::REVERSED));
    }
}
