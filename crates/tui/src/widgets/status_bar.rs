//! Footer with key hints for the current input mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::event::InputMode;
use crate::theme::Palette;

fn hints(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Normal => &[
            ("←↑↓→", "move"),
            ("Enter", "complete"),
            ("n", "new"),
            ("s", "stats"),
            ("m", "menu"),
            ("f", "filter"),
            ("t", "theme"),
            ("?", "help"),
        ],
        InputMode::Menu => &[("↑↓", "choose"), ("Enter", "run"), ("Esc", "close")],
        InputMode::Form => &[
            ("Tab", "next field"),
            ("←→", "change"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ],
        InputMode::Confirm => &[("y", "delete"), ("n", "cancel")],
    }
}

/// Renders the key hints of `mode` on a single row.
pub fn render_status_bar(mode: InputMode, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let key_style = Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(palette.text_muted);

    let mut spans = Vec::new();
    for (i, (key, action)) in hints(mode).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }
    buf.set_line(area.x + 1, area.y, &Line::from(spans), area.width.saturating_sub(2));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use habitflow_config::ThemeMode;

    fn render(mode: InputMode) -> String {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(mode, area, &mut buf, &Palette::for_mode(ThemeMode::Dark));
        buffer_to_string(&buf)
    }

    #[test]
    fn normal_hints() {
        insta::assert_snapshot!(
            render(InputMode::Normal).trim(),
            @"←↑↓→ move · Enter complete · n new · s stats · m menu · f filter · t theme · ? help"
        );
    }

    #[test]
    fn confirm_hints() {
        insta::assert_snapshot!(render(InputMode::Confirm).trim(), @"y delete · n cancel");
    }

    #[test]
    fn form_hints_mention_save() {
        assert!(render(InputMode::Form).contains("Enter save"));
    }
}
