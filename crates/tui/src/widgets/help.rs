//! Key binding reference shown by `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;
use crate::theme::Palette;

const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 29;

/// Sections of `(key, action)` rows.
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("←↑↓→", "Move selection"),
            ("Click", "Select card or button"),
            ("Esc", "Close overlay or clear"),
        ],
    ),
    (
        "Habits",
        &[
            ("Enter", "Complete selected habit"),
            ("n", "New habit"),
            ("s", "Show stats"),
            ("m", "Options menu"),
            ("e", "Edit"),
            ("k", "Skip today"),
            ("d", "Duplicate"),
            ("r", "Add reminder"),
            ("D", "Delete"),
        ],
    ),
    (
        "View",
        &[
            ("0-5", "Filter by category"),
            ("f", "Next filter"),
            ("F", "Advanced filter"),
            ("t", "Toggle theme"),
            ("x", "Dismiss notification"),
            ("?", "Toggle help"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

/// Draws the binding reference centered over `area`.
///
/// # Examples
///
/// ```
/// use habitflow_config::ThemeMode;
/// use habitflow_tui::theme::Palette;
/// use habitflow_tui::widgets::render_help_overlay;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf, &Palette::for_mode(ThemeMode::Dark));
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer, palette: &Palette) {
    let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
    Clear.render(panel, buf);

    let frame = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.warning))
        .style(Style::default().bg(palette.surface));

    Paragraph::new(binding_lines(palette))
        .block(frame)
        .alignment(Alignment::Left)
        .render(panel, buf);
}

fn binding_lines(palette: &Palette) -> Vec<Line<'static>> {
    let section_style = Style::new()
        .fg(palette.warning)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::new().fg(palette.success);
    let action_style = Style::new().fg(palette.text);

    let rows = BINDINGS.iter().flat_map(|(section, keys)| {
        let heading = [
            Line::default(),
            Line::styled(format!("  {section}"), section_style),
        ];
        let entries = keys.iter().map(move |(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<11}"), key_style),
                Span::styled(*action, action_style),
            ])
        });
        heading.into_iter().chain(entries)
    });

    rows.chain([
        Line::default(),
        Line::styled(
            "  Press any key to close",
            Style::new()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        ),
    ])
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use habitflow_config::ThemeMode;

    fn plain_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn overlay_shows_sections() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf, &Palette::for_mode(ThemeMode::Dark));

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        assert!(content.contains("Navigation"));
        assert!(content.contains("Habits"));
        assert!(content.contains("Press any key to close"));
    }

    #[test]
    fn overlay_clips_to_tiny_area() {
        let area = Rect::new(0, 0, 12, 6);
        let mut buf = Buffer::empty(area);
        render_help_overlay(area, &mut buf, &Palette::for_mode(ThemeMode::Light));
        assert!(buffer_to_string(&buf).contains("Help"));
    }

    #[test]
    fn help_fits_its_panel() {
        let lines = binding_lines(&Palette::for_mode(ThemeMode::Dark));
        assert!(lines.len() <= usize::from(PANEL_HEIGHT - 2));
        assert!(lines.iter().all(|l| l.width() <= usize::from(PANEL_WIDTH - 2)));
    }

    #[test]
    fn every_binding_is_listed() {
        let text = plain_text(&binding_lines(&Palette::for_mode(ThemeMode::Dark)));
        for (_, keys) in BINDINGS {
            for (key, action) in *keys {
                assert!(text.contains(key), "missing key {key}");
                assert!(text.contains(action), "missing action {action}");
            }
        }
    }
}
