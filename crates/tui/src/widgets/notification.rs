//! Toast notification widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::truncate;
use crate::layout::{toast_area, toast_close};
use crate::notification::{Notification, Severity};
use crate::theme::Palette;

/// Renders `notification` in the bottom-right corner of `area`.
///
/// Returns the toast region so callers can hit-test the close button.
pub fn render_notification(
    notification: &Notification,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
) -> Rect {
    let accent = match notification.severity {
        Severity::Success => palette.success,
        Severity::Info => palette.primary,
        Severity::Error => palette.danger,
    };

    let message_width = u16::try_from(notification.message.chars().count()).unwrap_or(u16::MAX);
    let toast = toast_area(area, message_width);
    Clear.render(toast, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(toast);
    block.render(toast, buf);

    let close = toast_close(toast);
    let text_width = usize::from(close.x.saturating_sub(inner.x + 3));
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", notification.severity.icon()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate(&notification.message, text_width),
            Style::default().fg(palette.text),
        ),
    ]);
    buf.set_line(inner.x, inner.y, &line, inner.width.saturating_sub(close.width));
    buf.set_string(
        close.x + 1,
        close.y,
        "×",
        Style::default().fg(palette.text_muted),
    );

    if notification.is_leaving() {
        buf.set_style(toast, Style::default().add_modifier(Modifier::DIM));
    }
    toast
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Phase;
    use crate::test_utils::buffer_to_string;
    use habitflow_config::ThemeMode;
    use std::time::Instant;

    fn notification(severity: Severity, phase: Phase) -> Notification {
        Notification {
            id: 1,
            message: "Habit created successfully!".to_string(),
            severity,
            phase,
        }
    }

    #[test]
    fn toast_sits_bottom_right() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let now = Instant::now();
        let toast = render_notification(
            &notification(Severity::Success, Phase::Shown { expires_at: now }),
            area,
            &mut buf,
            &Palette::for_mode(ThemeMode::Dark),
        );

        assert_eq!(toast.right(), 79);
        assert_eq!(toast.bottom(), 23);
        let text = buffer_to_string(&buf);
        assert!(text.contains("✔ Habit created successfully!"));
        assert!(text.contains('×'));
    }

    #[test]
    fn border_follows_severity() {
        let area = Rect::new(0, 0, 80, 24);
        let palette = Palette::for_mode(ThemeMode::Dark);
        let now = Instant::now();

        let mut buf = Buffer::empty(area);
        let toast = render_notification(
            &notification(Severity::Error, Phase::Shown { expires_at: now }),
            area,
            &mut buf,
            &palette,
        );
        assert_eq!(buf[(toast.x, toast.y)].fg, palette.danger);
    }

    #[test]
    fn leaving_toast_is_dimmed() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let now = Instant::now();
        let toast = render_notification(
            &notification(Severity::Info, Phase::Leaving { remove_at: now }),
            area,
            &mut buf,
            &Palette::for_mode(ThemeMode::Dark),
        );
        assert!(buf[(toast.x + 1, toast.y + 1)].modifier.contains(Modifier::DIM));
    }
}
