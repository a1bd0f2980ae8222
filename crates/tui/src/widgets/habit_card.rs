//! Habit card widget.
//!
//! ```text
//! ╭ Morning Run ─────────────────╮
//! │ ● Health & Fitness · Daily   │
//! │ 30 minutes around the park   │
//! │ ███████████████░░░░░░░░░  60%│
//! │                              │
//! │  ✓ Complete   Stats      ⋯   │
//! ╰──────────────────────────────╯
//! ```

use habitflow_protocol::{HabitCard, SyncState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::truncate;
use crate::layout::card_buttons;
use crate::theme::Palette;

/// Visual state of a card beyond its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardLook {
    /// The card has keyboard selection.
    pub selected: bool,
    /// The card was just completed.
    pub pulsing: bool,
    /// A confirmed delete is pending.
    pub collapsing: bool,
}

/// Renders a habit card into `area`.
pub fn render_habit_card(
    card: &HabitCard,
    look: CardLook,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
) {
    let category_color = palette.category(card.category.color());

    let border_style = if look.pulsing {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    } else if look.selected {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };

    let title_width = usize::from(area.width.saturating_sub(4));
    let mut title_style = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    if card.completed() {
        title_style = title_style.fg(palette.success);
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", truncate(&card.title, title_width.saturating_sub(2))),
            title_style,
        ));
    if let Some(marker) = sync_marker(card.sync, palette) {
        block = block.title_top(marker.right_aligned());
    }

    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height < 3 || inner.width < 4 {
        return;
    }

    let text_width = usize::from(inner.width.saturating_sub(2));
    let x = inner.x + 1;

    let meta = Line::from(vec![
        Span::styled("● ", Style::default().fg(category_color)),
        Span::styled(
            card.category.display_name(),
            Style::default().fg(category_color),
        ),
        Span::styled(
            format!(" · {}", card.frequency.display_name()),
            Style::default().fg(palette.text_muted),
        ),
    ]);
    buf.set_line(x, inner.y, &meta, inner.width.saturating_sub(2));

    let description_style = if card.description.is_some() {
        Style::default().fg(palette.text_muted)
    } else {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::ITALIC)
    };
    buf.set_string(
        x,
        inner.y + 1,
        truncate(card.description_or_placeholder(), text_width),
        description_style,
    );

    render_progress(card, x, inner.y + 2, text_width, buf, palette, category_color);

    if inner.height >= 5 {
        render_buttons(card, area, buf, palette);
    }

    if look.collapsing {
        buf.set_style(
            area,
            Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
        );
    }
}

fn sync_marker(sync: SyncState, palette: &Palette) -> Option<Line<'static>> {
    match sync {
        SyncState::LocalOnly | SyncState::Synced => None,
        SyncState::Pending => Some(Line::from(Span::styled(
            " ⟳ ",
            Style::default().fg(palette.text_muted),
        ))),
        SyncState::Failed => Some(Line::from(Span::styled(
            " ⚠ unsaved ",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ))),
    }
}

fn render_progress(
    card: &HabitCard,
    x: u16,
    y: u16,
    width: usize,
    buf: &mut Buffer,
    palette: &Palette,
    category_color: ratatui::style::Color,
) {
    let percent = card.progress_percent();
    let label = format!(" {percent:>3}%");
    let bar_width = width.saturating_sub(label.chars().count());
    let filled = bar_width * usize::from(percent) / 100;

    let fill_color = if card.completed() {
        palette.success
    } else {
        category_color
    };
    let line = Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(fill_color)),
        Span::styled(
            "░".repeat(bar_width - filled),
            Style::default().fg(palette.border),
        ),
        Span::styled(label, Style::default().fg(palette.text)),
    ]);
    buf.set_line(x, y, &line, u16::try_from(width).unwrap_or(u16::MAX));
}

fn render_buttons(card: &HabitCard, area: Rect, buf: &mut Buffer, palette: &Palette) {
    let buttons = card_buttons(area);

    let (label, style) = if card.completed() {
        (
            "  ✓ Done    ",
            Style::default()
                .fg(palette.surface)
                .bg(palette.success)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            " ✓ Complete ",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    };
    buf.set_stringn(
        buttons.complete.x,
        buttons.complete.y,
        label,
        usize::from(buttons.complete.width),
        style,
    );

    let secondary = Style::default().fg(palette.primary);
    buf.set_stringn(
        buttons.stats.x,
        buttons.stats.y,
        " Stats ",
        usize::from(buttons.stats.width),
        secondary.add_modifier(Modifier::UNDERLINED),
    );
    buf.set_stringn(
        buttons.menu.x,
        buttons.menu.y,
        " ⋯ ",
        usize::from(buttons.menu.width),
        secondary.add_modifier(Modifier::BOLD),
    );
}
