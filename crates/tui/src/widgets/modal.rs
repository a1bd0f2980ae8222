//! Modal dialogs: the habit form, the delete confirmation, and stats.
//!
//! Each modal is centered over the dashboard and clears what is behind it.
//! Sizes and button regions come from [`crate::layout`], which the click
//! handler also uses.

use habitflow_protocol::HabitCard;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::charts::render_chart;
use crate::charts::{ChartInstance, ChartRole, HabitStats};
use crate::form::{FormField, HabitForm};
use crate::layout::{CONFIRM_SIZE, FORM_SIZE, STATS_SIZE, centered_rect, confirm_buttons};
use crate::theme::Palette;

fn modal_block<'a>(title: impl Into<Line<'a>>, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.surface).fg(palette.text))
}

fn heading(text: &str, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )
}

/// Renders the create/edit form centered in `area`.
///
/// ```text
/// ╭ New Habit ─────────────────────────────────────────╮
/// │ Habit Name                                         │
/// │ Morning Run▌                                       │
/// │ Description                                        │
/// │ 30 minutes                                         │
/// │ Category                                           │
/// │ ◀ Health & Fitness ▶                               │
/// │ Frequency                                          │
/// │ ◀ Daily ▶                                          │
/// │                                                    │
/// │ Tab next · ←/→ change · Enter save · Esc cancel    │
/// ╰────────────────────────────────────────────────────╯
/// ```
pub fn render_form(form: &HabitForm, area: Rect, buf: &mut Buffer, palette: &Palette) -> Rect {
    let modal = centered_rect(FORM_SIZE.0, FORM_SIZE.1, area);
    Clear.render(modal, buf);

    let block = modal_block(heading(form.heading(), palette), palette);
    let inner = block.inner(modal);
    block.render(modal, buf);
    if inner.height < 9 || inner.width < 8 {
        return modal;
    }

    let x = inner.x + 1;
    let width = inner.width.saturating_sub(2);
    for (slot, field) in FormField::all().iter().enumerate() {
        let Ok(slot) = u16::try_from(slot) else {
            break;
        };
        let y = inner.y + slot * 2;
        let focused = form.focus() == *field;

        let label_style = if focused {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted)
        };
        buf.set_stringn(x, y, field.label(), usize::from(width), label_style);

        let value = field_value(form, *field, focused, usize::from(width));
        let value_style = if focused {
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        buf.set_line(x, y + 1, &Line::styled(value, value_style), width);
    }

    let hint = "Tab next · ←/→ change · Enter save · Esc cancel";
    buf.set_stringn(
        x,
        inner.bottom().saturating_sub(1),
        hint,
        usize::from(width),
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::ITALIC),
    );
    modal
}

fn field_value(form: &HabitForm, field: FormField, focused: bool, width: usize) -> String {
    match field {
        FormField::Title | FormField::Description => {
            let input = if field == FormField::Title {
                form.title()
            } else {
                form.description()
            };
            let mut text = input.value().to_string();
            if focused {
                text.push('▌');
            }
            // keep the cursor end visible
            let len = text.chars().count();
            if len > width {
                text = text.chars().skip(len - width).collect();
            }
            text
        }
        FormField::Category => selector(form.category().display_name(), focused),
        FormField::Frequency => selector(form.frequency().display_name(), focused),
    }
}

fn selector(value: &str, focused: bool) -> String {
    if focused {
        format!("◀ {value} ▶")
    } else {
        format!("  {value}")
    }
}

/// Renders the delete confirmation centered in `area`.
pub fn render_confirm(prompt: &str, area: Rect, buf: &mut Buffer, palette: &Palette) -> Rect {
    let modal = centered_rect(CONFIRM_SIZE.0, CONFIRM_SIZE.1, area);
    Clear.render(modal, buf);

    let title = Span::styled(
        " Delete Habit ",
        Style::default()
            .fg(palette.danger)
            .add_modifier(Modifier::BOLD),
    );
    let block = modal_block(title, palette).border_style(Style::default().fg(palette.danger));
    let inner = block.inner(modal);
    block.render(modal, buf);

    let text_area = Rect {
        x: inner.x + 1,
        y: inner.y + 1,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(3),
    };
    Paragraph::new(prompt)
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(text_area, buf);

    let (cancel, delete) = confirm_buttons(modal);
    buf.set_stringn(
        cancel.x,
        cancel.y,
        "[ Cancel ]",
        usize::from(cancel.width),
        Style::default().fg(palette.text_muted),
    );
    buf.set_stringn(
        delete.x,
        delete.y,
        "[ Delete ]",
        usize::from(delete.width),
        Style::default()
            .fg(palette.danger)
            .add_modifier(Modifier::BOLD),
    );

    let hint = "y delete · n cancel";
    let hint_width = u16::try_from(hint.chars().count()).unwrap_or(u16::MAX);
    if cancel.right() + hint_width + 2 <= delete.x {
        let hint_x = modal.x + (modal.width.saturating_sub(hint_width)) / 2;
        buf.set_string(
            hint_x,
            cancel.y,
            hint,
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        );
    }
    modal
}

/// Renders the stats of `card` centered in `area`.
///
/// `chart` is the mounted weekly chart; without it only the figures are
/// shown.
pub fn render_stats(
    card: &HabitCard,
    stats: &HabitStats,
    chart: Option<&ChartInstance>,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
) -> Rect {
    let modal = centered_rect(STATS_SIZE.0, STATS_SIZE.1, area);
    Clear.render(modal, buf);

    let block = modal_block(heading(&format!("{} Statistics", card.title), palette), palette);
    let inner = block.inner(modal);
    block.render(modal, buf);
    if inner.height < 4 {
        return modal;
    }

    let x = inner.x + 1;
    let width = inner.width.saturating_sub(2);
    let category_color = palette.category(card.category.color());
    let meta = Line::from(vec![
        Span::styled("● ", Style::default().fg(category_color)),
        Span::styled(card.category.display_name(), Style::default().fg(category_color)),
        Span::styled(
            format!(" · {}", card.frequency.display_name()),
            Style::default().fg(palette.text_muted),
        ),
    ]);
    buf.set_line(x, inner.y, &meta, width);

    let day_unit = if stats.streak_days == 1 { "day" } else { "days" };
    let figures = Line::from(vec![
        Span::styled("Current streak: ", Style::default().fg(palette.text_muted)),
        Span::styled(
            format!("{} {day_unit}", stats.streak_days),
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Completion rate: ", Style::default().fg(palette.text_muted)),
        Span::styled(
            format!("{}%", stats.completion_rate),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    buf.set_line(x, inner.y + 1, &figures, width);

    if let Some(chart) = chart {
        let chart_area = Rect {
            x: inner.x,
            y: inner.y + 3,
            width: inner.width,
            height: inner.height.saturating_sub(4),
        };
        if chart_area.height >= 4 {
            render_chart(ChartRole::HabitStats, chart, chart_area, buf);
        }
    }

    buf.set_stringn(
        x,
        inner.bottom().saturating_sub(1),
        "Esc close",
        usize::from(width),
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::ITALIC),
    );
    modal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartBridge, TerminalCharts, habit_stats, habit_stats_data};
    use crate::lifecycle::delete_prompt;
    use crate::test_utils::buffer_to_string;
    use chrono::Weekday;
    use habitflow_config::ThemeMode;
    use habitflow_protocol::Category;

    fn palette() -> Palette {
        Palette::for_mode(ThemeMode::Dark)
    }

    #[test]
    fn create_form_shows_fields() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let mut form = HabitForm::create();
        for ch in "Stretch".chars() {
            form.input_char(ch);
        }
        render_form(&form, area, &mut buf, &palette());

        let text = buffer_to_string(&buf);
        assert!(text.contains("New Habit"));
        assert!(text.contains("Habit Name"));
        assert!(text.contains("Stretch▌"));
        assert!(text.contains("Health & Fitness"));
        assert!(text.contains("Daily"));
        assert!(text.contains("Enter save"));
    }

    #[test]
    fn focused_selector_has_arrows() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let mut form = HabitForm::create();
        form.next_field();
        form.next_field();
        render_form(&form, area, &mut buf, &palette());

        let text = buffer_to_string(&buf);
        assert!(text.contains("◀ Health & Fitness ▶"));
        assert!(!text.contains('▌'));
    }

    #[test]
    fn edit_form_prefills() {
        let card = HabitCard::new("Read", Category::Education).with_description("20 pages");
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_form(&HabitForm::edit(&card), area, &mut buf, &palette());

        let text = buffer_to_string(&buf);
        assert!(text.contains("Edit Habit"));
        assert!(text.contains("Read▌"));
        assert!(text.contains("20 pages"));
        assert!(text.contains("  Education"));
    }

    #[test]
    fn long_input_keeps_cursor_visible() {
        assert_eq!(
            field_value(&HabitForm::create(), FormField::Title, true, 10),
            "▌"
        );
        let mut form = HabitForm::create();
        for ch in "abcdefghijklmnop".chars() {
            form.input_char(ch);
        }
        assert_eq!(field_value(&form, FormField::Title, true, 5), "mnop▌");
    }

    #[test]
    fn confirm_shows_prompt_and_buttons() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let modal = render_confirm(&delete_prompt("Morning Run"), area, &mut buf, &palette());

        let text = buffer_to_string(&buf);
        assert!(text.contains("Delete Habit"));
        assert!(text.contains("Morning Run"));
        assert!(text.contains("[ Cancel ]"));
        assert!(text.contains("[ Delete ]"));

        let (cancel, delete) = confirm_buttons(modal);
        assert_eq!(buf[(cancel.x, cancel.y)].symbol(), "[");
        assert_eq!(buf[(delete.x + 2, delete.y)].symbol(), "D");
    }

    #[test]
    fn stats_shows_figures_and_chart() {
        let card = HabitCard::new("Run", Category::Health).with_progress(100);
        let stats = habit_stats(&card, Weekday::Mon);
        let mut bridge = ChartBridge::new(TerminalCharts::default(), ThemeMode::Dark);
        bridge.mount(ChartRole::HabitStats, habit_stats_data(&stats));

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_stats(
            &card,
            &stats,
            bridge.backend().get(ChartRole::HabitStats),
            area,
            &mut buf,
            &palette(),
        );

        let text = buffer_to_string(&buf);
        assert!(text.contains("Run Statistics"));
        assert!(text.contains("Current streak: 1 day"));
        assert!(text.contains(&format!("Completion rate: {}%", stats.completion_rate)));
        assert!(text.contains("This Week"));
    }
}
