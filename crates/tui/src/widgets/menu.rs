//! Card options popup.

use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::menu::{ActiveMenu, MenuAction};
use crate::theme::Palette;

/// Renders the open menu at its placed area.
pub fn render_menu(menu: &ActiveMenu, buf: &mut Buffer, palette: &Palette) {
    let area = menu.area;
    Clear.render(area, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    block.render(area, buf);

    for (row, action) in MenuAction::all().into_iter().enumerate() {
        let Ok(offset) = u16::try_from(row) else {
            break;
        };
        if offset >= inner.height {
            break;
        }

        let color = if action.is_danger() {
            palette.danger
        } else {
            palette.text
        };
        let mut style = Style::default().fg(color).bg(palette.surface);
        if row == menu.highlighted {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }

        let width = usize::from(inner.width);
        let line = format!(" {} {:<width$}", action.icon(), action.label());
        buf.set_stringn(inner.x, inner.y + offset, line, width, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuSlot;
    use crate::test_utils::buffer_to_string;
    use habitflow_config::ThemeMode;
    use habitflow_protocol::HabitId;
    use ratatui::layout::Rect;

    fn open(viewport: Rect) -> MenuSlot {
        let mut slot = MenuSlot::default();
        slot.open(HabitId::new_v4(), Rect::new(30, 5, 3, 1), viewport);
        slot
    }

    #[test]
    fn lists_every_action() {
        let viewport = Rect::new(0, 0, 80, 24);
        let slot = open(viewport);
        let mut buf = Buffer::empty(viewport);
        render_menu(
            slot.active().unwrap(),
            &mut buf,
            &Palette::for_mode(ThemeMode::Dark),
        );

        let text = buffer_to_string(&buf);
        for action in MenuAction::all() {
            assert!(text.contains(action.label()), "missing {}", action.label());
        }
    }

    #[test]
    fn highlighted_row_is_reversed() {
        let viewport = Rect::new(0, 0, 80, 24);
        let mut slot = open(viewport);
        slot.move_highlight(1);
        let menu = *slot.active().unwrap();
        let mut buf = Buffer::empty(viewport);
        render_menu(&menu, &mut buf, &Palette::for_mode(ThemeMode::Dark));

        let x = menu.area.x + 1;
        assert!(buf[(x, menu.area.y + 2)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(x, menu.area.y + 1)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn delete_uses_danger_color() {
        let viewport = Rect::new(0, 0, 80, 24);
        let slot = open(viewport);
        let menu = *slot.active().unwrap();
        let palette = Palette::for_mode(ThemeMode::Dark);
        let mut buf = Buffer::empty(viewport);
        render_menu(&menu, &mut buf, &palette);

        let delete_row = menu.area.y + 1 + 4;
        let label_start = (menu.area.x..menu.area.right())
            .find(|x| buf[(*x, delete_row)].symbol() == "D")
            .unwrap();
        assert_eq!(buf[(label_start, delete_row)].fg, palette.danger);
    }
}
