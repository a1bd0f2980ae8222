//! Helpers shared by the rendering tests.

use ratatui::buffer::Buffer;

/// Returns the buffer's symbols, one line per row.
///
/// Trailing spaces are dropped so assertions and inline snapshots do not
/// depend on the buffer width.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::with_capacity(usize::from(area.height));
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .filter_map(|x| buf.cell((x, y)))
            .map(|cell| cell.symbol())
            .collect();
        lines.push(row.trim_end_matches(' ').to_string());
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{layout::Rect, style::Style};

    #[test]
    fn rows_are_trimmed() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        buf.set_string(0, 0, "Run", Style::default());
        assert_eq!(buffer_to_string(&buf), "Run\n\n");
    }

    #[test]
    fn offset_areas_are_read() {
        let mut buf = Buffer::empty(Rect::new(5, 3, 6, 1));
        buf.set_string(5, 3, "Water", Style::default());
        assert_eq!(buffer_to_string(&buf), "Water\n");
    }
}
