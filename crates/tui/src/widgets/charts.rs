//! Chart widgets drawn from [`ChartInstance`] state.
//!
//! The trend is a line chart on a 0-100 scale. The category breakdown and
//! the weekly stats are bar charts. All colors come from the instance's
//! [`ColorTokens`](crate::theme::ColorTokens), so a theme change only needs
//! the bridge to push new tokens.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, BarChart, Block, BorderType, Borders, Chart, Dataset, GraphType, Widget},
};

use crate::charts::{ChartInstance, ChartRole};

/// Renders the chart of `role` into `area`.
pub fn render_chart(role: ChartRole, chart: &ChartInstance, area: Rect, buf: &mut Buffer) {
    let tokens = chart.tokens;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(tokens.grid))
        .style(Style::default().bg(tokens.surface))
        .title(Span::styled(
            format!(" {} ", role.title()),
            Style::default().fg(tokens.text).add_modifier(Modifier::BOLD),
        ));

    match role {
        ChartRole::PerformanceTrend => render_trend(chart, block, area, buf),
        ChartRole::CategoryBreakdown | ChartRole::HabitStats => {
            render_bars(chart, block, area, buf);
        }
    }
}

fn render_trend(chart: &ChartInstance, block: Block<'_>, area: Rect, buf: &mut Buffer) {
    let tokens = chart.tokens;
    let points: Vec<(f64, f64)> = chart
        .data
        .values
        .iter()
        .enumerate()
        .map(|(x, y)| (x as f64, *y as f64))
        .collect();
    let last = chart.data.labels.len().saturating_sub(1);
    let labels = [0, last / 2, last]
        .into_iter()
        .filter_map(|i| chart.data.labels.get(i))
        .map(|label| Span::styled(label.clone(), Style::default().fg(tokens.text)));

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(tokens.primary))
        .data(&points);

    Chart::new(vec![dataset])
        .block(block)
        .style(Style::default().bg(tokens.surface))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(tokens.grid))
                .bounds([0.0, last.max(1) as f64])
                .labels(labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(tokens.grid))
                .bounds([0.0, 100.0])
                .labels(
                    ["0%", "50%", "100%"]
                        .map(|label| Span::styled(label, Style::default().fg(tokens.text))),
                ),
        )
        .render(area, buf);
}

fn render_bars(chart: &ChartInstance, block: Block<'_>, area: Rect, buf: &mut Buffer) {
    let tokens = chart.tokens;
    let bars: Vec<(&str, u64)> = chart
        .data
        .labels
        .iter()
        .map(String::as_str)
        .zip(chart.data.values.iter().copied())
        .collect();

    let inner_width = block.inner(area).width;
    let count = u16::try_from(bars.len().max(1)).unwrap_or(u16::MAX);
    let bar_width = (inner_width / count).saturating_sub(1).clamp(1, 9);

    BarChart::default()
        .block(block)
        .data(bars.as_slice())
        .max(chart.data.max().max(1))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(tokens.primary))
        .value_style(
            Style::default()
                .fg(tokens.text)
                .bg(tokens.primary)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(tokens.text))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartBridge, TerminalCharts, category_data, habit_stats, habit_stats_data};
    use crate::test_utils::buffer_to_string;
    use chrono::Weekday;
    use habitflow_config::ThemeMode;
    use habitflow_protocol::{Category, HabitCard, dummy::dummy_registry};

    #[test]
    fn category_chart_labels() {
        let mut bridge = ChartBridge::new(TerminalCharts::default(), ThemeMode::Dark);
        bridge.mount(ChartRole::CategoryBreakdown, category_data(&dummy_registry()));
        let chart = bridge.backend().get(ChartRole::CategoryBreakdown).unwrap();

        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        render_chart(ChartRole::CategoryBreakdown, chart, area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.contains("Habits by Category"));
        assert!(text.contains("Health"));
        assert!(text.contains("Other"));
    }

    #[test]
    fn weekly_stats_chart() {
        let mut bridge = ChartBridge::new(TerminalCharts::default(), ThemeMode::Light);
        let card = HabitCard::new("Run", Category::Health).with_progress(100);
        let stats = habit_stats(&card, Weekday::Wed);
        bridge.mount(ChartRole::HabitStats, habit_stats_data(&stats));
        let chart = bridge.backend().get(ChartRole::HabitStats).unwrap();

        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        render_chart(ChartRole::HabitStats, chart, area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.contains("Mon"));
        assert!(text.contains("Sun"));
    }

    #[test]
    fn border_uses_theme_tokens() {
        let mut bridge = ChartBridge::new(TerminalCharts::default(), ThemeMode::Dark);
        bridge.mount(ChartRole::CategoryBreakdown, category_data(&dummy_registry()));
        bridge.apply_theme(ThemeMode::Light);
        let chart = bridge.backend().get(ChartRole::CategoryBreakdown).unwrap();

        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        render_chart(ChartRole::CategoryBreakdown, chart, area, &mut buf);
        assert_eq!(buf[(0, 5)].fg, bridge.tokens().grid);
    }
}
