//! Charts and the bridge that keeps them in sync with theme and data.
//!
//! The bridge owns at most one chart per [`ChartRole`] and talks to the
//! drawing side only through [`ChartBackend`]. [`TerminalCharts`] is the
//! backend used by the widgets; it keeps the latest series and colors per
//! role so the render pass can draw them with ratatui.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Weekday};
use habitflow_config::ThemeMode;
use habitflow_protocol::{CardRegistry, Category, HabitCard};
use tracing::debug;

use crate::theme::ColorTokens;

/// Number of days shown by the performance trend.
pub const TREND_DAYS: usize = 30;

/// Weekday labels of the per-habit chart.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// The charts the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartRole {
    /// Completion rate over the last 30 days.
    PerformanceTrend,
    /// Number of habits per category.
    CategoryBreakdown,
    /// Weekly completions of one habit, shown in the stats modal.
    HabitStats,
}

impl ChartRole {
    /// Returns the chart title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PerformanceTrend => "Performance Trend",
            Self::CategoryBreakdown => "Habits by Category",
            Self::HabitStats => "This Week",
        }
    }
}

/// A single labelled series.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartData {
    /// One label per value.
    pub labels: Vec<String>,
    /// Series values.
    pub values: Vec<u64>,
}

impl ChartData {
    /// Returns the largest value, or 0 for an empty series.
    #[must_use]
    pub fn max(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// Capabilities the bridge needs from a drawing library.
pub trait ChartBackend {
    /// Creates a chart for `role`.
    fn create(&mut self, role: ChartRole, data: &ChartData, tokens: ColorTokens);

    /// Replaces the colors of an existing chart.
    fn update_colors(&mut self, role: ChartRole, tokens: ColorTokens);

    /// Replaces the series of an existing chart.
    fn update_data(&mut self, role: ChartRole, data: &ChartData);

    /// Requests a redraw.
    fn redraw(&mut self, role: ChartRole);

    /// Destroys a chart.
    fn destroy(&mut self, role: ChartRole);
}

/// Keeps mounted charts consistent with the theme and the registry.
///
/// # Examples
///
/// ```
/// use habitflow_config::ThemeMode;
/// use habitflow_tui::charts::{ChartBridge, ChartData, ChartRole, TerminalCharts};
///
/// let mut bridge = ChartBridge::new(TerminalCharts::default(), ThemeMode::Dark);
/// bridge.mount(ChartRole::CategoryBreakdown, ChartData::default());
/// bridge.apply_theme(ThemeMode::Light);
///
/// let chart = bridge.backend().get(ChartRole::CategoryBreakdown).unwrap();
/// assert_eq!(chart.creations, 1);
/// ```
#[derive(Debug)]
pub struct ChartBridge<B> {
    backend: B,
    tokens: ColorTokens,
    mounted: Vec<ChartRole>,
}

impl<B: ChartBackend> ChartBridge<B> {
    /// Creates a bridge with no mounted charts.
    #[must_use]
    pub fn new(backend: B, mode: ThemeMode) -> Self {
        Self {
            backend,
            tokens: ColorTokens::for_mode(mode),
            mounted: Vec::new(),
        }
    }

    /// Mounts a chart, destroying any previous chart of the same role.
    pub fn mount(&mut self, role: ChartRole, data: ChartData) {
        if self.is_mounted(role) {
            self.backend.destroy(role);
        } else {
            self.mounted.push(role);
        }
        self.backend.create(role, &data, self.tokens);
    }

    /// Destroys the chart of `role`. Returns `false` if none was mounted.
    pub fn unmount(&mut self, role: ChartRole) -> bool {
        let before = self.mounted.len();
        self.mounted.retain(|r| *r != role);
        if self.mounted.len() == before {
            return false;
        }
        self.backend.destroy(role);
        true
    }

    /// Pushes the colors of `mode` into every mounted chart.
    pub fn apply_theme(&mut self, mode: ThemeMode) {
        self.tokens = ColorTokens::for_mode(mode);
        debug!(theme = mode.display_name(), charts = self.mounted.len(), "recoloring charts");
        for role in &self.mounted {
            self.backend.update_colors(*role, self.tokens);
            self.backend.redraw(*role);
        }
    }

    /// Replaces the series of a mounted chart.
    ///
    /// Returns `false` and does nothing if the role is not mounted.
    pub fn update_data(&mut self, role: ChartRole, data: ChartData) -> bool {
        if !self.is_mounted(role) {
            return false;
        }
        self.backend.update_data(role, &data);
        self.backend.redraw(role);
        true
    }

    /// Returns `true` if a chart of `role` is mounted.
    #[must_use]
    pub fn is_mounted(&self, role: ChartRole) -> bool {
        self.mounted.contains(&role)
    }

    /// Returns the current chart colors.
    #[must_use]
    pub fn tokens(&self) -> ColorTokens {
        self.tokens
    }

    /// Returns the backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Chart state kept by [`TerminalCharts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartInstance {
    /// Latest series.
    pub data: ChartData,
    /// Latest colors.
    pub tokens: ColorTokens,
    /// How many times this role was created.
    pub creations: u32,
    /// How many redraws were requested since creation.
    pub redraws: u32,
}

/// Backend storing chart state for the ratatui widgets.
#[derive(Debug, Clone, Default)]
pub struct TerminalCharts {
    charts: HashMap<ChartRole, ChartInstance>,
    creations: HashMap<ChartRole, u32>,
}

impl TerminalCharts {
    /// Returns the chart of `role`, if mounted.
    #[must_use]
    pub fn get(&self, role: ChartRole) -> Option<&ChartInstance> {
        self.charts.get(&role)
    }
}

impl ChartBackend for TerminalCharts {
    fn create(&mut self, role: ChartRole, data: &ChartData, tokens: ColorTokens) {
        let creations = self.creations.entry(role).or_insert(0);
        *creations += 1;
        self.charts.insert(
            role,
            ChartInstance {
                data: data.clone(),
                tokens,
                creations: *creations,
                redraws: 0,
            },
        );
    }

    fn update_colors(&mut self, role: ChartRole, tokens: ColorTokens) {
        if let Some(chart) = self.charts.get_mut(&role) {
            chart.tokens = tokens;
        }
    }

    fn update_data(&mut self, role: ChartRole, data: &ChartData) {
        if let Some(chart) = self.charts.get_mut(&role) {
            chart.data = data.clone();
        }
    }

    fn redraw(&mut self, role: ChartRole) {
        if let Some(chart) = self.charts.get_mut(&role) {
            chart.redraws += 1;
        }
    }

    fn destroy(&mut self, role: ChartRole) {
        self.charts.remove(&role);
    }
}

/// Builds the performance trend series.
///
/// The last `TREND_DAYS - 1` entries of `history` are followed by today's
/// live completion rate. Labels are short dates ending at `today`.
#[must_use]
pub fn performance_data(history: &[u8], registry: &CardRegistry, today: NaiveDate) -> ChartData {
    let past = history.len().min(TREND_DAYS - 1);
    let mut values: Vec<u64> = history[history.len() - past..]
        .iter()
        .map(|v| u64::from(*v))
        .collect();
    values.push(u64::from(registry.completion_rate()));

    let days = values.len();
    let labels = (0..days)
        .map(|i| {
            let back = i64::try_from(days - 1 - i).unwrap_or(0);
            (today - Duration::days(back)).format("%b %d").to_string()
        })
        .collect();

    ChartData { labels, values }
}

/// Builds the per-category counts series, in category table order.
#[must_use]
pub fn category_data(registry: &CardRegistry) -> ChartData {
    let counts = registry.category_counts();
    ChartData {
        labels: counts
            .iter()
            .map(|(category, _)| short_label(*category).to_string())
            .collect(),
        values: counts
            .iter()
            .map(|(_, n)| u64::try_from(*n).unwrap_or(u64::MAX))
            .collect(),
    }
}

fn short_label(category: Category) -> &'static str {
    match category {
        Category::Health => "Health",
        Category::Productivity => "Prod.",
        Category::Education => "Edu.",
        Category::Personal => "Personal",
        Category::Other => "Other",
    }
}

/// Figures shown in the stats modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HabitStats {
    /// 1 when the habit was done that day, Monday first.
    pub week: [u8; 7],
    /// Consecutive done days ending today (or yesterday).
    pub streak_days: u32,
    /// Completion rate in percent.
    pub completion_rate: u8,
}

/// Computes the stats of `card`.
///
/// Only today's entry reflects live state. Past days are sample data
/// derived from the card id, so they stay stable between frames. Days
/// after `today` are empty.
#[must_use]
pub fn habit_stats(card: &HabitCard, today: Weekday) -> HabitStats {
    let seed = card.id.as_bytes();
    let today_index = today.num_days_from_monday() as usize;

    let mut week = [0u8; 7];
    for (day, slot) in week.iter_mut().enumerate() {
        *slot = match day.cmp(&today_index) {
            std::cmp::Ordering::Less => u8::from(seed[day] % 10 >= 3),
            std::cmp::Ordering::Equal => u8::from(card.completed()),
            std::cmp::Ordering::Greater => 0,
        };
    }

    let start = if week[today_index] == 1 {
        today_index
    } else {
        today_index.wrapping_sub(1)
    };
    let streak_days = if start > 6 {
        0
    } else {
        week[..=start].iter().rev().take_while(|d| **d == 1).count() as u32
    };

    HabitStats {
        week,
        streak_days,
        completion_rate: 70 + seed[8] % 30,
    }
}

/// Builds the weekly series of the stats modal.
#[must_use]
pub fn habit_stats_data(stats: &HabitStats) -> ChartData {
    ChartData {
        labels: WEEKDAY_LABELS.iter().map(ToString::to_string).collect(),
        values: stats.week.iter().map(|v| u64::from(*v)).collect(),
    }
}
