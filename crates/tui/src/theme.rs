//! Color palettes for the dark and light themes.
//!
//! Everything color-dependent reads the [`ThemeMode`] once and receives a
//! [`Palette`] or [`ColorTokens`] value computed from it.

use habitflow_config::ThemeMode;
use habitflow_protocol::CategoryColor;
use ratatui::style::Color;

/// Colors used by widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Card and popup background.
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (descriptions, hints).
    pub text_muted: Color,
    /// Unselected borders.
    pub border: Color,
    /// Accent for selection, info, and links.
    pub primary: Color,
    /// Completed habits and success notifications.
    pub success: Color,
    /// Unsaved marker.
    pub warning: Color,
    /// Destructive actions and errors.
    pub danger: Color,
}

impl Palette {
    /// Returns the palette for `mode`.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                background: Color::Rgb(17, 24, 39),
                surface: Color::Rgb(31, 41, 55),
                text: Color::Rgb(229, 231, 235),
                text_muted: Color::Rgb(156, 163, 175),
                border: Color::Rgb(75, 85, 99),
                primary: Color::Rgb(129, 140, 248),
                success: Color::Rgb(52, 211, 153),
                warning: Color::Rgb(251, 191, 36),
                danger: Color::Rgb(248, 113, 113),
            },
            ThemeMode::Light => Self {
                background: Color::Rgb(249, 250, 251),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(17, 24, 39),
                text_muted: Color::Rgb(107, 114, 128),
                border: Color::Rgb(209, 213, 219),
                primary: Color::Rgb(99, 102, 241),
                success: Color::Rgb(16, 185, 129),
                warning: Color::Rgb(217, 119, 6),
                danger: Color::Rgb(220, 38, 38),
            },
        }
    }

    /// Maps a category color token to a terminal color.
    #[must_use]
    pub const fn category(&self, color: CategoryColor) -> Color {
        match color {
            CategoryColor::Green => self.success,
            CategoryColor::Purple => Color::Rgb(167, 139, 250),
            CategoryColor::Orange => Color::Rgb(251, 146, 60),
            CategoryColor::Red => self.danger,
            CategoryColor::Gray => self.text_muted,
        }
    }
}

/// Colors pushed into charts on theme changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    /// Axis labels and legends.
    pub text: Color,
    /// Grid lines and axes.
    pub grid: Color,
    /// Tooltip and value label background.
    pub tooltip_background: Color,
    /// Series color.
    pub primary: Color,
    /// Chart background.
    pub surface: Color,
}

impl ColorTokens {
    /// Returns the chart tokens for `mode`.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                text: Color::Rgb(229, 231, 235),
                grid: Color::Rgb(55, 65, 81),
                tooltip_background: Color::Rgb(17, 24, 39),
                primary: Color::Rgb(129, 140, 248),
                surface: Color::Rgb(31, 41, 55),
            },
            ThemeMode::Light => Self {
                text: Color::Rgb(107, 114, 128),
                grid: Color::Rgb(229, 231, 235),
                tooltip_background: Color::Rgb(255, 255, 255),
                primary: Color::Rgb(99, 102, 241),
                surface: Color::Rgb(255, 255, 255),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_differ() {
        assert_ne!(
            Palette::for_mode(ThemeMode::Dark),
            Palette::for_mode(ThemeMode::Light)
        );
        assert_ne!(
            ColorTokens::for_mode(ThemeMode::Dark).text,
            ColorTokens::for_mode(ThemeMode::Light).text
        );
    }

    #[test]
    fn category_colors_are_distinct() {
        let palette = Palette::for_mode(ThemeMode::Dark);
        let colors = [
            CategoryColor::Green,
            CategoryColor::Purple,
            CategoryColor::Orange,
            CategoryColor::Red,
            CategoryColor::Gray,
        ]
        .map(|c| palette.category(c));
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
