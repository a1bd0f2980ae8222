//! Theme mode and its persisted preference.
//!
//! The active mode is decided once at startup: a saved preference wins,
//! otherwise the ambient (terminal) preference is used. A manual toggle is
//! saved and from then on ambient changes are ignored.
//!
//! The preference file holds a single field:
//!
//! ```json
//! { "theme": "dark" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence::{read_config_file, write_config_file};

/// Environment variable some terminals set to `"<fg>;<bg>"` color indexes.
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// Dark or light rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl ThemeMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns the display name of this mode.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Returns `true` for [`ThemeMode::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// On-disk shape of the theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    /// The mode the user picked.
    pub theme: ThemeMode,
}

/// Loads the saved theme preference.
///
/// A missing file means no preference.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_preference(path: impl AsRef<Path>) -> Result<Option<ThemeMode>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let preference: ThemePreference = read_config_file(path)?;
    Ok(Some(preference.theme))
}

/// Saves the theme preference, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_preference(path: impl AsRef<Path>, theme: ThemeMode) -> Result<()> {
    write_config_file(path, &ThemePreference { theme })
}

/// Derives the ambient mode from a `COLORFGBG` value.
///
/// The last field is the background color index. Indexes 0-6 and 8 are
/// dark colors in the standard 16-color palette. Without a usable hint the
/// terminal is assumed dark.
///
/// # Examples
///
/// ```
/// use habitflow_config::theme::{ThemeMode, ambient_mode_from};
///
/// assert_eq!(ambient_mode_from(Some("15;0")), ThemeMode::Dark);
/// assert_eq!(ambient_mode_from(Some("0;15")), ThemeMode::Light);
/// assert_eq!(ambient_mode_from(None), ThemeMode::Dark);
/// ```
#[must_use]
pub fn ambient_mode_from(colorfgbg: Option<&str>) -> ThemeMode {
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match background {
        Some(0..=6 | 8) | None => ThemeMode::Dark,
        Some(_) => ThemeMode::Light,
    }
}

/// Reads the ambient mode from the process environment.
#[must_use]
pub fn detect_ambient_mode() -> ThemeMode {
    ambient_mode_from(std::env::var(COLORFGBG_VAR).ok().as_deref())
}

/// Process-wide theme state.
///
/// # Examples
///
/// ```
/// use habitflow_config::theme::{ThemeMode, ThemeState};
///
/// let mut state = ThemeState::initialize(None, ThemeMode::Light);
/// assert_eq!(state.mode(), ThemeMode::Light);
///
/// // Ambient changes apply until the user picks a mode.
/// assert!(state.ambient_changed(ThemeMode::Dark));
///
/// assert_eq!(state.toggle(), ThemeMode::Light);
/// assert!(!state.ambient_changed(ThemeMode::Dark));
/// assert_eq!(state.mode(), ThemeMode::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    mode: ThemeMode,
    manual: bool,
}

impl ThemeState {
    /// Picks the saved preference when present, the ambient mode otherwise.
    #[must_use]
    pub fn initialize(saved: Option<ThemeMode>, ambient: ThemeMode) -> Self {
        match saved {
            Some(mode) => Self { mode, manual: true },
            None => Self {
                mode: ambient,
                manual: false,
            },
        }
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Returns `true` once the user picked a mode explicitly.
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        self.manual
    }

    /// Flips the mode and records it as a manual choice.
    ///
    /// Returns the new mode, which the caller should persist.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.manual = true;
        self.mode
    }

    /// Applies an ambient preference change.
    ///
    /// Ignored once a manual choice exists. Returns `true` if the active
    /// mode changed.
    pub fn ambient_changed(&mut self, ambient: ThemeMode) -> bool {
        if self.manual || self.mode == ambient {
            return false;
        }
        self.mode = ambient;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn saved_preference_wins() {
        let state = ThemeState::initialize(Some(ThemeMode::Light), ThemeMode::Dark);
        assert_eq!(state.mode(), ThemeMode::Light);
        assert!(state.is_manual());
    }

    #[test]
    fn ambient_used_without_preference() {
        let state = ThemeState::initialize(None, ThemeMode::Light);
        assert_eq!(state.mode(), ThemeMode::Light);
        assert!(!state.is_manual());
    }

    #[test]
    fn toggle_twice_restores_mode() {
        let mut state = ThemeState::initialize(None, ThemeMode::Dark);
        assert_eq!(state.toggle(), ThemeMode::Light);
        assert_eq!(state.toggle(), ThemeMode::Dark);
        assert!(state.is_manual());
    }

    #[test]
    fn ambient_change_ignored_after_manual_choice() {
        let mut state = ThemeState::initialize(Some(ThemeMode::Dark), ThemeMode::Dark);
        assert!(!state.ambient_changed(ThemeMode::Light));
        assert_eq!(state.mode(), ThemeMode::Dark);
    }

    #[test]
    fn ambient_change_same_mode_is_noop() {
        let mut state = ThemeState::initialize(None, ThemeMode::Dark);
        assert!(!state.ambient_changed(ThemeMode::Dark));
    }

    #[test]
    fn colorfgbg_parsing() {
        assert_eq!(ambient_mode_from(Some("15;0")), ThemeMode::Dark);
        assert_eq!(ambient_mode_from(Some("15;default;8")), ThemeMode::Dark);
        assert_eq!(ambient_mode_from(Some("0;7")), ThemeMode::Light);
        assert_eq!(ambient_mode_from(Some("0;15")), ThemeMode::Light);
        assert_eq!(ambient_mode_from(Some("garbage")), ThemeMode::Dark);
        assert_eq!(ambient_mode_from(None), ThemeMode::Dark);
    }

    #[test]
    fn preference_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("theme.json");

        assert_eq!(load_preference(&path).unwrap(), None);

        save_preference(&path, ThemeMode::Light).unwrap();
        assert_eq!(load_preference(&path).unwrap(), Some(ThemeMode::Light));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(r#""theme": "light""#));
    }

    #[test]
    fn corrupt_preference_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{ theme: 42 }").unwrap();
        assert!(load_preference(&path).is_err());
    }
}
