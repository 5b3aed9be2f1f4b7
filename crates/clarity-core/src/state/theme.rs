//! Theme cell.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::storage::{KeyValueStorage, THEME_KEY, log_write_failure, read_or_none};
use crate::error::Result;

/// Display theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl Theme {
    /// Next theme in the light → dark → high-contrast rotation.
    pub fn cycled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::HighContrast,
            Theme::HighContrast => Theme::Light,
        }
    }

    /// Binary light/dark flip. High contrast counts as light, so it toggles
    /// to dark.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::HighContrast => Theme::Dark,
        }
    }
}

/// Source of the operating system's color scheme preference.
pub trait ColorSchemePreference: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

/// Preference fixed at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPreference {
    pub prefers_dark: bool,
}

impl ColorSchemePreference for StaticPreference {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

/// Holds the current theme and writes every change to persistent storage.
pub struct ThemeCell {
    storage: Arc<dyn KeyValueStorage>,
    theme: Theme,
}

impl ThemeCell {
    /// Loads the stored theme; unknown or missing values fall back to the
    /// system preference, then to light.
    pub fn load(storage: Arc<dyn KeyValueStorage>, preference: &dyn ColorSchemePreference) -> Self {
        let stored = read_or_none(storage.as_ref(), THEME_KEY)
            .and_then(|value| match value.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(_) => {
                    tracing::debug!(value = %value, "ignoring unknown stored theme");
                    None
                }
            });

        let theme = stored.unwrap_or(if preference.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        });

        Self { storage, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        let value: &'static str = theme.into();
        log_write_failure(THEME_KEY, self.storage.set(THEME_KEY, value))
    }

    pub fn set_light(&mut self) -> Result<()> {
        self.set(Theme::Light)
    }

    pub fn set_dark(&mut self) -> Result<()> {
        self.set(Theme::Dark)
    }

    pub fn set_high_contrast(&mut self) -> Result<()> {
        self.set(Theme::HighContrast)
    }

    pub fn cycle(&mut self) -> Result<Theme> {
        let next = self.theme.cycled();
        self.set(next)?;
        Ok(next)
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }

    /// Forgets the stored theme; the in-memory value stays until reload.
    pub fn clear(&mut self) -> Result<()> {
        log_write_failure(THEME_KEY, self.storage.remove(THEME_KEY))
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn is_light(&self) -> bool {
        self.theme == Theme::Light
    }

    pub fn is_high_contrast(&self) -> bool {
        self.theme == Theme::HighContrast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::MemoryStorage;

    fn cell_with(stored: Option<&str>, prefers_dark: bool) -> (ThemeCell, Arc<MemoryStorage>) {
        let storage = Arc::new(match stored {
            Some(value) => MemoryStorage::with_entries([(THEME_KEY, value)]),
            None => MemoryStorage::new(),
        });
        let cell = ThemeCell::load(storage.clone(), &StaticPreference { prefers_dark });
        (cell, storage)
    }

    #[test]
    fn test_default_is_light() {
        let (cell, _) = cell_with(None, false);
        assert_eq!(cell.theme(), Theme::Light);
    }

    #[test]
    fn test_system_preference_applies_without_stored_value() {
        let (cell, _) = cell_with(None, true);
        assert!(cell.is_dark());
    }

    #[test]
    fn test_stored_value_beats_system_preference() {
        let (cell, _) = cell_with(Some("high-contrast"), true);
        assert!(cell.is_high_contrast());
    }

    #[test]
    fn test_unknown_stored_value_falls_back() {
        let (cell, _) = cell_with(Some("sepia"), false);
        assert!(cell.is_light());
    }

    #[test]
    fn test_cycle_rotation() {
        let (mut cell, storage) = cell_with(None, false);
        assert_eq!(cell.cycle().unwrap(), Theme::Dark);
        assert_eq!(cell.cycle().unwrap(), Theme::HighContrast);
        assert_eq!(cell.cycle().unwrap(), Theme::Light);
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_never_visits_high_contrast() {
        let (mut cell, _) = cell_with(None, false);
        assert_eq!(cell.toggle().unwrap(), Theme::Dark);
        assert_eq!(cell.toggle().unwrap(), Theme::Light);
    }

    #[test]
    fn test_toggle_from_high_contrast_lands_on_dark() {
        let (mut cell, storage) = cell_with(None, false);
        cell.set_high_contrast().unwrap();
        assert_eq!(
            storage.get(THEME_KEY).unwrap().as_deref(),
            Some("high-contrast")
        );
        assert_eq!(cell.toggle().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_set_persists_and_reloads() {
        let (mut cell, storage) = cell_with(None, false);
        cell.set_dark().unwrap();
        let reloaded = ThemeCell::load(storage, &StaticPreference::default());
        assert!(reloaded.is_dark());
    }
}
