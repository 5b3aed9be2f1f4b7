pub mod analyze;
pub mod examples;
pub mod font;
pub mod history;
pub mod name;
pub mod session;
pub mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clarity_core::config::AppConfig;
use clarity_core::state::{SessionState, SystemClock};
use clarity_infrastructure::{ClarityPaths, ConfigStorage, EnvColorScheme, open_state_storage};

use crate::render::Style;

/// Where this invocation reads and writes: the resolved paths plus the
/// session id.
pub struct AppContext {
    pub paths: ClarityPaths,
    pub session_id: String,
}

impl AppContext {
    pub fn new(config_dir: Option<PathBuf>, session_id: String) -> Result<Self> {
        let paths = ClarityPaths::new(config_dir).context("Failed to resolve the clarity directory")?;
        tracing::debug!(root = %paths.root().display(), session = %session_id, "using clarity directory");
        Ok(Self { paths, session_id })
    }

    pub fn load_state(&self) -> Result<SessionState> {
        let storage = open_state_storage(&self.paths, &self.session_id)?;
        Ok(SessionState::load(
            &storage,
            &EnvColorScheme,
            Arc::new(SystemClock),
        ))
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        let storage = ConfigStorage::new(self.paths.config_file());
        storage
            .load()
            .with_context(|| format!("Failed to load {}", storage.path().display()))
    }

    /// Output style for the stored theme.
    pub fn style(&self, state: &SessionState, plain: bool) -> Style {
        Style::new(state.theme.theme(), plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_core::state::Theme;
    use tempfile::TempDir;

    fn context(dir: &TempDir, session: &str) -> AppContext {
        AppContext::new(Some(dir.path().to_path_buf()), session.to_string()).unwrap()
    }

    #[test]
    fn test_state_survives_between_invocations() {
        let dir = TempDir::new().unwrap();

        let mut state = context(&dir, "default").load_state().unwrap();
        state.theme.set(Theme::HighContrast).unwrap();
        state.font_size.increase().unwrap();

        let state = context(&dir, "default").load_state().unwrap();
        assert_eq!(state.theme.theme(), Theme::HighContrast);
        assert_eq!(state.font_size.size(), 18);
    }

    #[test]
    fn test_sessions_share_only_the_theme() {
        let dir = TempDir::new().unwrap();

        let mut state = context(&dir, "first").load_state().unwrap();
        state.theme.set(Theme::Dark).unwrap();
        state.personalization.update("Sam").unwrap();

        let other = context(&dir, "second").load_state().unwrap();
        assert_eq!(other.theme.theme(), Theme::Dark);
        assert!(!other.personalization.has_name());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = context(&dir, "default").load_config().unwrap();
        assert_eq!(config.service.timeout_secs(), 60);
    }
}
