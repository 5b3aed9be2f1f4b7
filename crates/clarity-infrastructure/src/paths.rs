//! Unified path management for clarity configuration and state files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/clarity/           # Config directory (platform config dir)
//! ├── config.toml              # Service configuration
//! ├── state.json               # Long-lived state (theme)
//! └── sessions/                # Session-scoped state
//!     └── <session-id>.json    # Font size, name, history
//! ```

use std::path::PathBuf;

use clarity_core::error::{ClarityError, Result};

const APP_DIR: &str = "clarity";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for ClarityError {
    fn from(err: PathError) -> Self {
        ClarityError::config(err.to_string())
    }
}

/// Resolves every file clarity reads or writes.
#[derive(Debug, Clone)]
pub struct ClarityPaths {
    root: PathBuf,
}

impl ClarityPaths {
    /// Uses `root` when given, otherwise `<platform config dir>/clarity`.
    pub fn new(root: Option<PathBuf>) -> std::result::Result<Self, PathError> {
        let root = match root {
            Some(root) => root,
            None => dirs::config_dir()
                .ok_or(PathError::ConfigDirNotFound)?
                .join(APP_DIR),
        };
        Ok(Self { root })
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// File backing the persistent storage scope.
    pub fn state_file(&self) -> PathBuf {
        self.root.join("state.json")
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.root.join("sessions")
    }

    /// File backing one session's storage scope.
    ///
    /// Session ids are restricted to ASCII alphanumerics, `-` and `_` so they
    /// cannot escape the sessions directory.
    pub fn session_file(&self, session_id: &str) -> Result<PathBuf> {
        let valid = !session_id.is_empty()
            && session_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ClarityError::config(format!(
                "Invalid session id '{}': use letters, digits, '-' or '_'",
                session_id
            )));
        }
        Ok(self.sessions_dir().join(format!("{}.json", session_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ClarityPaths {
        ClarityPaths::new(Some(PathBuf::from("/tmp/clarity-test"))).unwrap()
    }

    #[test]
    fn test_files_live_under_root() {
        let paths = paths();
        assert!(paths.config_file().ends_with("config.toml"));
        assert!(paths.state_file().starts_with(paths.root()));
        assert!(paths.sessions_dir().ends_with("sessions"));
    }

    #[test]
    fn test_session_file() {
        let file = paths().session_file("tab-1").unwrap();
        assert!(file.ends_with("sessions/tab-1.json"));
    }

    #[test]
    fn test_session_file_rejects_traversal() {
        assert!(paths().session_file("../state").is_err());
        assert!(paths().session_file("").is_err());
    }
}
