//! Terminal color scheme detection.

use clarity_core::state::ColorSchemePreference;

/// Explicit override: `1`/`true`/`dark` or `0`/`false`/`light`.
pub const ENV_PREFERS_DARK: &str = "CLARITY_PREFERS_DARK";

/// Reads the dark-mode preference from the environment.
///
/// `CLARITY_PREFERS_DARK` wins; otherwise the `COLORFGBG` convention set by
/// many terminals (`"fg;bg"`) is consulted, where a background color index
/// of 0-6 or 8 means a dark background.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorScheme;

impl ColorSchemePreference for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        let explicit = std::env::var(ENV_PREFERS_DARK).ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        detect_dark(explicit.as_deref(), colorfgbg.as_deref())
    }
}

pub fn detect_dark(explicit: Option<&str>, colorfgbg: Option<&str>) -> bool {
    if let Some(value) = explicit {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "dark" => return true,
            "0" | "false" | "light" => return false,
            _ => {}
        }
    }

    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}
