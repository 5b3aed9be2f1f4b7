//! Configuration file loading.
//!
//! Reads `config.toml` and applies `CLARITY_*` environment overrides on top.

use std::fs;
use std::path::{Path, PathBuf};

use clarity_core::config::{AppConfig, ServiceMode};
use clarity_core::error::{ClarityError, Result};

pub const ENV_ENDPOINT: &str = "CLARITY_ENDPOINT";
pub const ENV_API_KEY: &str = "CLARITY_API_KEY";
pub const ENV_MODEL: &str = "CLARITY_MODEL";
pub const ENV_SERVICE_MODE: &str = "CLARITY_SERVICE_MODE";

pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file, or defaults when it is missing or empty.
    pub fn load_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        toml::from_str(&content).map_err(|e| {
            ClarityError::config(format!(
                "Failed to parse config file at {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Loads the file and applies process environment overrides.
    pub fn load(&self) -> Result<AppConfig> {
        let mut config = self.load_file()?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }
}

/// Applies overrides read through `lookup`. Blank values are ignored.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(mode) = get(ENV_SERVICE_MODE) {
        config.service.mode = mode.parse::<ServiceMode>().map_err(|_| {
            ClarityError::config(format!(
                "{} must be 'proxy' or 'gateway', got '{}'",
                ENV_SERVICE_MODE, mode
            ))
        })?;
    }
    if let Some(endpoint) = get(ENV_ENDPOINT) {
        config.service.endpoint = Some(endpoint);
    }
    if let Some(api_key) = get(ENV_API_KEY) {
        config.service.api_key = Some(api_key);
    }
    if let Some(model) = get(ENV_MODEL) {
        config.service.model = Some(model);
    }

    Ok(())
}
