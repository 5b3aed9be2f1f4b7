//! Configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every field has a
//! default so an absent file is a valid configuration.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const DEFAULT_PROXY_ENDPOINT: &str = "http://127.0.0.1:54321/functions/v1/analyze-text";
pub const DEFAULT_GATEWAY_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_GATEWAY_MODEL: &str = "gpt-4o";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// How the analysis service is reached.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ServiceMode {
    /// A thin proxy taking `{ "text" }` and answering `{ "analysis" }`.
    #[default]
    Proxy,
    /// An OpenAI-compatible chat completions endpoint, called directly.
    Gateway,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    #[serde(default)]
    pub mode: ServiceMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ServiceConfig {
    pub fn endpoint(&self) -> &str {
        match (&self.endpoint, self.mode) {
            (Some(endpoint), _) => endpoint,
            (None, ServiceMode::Proxy) => DEFAULT_PROXY_ENDPOINT,
            (None, ServiceMode::Gateway) => DEFAULT_GATEWAY_ENDPOINT,
        }
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_GATEWAY_MODEL)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
}
