//! Analysis service clients.
//!
//! - [`ProxyAnalysisClient`]: the proxy contract (`{ text }` in,
//!   `{ analysis }` or `{ error }` out)
//! - [`GatewayAnalysisClient`]: direct OpenAI-compatible tool call

pub mod gateway_client;
pub mod prompt;
pub mod proxy_client;

use std::sync::Arc;
use std::time::Duration;

use clarity_core::analysis::AnalysisService;
use clarity_core::config::{ServiceConfig, ServiceMode};
use clarity_core::error::{ClarityError, Result};
use reqwest::Client;

pub use gateway_client::GatewayAnalysisClient;
pub use proxy_client::ProxyAnalysisClient;

/// Message used when the upstream gives no usable error text.
pub const GENERIC_SERVICE_ERROR: &str = "Failed to analyze text";

pub(crate) fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClarityError::internal(format!("Failed to build HTTP client: {}", e)))
}

pub(crate) fn transport_error(context: &str, err: reqwest::Error) -> ClarityError {
    tracing::warn!(error = %err, timeout = err.is_timeout(), "{}", context);
    ClarityError::service(format!("{}: {}", context, err))
}

/// Builds the client selected by `config.mode`.
pub fn build_service(config: &ServiceConfig) -> Result<Arc<dyn AnalysisService>> {
    let timeout = Duration::from_secs(config.timeout_secs());

    match config.mode {
        ServiceMode::Proxy => {
            let mut client = ProxyAnalysisClient::new(config.endpoint(), timeout)?;
            if let Some(key) = config.api_key() {
                client = client.with_api_key(key);
            }
            Ok(Arc::new(client))
        }
        ServiceMode::Gateway => {
            let key = config.api_key().ok_or_else(|| {
                ClarityError::config(
                    "Gateway mode needs an API key: set service.api_key in config.toml or CLARITY_API_KEY",
                )
            })?;
            Ok(Arc::new(GatewayAnalysisClient::new(
                config.endpoint(),
                key,
                config.model(),
                timeout,
            )?))
        }
    }
}
