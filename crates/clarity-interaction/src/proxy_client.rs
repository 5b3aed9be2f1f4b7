//! ProxyAnalysisClient - calls the analysis proxy function.
//!
//! The proxy owns the model prompt; this client only sends `{ "text" }` and
//! reads back `{ "analysis" }` or `{ "error" }`.

use std::time::Duration;

use async_trait::async_trait;
use clarity_core::analysis::{Analysis, AnalysisService, AnalyzeReply, AnalyzeRequest};
use clarity_core::error::{ClarityError, Result};
use reqwest::Client;

use crate::{GENERIC_SERVICE_ERROR, build_http_client, transport_error};

#[derive(Clone)]
pub struct ProxyAnalysisClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ProxyAnalysisClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            endpoint: endpoint.into(),
            api_key: None,
        })
    }

    /// Sends `key` as bearer token and `apikey` header.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisService for ProxyAnalysisClient {
    async fn analyze(&self, text: &str) -> Result<Analysis> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { text });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key).header("apikey", key);
        }

        tracing::debug!(endpoint = %self.endpoint, chars = text.chars().count(), "sending analysis request");
        let response = request
            .send()
            .await
            .map_err(|err| transport_error("Analysis request failed", err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| transport_error("Failed to read analysis response", err))?;

        let reply = serde_json::from_str::<AnalyzeReply>(&body);

        if !status.is_success() {
            let message = reply
                .ok()
                .and_then(|reply| reply.error)
                .unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string());
            tracing::warn!(status = status.as_u16(), message = %message, "analysis proxy returned an error");
            return Err(ClarityError::service_with_status(status.as_u16(), message));
        }

        let reply = reply.map_err(|err| {
            tracing::warn!(error = %err, "unexpected analysis proxy response");
            ClarityError::service("Invalid response from AI")
        })?;

        let analysis = reply.into_result()?;
        tracing::info!(tone = %analysis.overall_tone, "analysis received");
        Ok(analysis)
    }
}
