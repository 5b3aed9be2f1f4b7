//! GatewayAnalysisClient - calls an OpenAI-compatible chat completions API.
//!
//! Sends the analysis prompt with a single forced function tool and parses
//! the tool call arguments as the analysis payload.

use std::time::Duration;

use async_trait::async_trait;
use clarity_core::analysis::{Analysis, AnalysisService, parse_analysis};
use clarity_core::error::{ClarityError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompt::{SYSTEM_PROMPT, analysis_tool, tool_choice, user_message};
use crate::{GENERIC_SERVICE_ERROR, build_http_client, transport_error};

pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please wait a moment and try again.";
pub const USAGE_LIMIT_MESSAGE: &str = "AI usage limit reached. Please try again later.";
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from AI";

#[derive(Clone)]
pub struct GatewayAnalysisClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GatewayAnalysisClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    fn build_request<'a>(&'a self, text: &str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_message(text),
                },
            ],
            tools: vec![analysis_tool()],
            tool_choice: tool_choice(),
        }
    }
}

#[async_trait]
impl AnalysisService for GatewayAnalysisClient {
    async fn analyze(&self, text: &str) -> Result<Analysis> {
        let body = self.build_request(text);

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "sending gateway analysis request");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| transport_error("Analysis request failed", err))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read gateway error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            tracing::warn!(error = %err, "failed to parse gateway response");
            ClarityError::service(INVALID_RESPONSE_MESSAGE)
        })?;

        let arguments = extract_tool_arguments(parsed)?;
        let analysis = parse_analysis(&arguments).map_err(|err| {
            tracing::warn!(error = %err, "tool call arguments are not a valid analysis");
            ClarityError::service(INVALID_RESPONSE_MESSAGE)
        })?;

        tracing::info!(tone = %analysis.overall_tone, "analysis received");
        Ok(analysis)
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    tools: Vec<Value>,
    tool_choice: Value,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Deserialize)]
struct FunctionCall {
    #[serde(default)]
    arguments: Option<String>,
}

fn extract_tool_arguments(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.tool_calls)
        .and_then(|calls| calls.into_iter().next())
        .and_then(|call| call.function.arguments)
        .filter(|arguments| !arguments.trim().is_empty())
        .ok_or_else(|| {
            tracing::warn!("gateway response carried no tool call");
            ClarityError::service(INVALID_RESPONSE_MESSAGE)
        })
}

fn map_http_error(status: StatusCode, body: &str) -> ClarityError {
    let message = match status {
        StatusCode::TOO_MANY_REQUESTS => RATE_LIMIT_MESSAGE,
        StatusCode::PAYMENT_REQUIRED => USAGE_LIMIT_MESSAGE,
        _ => {
            tracing::error!(status = status.as_u16(), body = %body, "AI gateway error");
            GENERIC_SERVICE_ERROR
        }
    };
    ClarityError::service_with_status(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_http_error_messages() {
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, "");
        assert_eq!(err.user_message(), RATE_LIMIT_MESSAGE);

        let err = map_http_error(StatusCode::PAYMENT_REQUIRED, "");
        assert_eq!(err.user_message(), USAGE_LIMIT_MESSAGE);

        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(
            err,
            ClarityError::Service {
                status: Some(502),
                ..
            }
        ));
    }

    #[test]
    fn test_extract_tool_arguments_requires_tool_call() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"hello"}}]}"#).unwrap();
        assert!(extract_tool_arguments(response).is_err());
    }

    #[test]
    fn test_request_forces_the_tool() {
        let client =
            GatewayAnalysisClient::new("http://localhost", "key", "m", Duration::from_secs(1))
                .unwrap();
        let body = serde_json::to_value(client.build_request("text")).unwrap();
        assert_eq!(body["model"], "m");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["tool_choice"]["function"]["name"], "provide_analysis");
    }
}
