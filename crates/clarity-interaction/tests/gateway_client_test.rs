use std::time::Duration;

use clarity_core::analysis::{AnalysisService, FigureType};
use clarity_interaction::GatewayAnalysisClient;
use clarity_interaction::gateway_client::{
    INVALID_RESPONSE_MESSAGE, RATE_LIMIT_MESSAGE, USAGE_LIMIT_MESSAGE,
};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

fn client_for(server: &MockServer) -> GatewayAnalysisClient {
    GatewayAnalysisClient::new(
        format!("{}{}", server.uri(), COMPLETIONS_PATH),
        "test-key",
        "test-model",
        Duration::from_secs(5),
    )
    .unwrap()
}

fn tool_call_response(arguments: Value) -> Value {
    json!({
        "id": "chatcmpl-1",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": {
                        "name": "provide_analysis",
                        "arguments": arguments.to_string()
                    }
                }]
            },
            "finish_reason": "tool_calls"
        }]
    })
}

#[tokio::test]
async fn test_tool_call_arguments_become_analysis() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tool_call_response(json!({
            "overallTone": "Playful",
            "simplifiedExplanation": "It is raining very hard.",
            "hasSarcasm": false,
            "hasFigurativeLanguage": true,
            "sarcasmInstances": [],
            "figurativeLanguageInstances": [{
                "phrase": "raining cats and dogs",
                "type": "idiom",
                "literalMeaning": "Animals are falling from the sky",
                "intendedMeaning": "It is raining heavily",
                "explanation": "A common English idiom",
                "confidence": "high"
            }],
            "summary": "Just a colorful way to describe heavy rain."
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let analysis = client_for(&server)
        .analyze("It's raining cats and dogs")
        .await
        .unwrap();

    assert_eq!(analysis.overall_tone, "Playful");
    assert_eq!(
        analysis.simplified_explanation.as_deref(),
        Some("It is raining very hard.")
    );
    assert_eq!(
        analysis.figurative_instances[0].figure_type(),
        FigureType::Idiom
    );
}

#[tokio::test]
async fn test_request_carries_model_and_forced_tool() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(tool_call_response(json!({
            "overallTone": "Neutral",
            "summary": "Plain."
        }))))
        .mount(&server)
        .await;

    client_for(&server).analyze("hello").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["tool_choice"]["function"]["name"], "provide_analysis");
    assert!(
        body["messages"][1]["content"]
            .as_str()
            .unwrap()
            .contains("\"hello\"")
    );
}

#[tokio::test]
async fn test_rate_limit_and_usage_limit_messages() {
    for (status, expected) in [(429u16, RATE_LIMIT_MESSAGE), (402u16, USAGE_LIMIT_MESSAGE)] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("limited"))
            .mount(&server)
            .await;

        let err = client_for(&server).analyze("hello").await.unwrap_err();
        assert_eq!(err.user_message(), expected);
    }
}

#[tokio::test]
async fn test_other_status_is_generic_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("hello").await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to analyze text");
}

#[tokio::test]
async fn test_reply_without_tool_call_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Sure!" } }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("hello").await.unwrap_err();
    assert_eq!(err.user_message(), INVALID_RESPONSE_MESSAGE);
}

#[tokio::test]
async fn test_malformed_arguments_are_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "tool_calls": [{
                        "type": "function",
                        "function": { "name": "provide_analysis", "arguments": "{not json" }
                    }]
                }
            }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("hello").await.unwrap_err();
    assert_eq!(err.user_message(), INVALID_RESPONSE_MESSAGE);
}
