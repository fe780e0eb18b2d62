use std::time::Duration;

use legal_assistant::application::ports::{LlmClient, LlmClientError};
use legal_assistant::infrastructure::llm::{GeminiClient, GenerationConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-2.0-flash";
const API_KEY: &str = "test-key";
const GENERATE_PATH: &str = "/models/gemini-2.0-flash:generateContent";

fn create_client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(&server.uri(), MODEL, API_KEY, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn given_successful_response_when_generating_then_joins_candidate_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", API_KEY))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Summarise this lease."}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "## SUMMARY"}, {"text": "\nTwo parties."}]}
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let text = client.generate("Summarise this lease.").await.unwrap();

    assert_eq!(text, "## SUMMARY\nTwo parties.");
}

#[tokio::test]
async fn given_generation_config_when_generating_then_sends_camel_case_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_partial_json(json!({
            "generationConfig": {"maxOutputTokens": 2048}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server).with_generation_config(GenerationConfig {
        temperature: None,
        max_output_tokens: Some(2048),
    });

    let text = client.generate("prompt").await.unwrap();

    assert_eq!(text, "ok");
}

#[tokio::test]
async fn given_too_many_requests_when_generating_then_returns_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = create_client(&server).generate("prompt").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_generating_then_returns_request_failed_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let result = create_client(&server).generate("prompt").await;

    match result {
        Err(LlmClientError::ApiRequestFailed(message)) => {
            assert!(message.contains("400"));
            assert!(message.contains("API key not valid"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn given_blocked_prompt_when_generating_then_returns_block_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let result = create_client(&server).generate("prompt").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(reason)) if reason == "SAFETY"));
}

#[tokio::test]
async fn given_non_json_body_when_generating_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = create_client(&server).generate("prompt").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_candidate_without_text_when_generating_then_returns_empty_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"finishReason": "MAX_TOKENS"}]
        })))
        .mount(&server)
        .await;

    let text = create_client(&server).generate("prompt").await.unwrap();

    assert!(text.is_empty());
}

#[test]
fn given_blank_api_key_when_creating_then_returns_missing_api_key() {
    let result = GeminiClient::new("http://localhost", MODEL, "  ", Duration::from_secs(5));

    assert!(matches!(result, Err(LlmClientError::MissingApiKey)));
}

#[test]
fn given_client_when_created_then_reports_model() {
    let client = GeminiClient::new("http://localhost/", MODEL, API_KEY, Duration::from_secs(5))
        .unwrap();

    assert_eq!(client.model(), MODEL);
}
