//! Integration tests for [`openai_client::OpenAIClient::create_response`] against a mock server.
//!
//! Uses mockito to stand in for `POST /responses`; checks the request shape (auth header, JSON
//! body) and how each kind of reply maps to text or [`openai_client::ApiError`].

use mockito::Matcher;
use openai_client::{ApiError, OpenAIClient, ResponsesRequest};
use serde_json::json;

const API_KEY: &str = "sk-test-0123456789abcdef";

fn request(instructions: Option<&str>) -> ResponsesRequest {
    ResponsesRequest {
        model: "gpt-5".to_string(),
        input: "user: Ana: hi\nassistant: Hello Ana".to_string(),
        instructions: instructions.map(str::to_string),
    }
}

fn client(server: &mockito::ServerGuard) -> OpenAIClient {
    OpenAIClient::with_base_url(API_KEY.to_string(), server.url())
}

/// **Test: Successful reply returns the first output_text; request carries bearer auth and JSON body.**
#[tokio::test]
async fn create_response_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/responses")
        .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "model": "gpt-5",
            "input": "user: Ana: hi\nassistant: Hello Ana",
            "instructions": "Be kind."
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id":"resp_1","output":[{"type":"message","role":"assistant","content":[{"type":"output_text","text":"Hello!"}]}]}"#,
        )
        .create_async()
        .await;

    let text = client(&server)
        .create_response(&request(Some("Be kind.")))
        .await
        .expect("success");

    assert_eq!(text, "Hello!");
    mock.assert_async().await;
}

/// **Test: Without instructions the field is absent from the body.**
#[tokio::test]
async fn create_response_omits_instructions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/responses")
        .match_body(Matcher::Json(json!({
            "model": "gpt-5",
            "input": "user: Ana: hi\nassistant: Hello Ana"
        })))
        .with_status(200)
        .with_body(r#"{"content":"From content"}"#)
        .create_async()
        .await;

    let text = client(&server).create_response(&request(None)).await.unwrap();

    assert_eq!(text, "From content");
    mock.assert_async().await;
}

/// **Test: A 200 body with an `error` object surfaces the API message verbatim.**
#[tokio::test]
async fn create_response_api_error_object() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/responses")
        .with_status(200)
        .with_body(r#"{"error":{"message":"rate limited"}}"#)
        .create_async()
        .await;

    let err = client(&server).create_response(&request(None)).await.unwrap_err();

    assert_eq!(err, ApiError::Api("rate limited".to_string()));
    assert_eq!(err.to_string(), "rate limited");
}

/// **Test: Non-2xx status becomes an Http error carrying the status and the API message.**
#[tokio::test]
async fn create_response_http_error_with_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/responses")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
        .create_async()
        .await;

    let err = client(&server).create_response(&request(None)).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 401,
            message: "Incorrect API key provided".to_string()
        }
    );
    assert!(err.to_string().contains("401"));
}

/// **Test: Non-2xx without a JSON body falls back to the status reason.**
#[tokio::test]
async fn create_response_http_error_plain_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/responses")
        .with_status(503)
        .with_body("upstream down")
        .create_async()
        .await;

    let err = client(&server).create_response(&request(None)).await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP Error: 503 - Service Unavailable");
}

/// **Test: A 200 body without output text is MissingContent; non-JSON is InvalidBody.**
#[tokio::test]
async fn create_response_missing_or_invalid_content() {
    let mut server = mockito::Server::new_async().await;
    let _empty = server
        .mock("POST", "/responses")
        .with_status(200)
        .with_body(r#"{"output":[{"type":"reasoning"}]}"#)
        .create_async()
        .await;

    let err = client(&server).create_response(&request(None)).await.unwrap_err();
    assert_eq!(err, ApiError::MissingContent);

    let mut server = mockito::Server::new_async().await;
    let _garbage = server
        .mock("POST", "/responses")
        .with_status(200)
        .with_body("<html>")
        .create_async()
        .await;

    let err = client(&server).create_response(&request(None)).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidBody(_)));
}

/// **Test: Connection refused is a Transport error.**
#[tokio::test]
async fn create_response_transport_error() {
    let client = OpenAIClient::with_base_url(API_KEY.to_string(), "http://127.0.0.1:1".to_string());

    let err = client.create_response(&request(None)).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}
