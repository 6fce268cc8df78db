//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::util::ServiceExt;

use tutor::api::AppState;
use tutor::api::app;
use tutor::core::{AppConfig, Provider};

/// Creates a test application router whose chat service is an OpenAI
/// compatible API at `api_hostname`, usually a `mockito` server.
pub fn test_app(api_hostname: &str) -> Router {
    let app_config = AppConfig {
        provider: Provider::OpenAi,
        api_hostname: api_hostname.to_string(),
        api_key: String::from("test-api-key"),
        model: String::from("gpt-4o"),
        system_prompt: String::from("You are an IB Biology tutor."),
    };
    let app_state = AppState::new(&app_config);
    app(Arc::new(RwLock::new(app_state)))
}

/// A chat completion response body with `content` as the reply.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}

/// Sends a request with an optional JSON body and returns the status
/// and the parsed JSON body (`Value::Null` when it isn't JSON).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let text = body_to_string(response.into_body()).await;
    (status, serde_json::from_str(&text).unwrap_or(Value::Null))
}

/// Creates a session and returns its id.
pub async fn create_session(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}
