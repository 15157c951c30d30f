//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, body::Body};

use elitecabs::api::AppState;
use elitecabs::api::app;
use elitecabs::core::AppConfig;

/// Config pointing the completion provider at `provider_url`, usually
/// a `mockito` server.
pub fn test_config(provider_url: &str, static_dir: &str) -> AppConfig {
    AppConfig {
        static_dir: static_dir.to_string(),
        business_name: String::from("Elite Cabs 24X7"),
        business_city: String::from("Mumbai"),
        support_phone: String::from("+91 70217 51691"),
        openai_model: String::from("gpt-4o"),
        openai_api_hostname: provider_url.to_string(),
        openai_api_key: String::from("test-api-key"),
        temperature: 0.7,
        max_tokens: 500,
    }
}

/// Creates a test application router that relays to `provider_url`.
pub fn test_app(provider_url: &str) -> Router {
    test_app_with_config(test_config(provider_url, "./does-not-exist"))
}

pub fn test_app_with_config(config: AppConfig) -> Router {
    let app_state = AppState::from_config(config).expect("Failed to build app state");
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    let body = body_to_string(body).await;
    serde_json::from_str(&body).expect("Body is not json")
}

/// A chat completion response with a single candidate.
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
