use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;

use crate::api::public::chat::{ChatRequest, ChatResponse};

/// Sends one question to a relay and returns its answer.
#[async_trait]
pub trait RelayClient {
    async fn send(&self, message: &str) -> Result<String, Error>;
}

/// Talks to the relay's HTTP endpoint.
#[derive(Clone, Debug)]
pub struct HttpRelayClient {
    base_url: String,
}

impl HttpRelayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches("/").to_string(),
        }
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn send(&self, message: &str) -> Result<String, Error> {
        let url = format!("{}/api/chat", self.base_url);
        let response = reqwest::Client::new()
            .post(url)
            .timeout(Duration::from_secs(60 * 2))
            .json(&ChatRequest::new(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Relay responded with {}", status));
        }

        let body: ChatResponse = response.json().await?;
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_send_returns_response_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .match_body(mockito::Matcher::Json(json!({"message": "Rates?"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"response": "Rates start at Rs 14/km."}"#)
            .create_async()
            .await;

        let client = HttpRelayClient::new(&format!("{}/", server.url()));
        let reply = client.send("Rates?").await.unwrap();

        mock.assert_async().await;
        assert_eq!(reply, "Rates start at Rs 14/km.");
    }

    #[tokio::test]
    async fn test_send_errors_on_failure_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/chat")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Failed to process your request"}"#)
            .create_async()
            .await;

        let client = HttpRelayClient::new(&server.url());
        assert!(client.send("Rates?").await.is_err());
    }

    #[tokio::test]
    async fn test_send_errors_without_response_field() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"answer": "wrong shape"}"#)
            .create_async()
            .await;

        let client = HttpRelayClient::new(&server.url());
        assert!(client.send("Rates?").await.is_err());
    }
}
