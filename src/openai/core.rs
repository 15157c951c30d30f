use std::time::Duration;

use anyhow::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    // Providers send `null` content for refusals and tool calls
    pub content: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: Some(content.to_string()),
        }
    }
}

/// Fixed sampling parameters sent with every completion request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

// Object {
//     "id": String("chatcmpl-123"),
//     "choices": Array [
//         Object {
//             "index": Number(0),
//             "message": Object {
//                 "role": String("assistant"),
//                 "content": String("You can book a cab by ..."),
//             },
//             "finish_reason": String("stop")
//         }
//     ]
// }
#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

impl CompletionResponse {
    /// Text of the first candidate, if the provider produced one with
    /// any content.
    fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
    }
}

/// Anything that can turn a list of messages into a single reply.
///
/// `Ok(None)` means the provider answered but gave no usable
/// candidate. Transport failures, error statuses, and unparseable
/// bodies are all `Err`.
#[async_trait]
pub trait CompletionProvider {
    async fn complete(
        &self,
        messages: &[Message],
        params: SamplingParams,
    ) -> Result<Option<String>, Error>;
}

pub type BoxedCompletionProvider = Box<dyn CompletionProvider + Send + Sync + 'static>;

/// Completion provider for any OpenAI compatible chat completions API.
#[derive(Clone, Debug)]
pub struct OpenAiProvider {
    api_hostname: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        messages: &[Message],
        params: SamplingParams,
    ) -> Result<Option<String>, Error> {
        let payload = json!({
            "model": self.model,
            "messages": messages,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });
        let url = format!(
            "{}/v1/chat/completions",
            self.api_hostname.trim_end_matches("/")
        );
        let response: CompletionResponse = reqwest::Client::new()
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .timeout(Duration::from_secs(60 * 2))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.first_content())
    }
}
