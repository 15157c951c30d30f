//! Stateless relay between a single user question and a completion
//! provider.
//!
//! Every call is composed of exactly two messages: the fixed system
//! instruction and the caller's message. Nothing from earlier calls is
//! kept or sent, so multi-turn context is left to the model.

use anyhow::{Error, Result};

use crate::openai::{BoxedCompletionProvider, Message, Role, SamplingParams};

/// Sent back when the provider returns no candidate.
pub const CANNED_REDIRECT: &str = "I apologize, but I can only assist with cab booking related queries. How can I help you with your taxi service needs?";

pub struct Relay {
    provider: BoxedCompletionProvider,
    system_prompt: String,
    params: SamplingParams,
}

impl Relay {
    pub fn new(
        provider: BoxedCompletionProvider,
        system_prompt: &str,
        params: SamplingParams,
    ) -> Self {
        Self {
            provider,
            system_prompt: system_prompt.to_string(),
            params,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Build the provider transcript for one question.
    pub fn compose(&self, message: &str) -> Vec<Message> {
        vec![
            Message::new(Role::System, &self.system_prompt),
            Message::new(Role::User, message),
        ]
    }

    /// Ask the provider a single question. Provider failures are
    /// returned as-is and never retried.
    pub async fn respond(&self, message: &str) -> Result<String, Error> {
        let messages = self.compose(message);
        let reply = self.provider.complete(&messages, self.params).await?;

        match reply {
            Some(text) => Ok(text),
            None => {
                tracing::warn!("Provider returned no candidates, sending canned redirect");
                Ok(CANNED_REDIRECT.to_string())
            }
        }
    }
}
