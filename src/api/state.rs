use anyhow::Result;

use crate::ai::Relay;
use crate::ai::prompt::cab_booking_system_prompt;
use crate::core::AppConfig;
use crate::openai::{BoxedCompletionProvider, OpenAiProvider, SamplingParams};

/// Shared by every request. Nothing in here changes after startup so
/// handlers only ever need a shared reference.
pub struct AppState {
    pub relay: Relay,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(relay: Relay, config: AppConfig) -> Self {
        Self { relay, config }
    }

    /// Build the state with the provider described by `config`.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let provider = OpenAiProvider::new(
            &config.openai_api_hostname,
            &config.openai_api_key,
            &config.openai_model,
        );
        Self::with_provider(Box::new(provider), config)
    }

    /// Build the state with a specific completion provider.
    pub fn with_provider(provider: BoxedCompletionProvider, config: AppConfig) -> Result<Self> {
        let system_prompt =
            cab_booking_system_prompt(&config.business_name, &config.business_city)?;
        let params = SamplingParams {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };
        let relay = Relay::new(provider, &system_prompt, params);
        Ok(Self::new(relay, config))
    }
}
