use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LlmClient;
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::{GeminiClient, MockLlmClient};

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("missing API key: the Gemini provider requires llm.api_key or GOOGLE_API_KEY")]
    MissingApiKey,
    #[error("client initialization failed: {0}")]
    InitializationFailed(String),
}

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        match settings.provider {
            LlmProvider::Gemini => {
                let key = Some(settings.api_key.clone())
                    .filter(|k| !k.is_empty())
                    .ok_or(LlmClientFactoryError::MissingApiKey)?;
                tracing::info!(
                    model = %settings.model,
                    base_url = %settings.base_url,
                    timeout_secs = ?settings.request_timeout_secs,
                    "Using Gemini model client"
                );
                let client = GeminiClient::new(
                    key,
                    &settings.base_url,
                    &settings.model,
                    settings.request_timeout_secs.map(Duration::from_secs),
                )
                .map_err(|e| LlmClientFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(client))
            }
            LlmProvider::Mock => {
                tracing::warn!("Using mock model client; responses are canned");
                Ok(Arc::new(MockLlmClient))
            }
        }
    }
}
