mod gemini_client;
mod llm_client_factory;
mod mock_llm_client;

pub use gemini_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient};
pub use llm_client_factory::{LlmClientFactory, LlmClientFactoryError};
pub use mock_llm_client::MockLlmClient;
