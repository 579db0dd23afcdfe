use crate::application::ports::{LlmClient, LlmClientError};

const MOCK_FLASHCARDS: &str = r#"[
  {"question": "What does this service generate?", "answer": "Flashcards and quiz questions"}
]"#;

const MOCK_QUIZ: &str = r#"[
  {
    "question": "Which format is NOT accepted for upload?",
    "options": ["PDF", "DOCX", "Plain text", "PNG"],
    "answer": "PNG"
  }
]"#;

/// Offline stand-in for the model. Answers quiz prompts with a quiz array
/// and everything else with a flashcard array.
pub struct MockLlmClient;

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        if prompt.contains("multiple-choice") {
            Ok(MOCK_QUIZ.to_string())
        } else {
            Ok(MOCK_FLASHCARDS.to_string())
        }
    }
}
