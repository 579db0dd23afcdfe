use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::application::services::prompt_builder::{flashcard_prompt, quiz_prompt};
use crate::application::services::response_extractor::extract_json_array;
use crate::domain::{Document, GenerationResult};
use crate::infrastructure::observability::sanitize_prompt;

pub struct GenerationService<F, L: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub card_count: i64,
    pub quiz_count: i64,
}

impl<F, L: ?Sized> GenerationService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>) -> Self {
        Self {
            file_loader,
            llm_client,
        }
    }

    /// Extracts the document's text and asks the model for flashcards, then a quiz.
    ///
    /// The two model calls run one after the other. Output without a
    /// parseable JSON array degrades to an empty list; transport failures abort.
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    pub async fn generate(
        &self,
        data: &[u8],
        document: &Document,
        request: GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let text = self
            .file_loader
            .extract_text(data, document)
            .await
            .map_err(GenerationError::Extraction)?;

        tracing::debug!(chars = text.len(), "Document text extracted");

        let flashcards = self
            .ask("flashcards", &flashcard_prompt(&text, request.card_count))
            .await?;
        let quiz = self
            .ask("quiz", &quiz_prompt(&text, request.quiz_count))
            .await?;

        let result = GenerationResult { flashcards, quiz };
        log_shape_mismatches(&result);

        tracing::info!(
            flashcards = result.flashcards.len(),
            quiz_questions = result.quiz.len(),
            "Study material generated"
        );

        Ok(result)
    }

    async fn ask(
        &self,
        section: &'static str,
        prompt: &str,
    ) -> Result<Vec<serde_json::Value>, GenerationError> {
        tracing::debug!(section, prompt = %sanitize_prompt(prompt), "Sending prompt to model");

        let raw = self
            .llm_client
            .complete(prompt)
            .await
            .map_err(GenerationError::Completion)?;

        tracing::debug!(section, raw_output = %raw, "Raw model output");

        let items = extract_json_array(&raw);
        if items.is_empty() {
            tracing::warn!(section, raw_output = %sanitize_prompt(&raw), "Model output yielded no items");
        }
        Ok(items)
    }
}

/// Items are returned as the model wrote them; this only reports what looks off.
fn log_shape_mismatches(result: &GenerationResult) {
    let malformed_flashcards = result.flashcards.len() - result.typed_flashcards().len();
    let quiz = result.typed_quiz();
    let malformed_quiz = result.quiz.len() - quiz.len();
    let answer_not_in_options = quiz.iter().filter(|q| !q.answer_is_an_option()).count();

    if malformed_flashcards > 0 || malformed_quiz > 0 || answer_not_in_options > 0 {
        tracing::warn!(
            malformed_flashcards,
            malformed_quiz,
            answer_not_in_options,
            "Model output does not match the requested shape"
        );
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("extraction: {0}")]
    Extraction(FileLoaderError),
    #[error("completion: {0}")]
    Completion(LlmClientError),
}
