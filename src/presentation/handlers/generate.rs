use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient};
use crate::application::services::{GenerationError, GenerationRequest};
use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

struct UploadedFile {
    filename: String,
    content_type: String,
    data: Vec<u8>,
}

#[derive(Default)]
struct GenerateForm {
    file: Option<UploadedFile>,
    card_count: Option<String>,
    quiz_count: Option<String>,
}

async fn read_text(field: Field<'_>) -> Result<String, Response> {
    field.text().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read form field");
        error_response(e.status(), format!("Failed to read multipart: {}", e))
    })
}

async fn read_form(multipart: &mut Multipart) -> Result<GenerateForm, Response> {
    let mut form = GenerateForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    e.status(),
                    format!("Failed to read multipart: {}", e),
                ));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to read file bytes");
                    error_response(e.status(), format!("Failed to read file: {}", e))
                })?;
                form.file = Some(UploadedFile {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "cardCount" => form.card_count = Some(read_text(field).await?),
            "quizCount" => form.quiz_count = Some(read_text(field).await?),
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}

/// Any integer is accepted; the value goes into the prompt as given.
fn parse_count(name: &str, raw: &str) -> Result<i64, Response> {
    raw.trim().parse().map_err(|_| {
        tracing::warn!(field = name, value = %raw, "Invalid count");
        error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("{} must be an integer", name),
        )
    })
}

/// `POST /api/generate`: multipart `file`, `cardCount` and optional `quizCount`.
#[tracing::instrument(skip(state, multipart))]
pub async fn generate_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static + ?Sized,
{
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let Some(file) = form.file else {
        tracing::warn!("Generate request with no file");
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "Field required: file");
    };

    let card_count = match form.card_count.as_deref() {
        Some(raw) => match parse_count("cardCount", raw) {
            Ok(count) => count,
            Err(response) => return response,
        },
        None => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, "Field required: cardCount");
        }
    };

    let quiz_count = match form.quiz_count.as_deref() {
        Some(raw) => match parse_count("quizCount", raw) {
            Ok(count) => count,
            Err(response) => return response,
        },
        None => state.settings.generation.default_quiz_count,
    };

    tracing::debug!(
        filename = %file.filename,
        content_type = %file.content_type,
        bytes = file.data.len(),
        card_count,
        quiz_count,
        "Processing generate request"
    );

    let Some(content_type) = ContentType::from_mime(&file.content_type) else {
        tracing::warn!(content_type = %file.content_type, "Unsupported content type");
        return error_response(StatusCode::BAD_REQUEST, "Unsupported file type");
    };

    let document = Document::new(file.filename, content_type, file.data.len() as u64);
    let request = GenerationRequest {
        card_count,
        quiz_count,
    };

    match state
        .generation_service
        .generate(&file.data, &document, request)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(GenerationError::Extraction(FileLoaderError::UnsupportedContentType(ct))) => {
            tracing::warn!(content_type = %ct, "No extractor for content type");
            error_response(StatusCode::BAD_REQUEST, "Unsupported file type")
        }
        Err(GenerationError::Extraction(e)) => {
            tracing::error!(error = %e, "Text extraction failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Could not extract text: {}", e),
            )
        }
        Err(e @ GenerationError::Completion(_)) => {
            tracing::error!(error = %e, "Generation failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Generation failed: {}", e),
            )
        }
    }
}
