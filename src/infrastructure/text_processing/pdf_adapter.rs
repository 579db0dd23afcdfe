use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use tempfile::NamedTempFile;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Page texts in order; a page that yields nothing contributes nothing.
    ///
    /// A file that cannot be parsed as a PDF yields no pages.
    fn extract_pages(temp_file: NamedTempFile) -> (usize, String) {
        let mut doc = match PdfDocument::open(temp_file.path()) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse PDF, treating it as empty");
                return (0, String::new());
            }
        };

        let page_count = match doc.page_count() {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read PDF page count, treating it as empty");
                return (0, String::new());
            }
        };

        let mut text = String::new();
        for page_index in 0..page_count {
            text.push_str(&doc.extract_text(page_index).unwrap_or_default());
        }

        (page_count, text)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let mut temp_file = NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        // The blocking task owns the temp file, so it outlives a timed-out await.
        let (page_count, text) = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(temp_file)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?;

        tracing::info!(page_count, chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
