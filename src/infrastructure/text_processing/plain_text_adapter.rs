use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// UTF-8 text uploads. Bytes after the first invalid sequence are dropped.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
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
        if document.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        match std::str::from_utf8(data) {
            Ok(text) => Ok(text.to_string()),
            Err(e) => {
                let valid = &data[..e.valid_up_to()];
                tracing::warn!(
                    error = %e,
                    kept_bytes = valid.len(),
                    total_bytes = data.len(),
                    "Text upload is not valid UTF-8, keeping the readable prefix"
                );
                Ok(String::from_utf8_lossy(valid).into_owned())
            }
        }
    }
}
