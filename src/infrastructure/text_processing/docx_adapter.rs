use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const MAIN_PART: &str = "word/document.xml";

/// WordprocessingML (.docx) text extraction.
///
/// Produces the text of each paragraph directly under `w:body`, joined with
/// newlines in document order. Paragraphs inside tables or text boxes are
/// not part of the body sequence and are skipped.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    /// The main document part, or `None` when the upload is not a readable DOCX container.
    fn read_main_part(data: &[u8]) -> Option<String> {
        let mut archive = match zip::ZipArchive::new(Cursor::new(data)) {
            Ok(archive) => archive,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open DOCX container, treating it as empty");
                return None;
            }
        };

        let mut part = match archive.by_name(MAIN_PART) {
            Ok(part) => part,
            Err(e) => {
                tracing::warn!(error = %e, part = MAIN_PART, "Missing main part, treating it as empty");
                return None;
            }
        };

        let mut xml = String::new();
        if let Err(e) = part.read_to_string(&mut xml) {
            tracing::warn!(error = %e, part = MAIN_PART, "Failed to read main part, treating it as empty");
            return None;
        }

        Some(xml)
    }

    /// Stops at the first XML error and keeps the paragraphs completed before it.
    fn body_paragraphs(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut paragraphs = Vec::new();
        let mut current: Option<String> = None;
        // Local names of the currently open elements.
        let mut open: Vec<Vec<u8>> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let name = e.local_name().as_ref().to_vec();
                    if name == b"p" && parent_is(&open, b"body") {
                        current = Some(String::new());
                    }
                    open.push(name);
                }
                Ok(Event::Empty(e)) => {
                    let name = e.local_name();
                    match name.as_ref() {
                        b"p" if parent_is(&open, b"body") => paragraphs.push(String::new()),
                        b"tab" if in_body_run(&open) => {
                            if let Some(text) = current.as_mut() {
                                text.push('\t');
                            }
                        }
                        b"br" | b"cr" if in_body_run(&open) => {
                            if let Some(text) = current.as_mut() {
                                text.push('\n');
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::Text(e)) => {
                    if parent_is(&open, b"t") && paragraph_depth(&open) == 1 {
                        if let Some(text) = current.as_mut() {
                            match e.unescape() {
                                Ok(unescaped) => text.push_str(&unescaped),
                                Err(err) => {
                                    tracing::warn!(error = %err, "Invalid text run, skipping it");
                                }
                            }
                        }
                    }
                }
                Ok(Event::End(e)) => {
                    open.pop();
                    if e.local_name().as_ref() == b"p" && parent_is(&open, b"body") {
                        if let Some(text) = current.take() {
                            paragraphs.push(text);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        position = reader.buffer_position(),
                        paragraphs = paragraphs.len(),
                        part = MAIN_PART,
                        "Malformed main part, keeping the text read so far"
                    );
                    break;
                }
            }
        }

        paragraphs
    }
}

fn parent_is(open: &[Vec<u8>], name: &[u8]) -> bool {
    open.last().is_some_and(|n| n.as_slice() == name)
}

fn paragraph_depth(open: &[Vec<u8>]) -> usize {
    open.iter().filter(|n| n.as_slice() == b"p").count()
}

fn in_body_run(open: &[Vec<u8>]) -> bool {
    parent_is(open, b"r") && paragraph_depth(open) == 1
}

#[async_trait]
impl FileLoader for DocxAdapter {
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
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let data_owned = data.to_vec();
        let paragraphs = tokio::task::spawn_blocking(move || {
            Self::read_main_part(&data_owned)
                .map(|xml| Self::body_paragraphs(&xml))
                .unwrap_or_default()
        })
        .await
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        Ok(paragraphs.join("\n"))
    }
}
