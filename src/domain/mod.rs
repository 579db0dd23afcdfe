mod document;
mod document_id;
mod study_material;

pub use document::{ContentType, DOCX_MIME, Document};
pub use document_id::DocumentId;
pub use study_material::{Flashcard, GenerationResult, QuizQuestion};
