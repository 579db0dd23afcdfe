mod generation_service;
pub mod prompt_builder;
pub mod response_extractor;

pub use generation_service::{GenerationError, GenerationRequest, GenerationService};
pub use prompt_builder::{flashcard_prompt, quiz_prompt};
pub use response_extractor::extract_json_array;
