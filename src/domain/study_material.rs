use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A question/answer pair for study purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// A multiple-choice question. The model is asked for four options with
/// `answer` equal to one of them; neither is enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizQuestion {
    pub fn answer_is_an_option(&self) -> bool {
        self.options.iter().any(|o| o == &self.answer)
    }
}

/// Whatever arrays the model produced, element by element and uninspected.
/// Either list may be empty when the model output held no parseable array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub flashcards: Vec<Value>,
    pub quiz: Vec<Value>,
}

impl GenerationResult {
    /// Typed view of the flashcards; elements that don't fit the shape are skipped.
    pub fn typed_flashcards(&self) -> Vec<Flashcard> {
        typed(&self.flashcards)
    }

    /// Typed view of the quiz; elements that don't fit the shape are skipped.
    pub fn typed_quiz(&self) -> Vec<QuizQuestion> {
        typed(&self.quiz)
    }
}

fn typed<T: for<'de> Deserialize<'de>>(values: &[Value]) -> Vec<T> {
    values
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}
