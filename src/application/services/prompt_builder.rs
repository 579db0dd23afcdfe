//! The two fixed instruction templates sent to the model.
//!
//! Extracted text and counts are embedded verbatim: no escaping, no validation.

pub fn flashcard_prompt(text: &str, card_count: i64) -> String {
    format!(
        r#"
You are an expert educational assistant. Your task is to generate flashcards based on the provided text.

REQUIREMENTS:
- Generate up to {card_count} flashcards.
- Each flashcard MUST have "question" and "answer".
- KEY: RETURN ONLY A JSON ARRAY. NO prose. NO markdown. NO labels.
- If fewer quality flashcards exist, return fewer.
- FORMAT:

[
  {{"question":"...", "answer":"..."}},
  {{"question":"...", "answer":"..."}}
]

TEXT:
---
{text}
---
"#
    )
}

pub fn quiz_prompt(text: &str, quiz_count: i64) -> String {
    format!(
        r#"
You are an expert quiz-maker.
Analyze the provided text and generate {quiz_count} multiple-choice quiz questions.

You MUST:
- Return a valid JSON list ONLY
- NO text before/after JSON
- Each question must contain:
  • "question"
  • "options" → list of 4 strings
  • "answer" → must be ONE of the options

Example:
[
  {{
    "question": "What is the primary function of a CPU?",
    "options": ["Store data", "Perform calculations", "Render graphics", "Connect to WiFi"],
    "answer": "Perform calculations"
  }}
]

TEXT:
---
{text}
---
"#
    )
}

