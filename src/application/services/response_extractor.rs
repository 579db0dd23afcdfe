use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Greedy, dot-matches-newline: from the first `[` to the last `]`.
static JSON_ARRAY_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

/// Pulls the JSON array out of free-form model output.
///
/// No bracketed span, or a span that is not strictly valid JSON, yields an
/// empty list. Elements of a parsed array are returned as-is.
pub fn extract_json_array(raw: &str) -> Vec<Value> {
    let Some(span) = JSON_ARRAY_SPAN.find(raw) else {
        tracing::warn!("No JSON array found in model output");
        return Vec::new();
    };

    match serde_json::from_str::<Vec<Value>>(span.as_str()) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "JSON parsing of model output failed");
            Vec::new()
        }
    }
}

