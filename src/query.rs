/// Omnibox input handling: normalization and live suggestions

use serde::{Deserialize, Serialize};

/// A single omnibox suggestion, shaped for `suggest()` in the glue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub content: String,
    pub description: String,
}

/// Suggestion content offered when the user has typed nothing after the keyword.
pub const DEFAULT_SUGGESTION: &str = "Hi ChatGPT! Can you help me out?";

/// Normalize raw omnibox text before it reaches the navigator.
///
/// The navigator always receives the trimmed text, even when that leaves an
/// empty string (entering just the keyword opens the chat page with nothing
/// to inject).
pub fn normalize_query(input: &str) -> String {
    input.trim().to_string()
}

/// Build the suggestion list for the current omnibox text.
///
/// Two canned forms: an invitation to just open the chat page while the text
/// is empty, and an echo of the query once there is one.
pub fn suggestions_for(input: &str) -> Vec<Suggestion> {
    let q = input.trim();
    if q.is_empty() {
        vec![Suggestion {
            content: DEFAULT_SUGGESTION.to_string(),
            description: "Open ChatGPT".to_string(),
        }]
    } else {
        vec![Suggestion {
            content: q.to_string(),
            description: format!("Ask ChatGPT: {}", xml_escape(q)),
        }]
    }
}

/// Escape text for an omnibox suggestion description.
///
/// Chrome parses descriptions as XML and rejects suggestions containing a
/// raw `&`, `<`, or `>`.
pub fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
