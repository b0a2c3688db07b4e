/// Injection planning and outcome classification
///
/// The plan is computed here and serialized for the page-world executor in
/// the glue, which interprets it without any policy of its own: which
/// selectors to try, how long to wait, which events to dispatch and in what
/// order are all decided on this side.

use serde::{Deserialize, Serialize};

/// Bounded poll for the message input element.
///
/// The input is rendered by the page's own framework some time after the
/// load event, so a single existence check races against rendering; the
/// executor re-checks every `poll_interval_ms` until `timeout_ms` is spent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputWait {
    pub timeout_ms: u32,
    pub poll_interval_ms: u32,
}

/// One synthetic keyboard event in the Enter-key fallback sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyEventSpec {
    /// Event type: "keydown", "keypress" or "keyup".
    pub event: String,
    pub key: String,
    pub code: String,
    pub key_code: u32,
}

impl KeyEventSpec {
    fn enter(event: &str) -> KeyEventSpec {
        KeyEventSpec {
            event: event.to_string(),
            key: "Enter".to_string(),
            code: "Enter".to_string(),
            key_code: 13,
        }
    }
}

/// Everything the page-world executor needs to fill and submit the chat input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InjectionPlan {
    /// Candidate selectors for the message input, tried in order.
    pub input_selectors: Vec<String>,
    /// Delay after load-complete before touching the DOM at all.
    pub settle_delay_ms: u32,
    pub input_wait: InputWait,
    /// Delay between writing the text and dispatching a form submit.
    pub pre_submit_delay_ms: u32,
    /// Enter-key events dispatched when the input has no enclosing form.
    pub key_sequence: Vec<KeyEventSpec>,
    pub inter_key_delay_ms: u32,
    /// Copy the query to the clipboard when the input never appears.
    pub clipboard_fallback: bool,
    /// Last resort: submit on any enclosing form, then keydown Enter on the
    /// document itself.
    pub document_fallback: bool,
}

impl InjectionPlan {
    /// Plan for the ChatGPT message input.
    pub fn chat_input() -> InjectionPlan {
        InjectionPlan {
            input_selectors: vec![
                "div#prompt-textarea".to_string(),
                "div.ProseMirror[contenteditable=\"true\"]".to_string(),
            ],
            settle_delay_ms: 1000,
            input_wait: InputWait {
                timeout_ms: 25_000,
                poll_interval_ms: 250,
            },
            pre_submit_delay_ms: 150,
            key_sequence: vec![
                KeyEventSpec::enter("keydown"),
                KeyEventSpec::enter("keypress"),
                KeyEventSpec::enter("keyup"),
            ],
            inter_key_delay_ms: 100,
            clipboard_fallback: true,
            document_fallback: true,
        }
    }
}

impl Default for InjectionPlan {
    fn default() -> Self {
        Self::chat_input()
    }
}

/// Result reason reported by the executor when no input element appeared.
pub const REASON_INPUT_NOT_FOUND: &str = "input_not_found";

/// What became of one injection attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum InjectionOutcome {
    /// Text written and a form submit dispatched.
    Submitted,
    /// Text written; Enter-key fallbacks dispatched but actual submission
    /// cannot be verified from outside the page.
    SubmitUnverified,
    /// No input element appeared within the wait budget. No input or submit
    /// events were dispatched.
    InputNotFound { clipboard_copied: bool },
    /// The injection itself was rejected (permissions, CSP) or the page
    /// returned something unrecognizable.
    Failed { error: String },
}

impl InjectionOutcome {
    /// Classify the value the executor returned.
    ///
    /// Expected shapes:
    ///   { ok: true, submitted: bool }
    ///   { ok: false, reason: "input_not_found", clipboardCopied: bool }
    ///   { ok: false, error: "..." }
    /// Anything else maps to `Failed`.
    pub fn from_result(value: &serde_json::Value) -> InjectionOutcome {
        match value.get("ok").and_then(|v| v.as_bool()) {
            Some(true) => {
                let submitted = value
                    .get("submitted")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false);
                if submitted {
                    InjectionOutcome::Submitted
                } else {
                    InjectionOutcome::SubmitUnverified
                }
            }
            Some(false) => {
                let reason = value.get("reason").and_then(|v| v.as_str());
                if reason == Some(REASON_INPUT_NOT_FOUND) {
                    InjectionOutcome::InputNotFound {
                        clipboard_copied: value
                            .get("clipboardCopied")
                            .and_then(|v| v.as_bool())
                            .unwrap_or(false),
                    }
                } else {
                    let error = value
                        .get("error")
                        .and_then(|v| v.as_str())
                        .unwrap_or("unknown injection error")
                        .to_string();
                    InjectionOutcome::Failed { error }
                }
            }
            None => InjectionOutcome::Failed {
                error: format!("malformed injection result: {}", value),
            },
        }
    }

    /// Whether text made it into the page.
    pub fn is_ok(&self) -> bool {
        matches!(
            self,
            InjectionOutcome::Submitted | InjectionOutcome::SubmitUnverified
        )
    }

    /// One-line description for the console log.
    pub fn describe(&self) -> String {
        match self {
            InjectionOutcome::Submitted => "query injected and submitted".to_string(),
            InjectionOutcome::SubmitUnverified => {
                "query injected, submission unverified".to_string()
            }
            InjectionOutcome::InputNotFound { clipboard_copied: true } => {
                "chat input not found, query copied to clipboard".to_string()
            }
            InjectionOutcome::InputNotFound { clipboard_copied: false } => {
                "chat input not found, clipboard copy failed".to_string()
            }
            InjectionOutcome::Failed { error } => format!("injection failed: {}", error),
        }
    }
}
