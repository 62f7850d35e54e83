//! The structured decision contract.
//!
//! Each loop iteration the completion capability returns exactly one
//! decision as a flat JSON object `{ thought, tool, tool_input }`. The
//! `tool` field is enum-constrained on the provider side to the registry's
//! names plus the literal `"Final Answer"`; `tool_input` is unconstrained
//! and passed through verbatim to whichever branch consumes it.
//!
//! [`Decision::from_value`] is the single validation point: a response that
//! fails it is a hard error for that iteration, never repaired or retried.

use serde::{Deserialize, Serialize};

use crate::error::DecisionError;

/// Reserved `tool` value that terminates the run with a final answer.
pub const FINAL_ANSWER: &str = "Final Answer";

/// Reserved tool name that pauses the run and hands a question back to the
/// caller. Unlike [`FINAL_ANSWER`] this names a real registry entry; the
/// engine intercepts it before invocation.
pub const ASK_USER: &str = "ask_user";

/// One structured decision per loop iteration.
///
/// Constructed fresh each iteration from the capability's response,
/// consumed immediately, never persisted beyond the current run.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Free-text rationale. Opaque: recorded in the trace, never parsed.
    pub thought: String,
    pub action: Action,
}

/// What the decision asks the engine to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Invoke the named tool with the verbatim input value.
    Tool {
        name: String,
        input: serde_json::Value,
    },
    /// Terminate the run successfully with this text.
    FinalAnswer(String),
}

/// Wire shape of a decision response. All three fields are required;
/// `tool_input` accepts any JSON value.
#[derive(Debug, Deserialize, Serialize)]
struct RawDecision {
    thought: String,
    tool: String,
    tool_input: serde_json::Value,
}

impl Decision {
    /// Validates a raw provider response against the decision shape.
    ///
    /// Structural validation only: `thought` and `tool` must be strings and
    /// `tool_input` must be present. Whether `tool` names a registered tool
    /// is a dispatch-time concern — an unknown name is recoverable, a bad
    /// shape is not.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DecisionError> {
        let raw: RawDecision =
            serde_json::from_value(value).map_err(|e| DecisionError::Shape(e.to_string()))?;

        let action = if raw.tool == FINAL_ANSWER {
            Action::FinalAnswer(value_to_text(&raw.tool_input))
        } else {
            Action::Tool {
                name: raw.tool,
                input: raw.tool_input,
            }
        };

        Ok(Decision {
            thought: raw.thought,
            action,
        })
    }
}

/// Renders a `tool_input` value as plain text: strings pass through
/// unquoted, anything else keeps its JSON rendering.
pub fn value_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Formats the question handed back to the caller on the ask-user branch.
pub fn format_question(text: &str) -> String {
    format!("[Question for user] {text}")
}

/// Builds the JSON schema a decision response must conform to.
///
/// `tool` is constrained to the registered names plus the
/// [`FINAL_ANSWER`] literal; `tool_input` is deliberately left without a
/// type so string and structured inputs both validate.
pub fn decision_schema(tool_names: &[String]) -> serde_json::Value {
    let mut allowed: Vec<String> = tool_names.to_vec();
    allowed.push(FINAL_ANSWER.to_string());

    serde_json::json!({
        "type": "object",
        "properties": {
            "thought": {
                "type": "string",
                "description": "Reasoning about the current state and what to do next"
            },
            "tool": {
                "type": "string",
                "enum": allowed,
                "description": "The tool to invoke, or 'Final Answer' to finish"
            },
            "tool_input": {
                "description": "Input for the tool, or the final answer text"
            }
        },
        "required": ["thought", "tool", "tool_input"]
    })
}
