//! Pause-for-input tool.
//!
//! The decision loop intercepts this tool by name and terminates the run
//! with the question instead of invoking it, so the caller can collect an
//! answer and start a fresh run. The invoke path below exists for direct
//! registry use and formats the question the same way the loop does.

use async_trait::async_trait;
use reagent_core::{format_question, value_to_text, Tool, ToolError, ASK_USER};

/// Asks the human a clarifying question instead of guessing.
pub struct AskUserTool;

#[async_trait]
impl Tool for AskUserTool {
    fn name(&self) -> &str {
        ASK_USER
    }

    fn description(&self) -> &str {
        "Ask the user a clarifying question when the request is ambiguous or missing details. The run pauses until they answer."
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "question": {
                    "type": "string",
                    "description": "The question to put to the user"
                }
            },
            "required": ["question"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<String, ToolError> {
        let question = match &input {
            serde_json::Value::Object(map) => match map.get("question") {
                Some(q) => value_to_text(q),
                None => return Err(ToolError::InvalidInput("Missing 'question' field".into())),
            },
            other => value_to_text(other),
        };
        Ok(format_question(&question))
    }
}
