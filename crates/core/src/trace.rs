//! The run trace — the append-only log of completed iterations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded iteration: the model's thought, the action it chose, and
/// the observation that came back.
///
/// Only non-terminal iterations are recorded — a final answer or an
/// ask-user decision returns before anything is appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEntry {
    pub thought: String,

    /// Name of the tool the decision selected.
    pub tool: String,

    /// The verbatim input the decision carried.
    pub tool_input: serde_json::Value,

    /// Tool output, or the error description standing in for it.
    pub observation: String,

    pub timestamp: DateTime<Utc>,
}

impl TraceEntry {
    pub fn new(
        thought: impl Into<String>,
        tool: impl Into<String>,
        tool_input: serde_json::Value,
        observation: impl Into<String>,
    ) -> Self {
        Self {
            thought: thought.into(),
            tool: tool.into(),
            tool_input,
            observation: observation.into(),
            timestamp: Utc::now(),
        }
    }

    /// The decision this entry recorded, re-rendered as its wire JSON.
    /// Used when the trace is folded back into the next decision request.
    pub fn action_json(&self) -> serde_json::Value {
        serde_json::json!({
            "thought": self.thought,
            "tool": self.tool,
            "tool_input": self.tool_input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_json_carries_the_full_decision() {
        let entry = TraceEntry::new(
            "compute it",
            "calculator",
            serde_json::json!("2+2"),
            "4",
        );
        let action = entry.action_json();
        assert_eq!(action["thought"], "compute it");
        assert_eq!(action["tool"], "calculator");
        assert_eq!(action["tool_input"], "2+2");
    }
}
