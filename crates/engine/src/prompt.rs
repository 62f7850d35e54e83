//! Decision-request rendering.
//!
//! Every iteration the engine renders one flat text prompt: the tool
//! catalog in registration order, the caller-supplied history as
//! alternating `Human:`/`Assistant:` lines, the question, and the
//! accumulated trace as a `Thought`/`Action`/`Observation` log. The
//! response shape travels separately as a JSON schema on the request.

use reagent_core::decision::{ASK_USER, FINAL_ANSWER};
use reagent_core::tool::ToolSpec;
use reagent_core::trace::TraceEntry;
use reagent_core::turn::Turn;

use crate::state::RunState;

/// Renders the full decision request prompt for the current state.
pub fn render_prompt(specs: &[ToolSpec], state: &RunState) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are an agent that solves tasks step by step. Each step, pick exactly \
         one action: invoke a tool from the catalog, or finish.\n\
         Respond with a single JSON object with fields `thought`, `tool` and \
         `tool_input`.\n",
    );
    prompt.push_str(&format!(
        "Set `tool` to \"{FINAL_ANSWER}\" and put the answer text in `tool_input` \
         when you are done. Use the `{ASK_USER}` tool when you need more \
         information from the user.\n\n",
    ));

    prompt.push_str("## Tools\n");
    prompt.push_str(&render_catalog(specs));

    if !state.prior_turns.is_empty() {
        prompt.push_str("\n## Conversation so far\n");
        prompt.push_str(&render_history(&state.prior_turns));
    }

    prompt.push_str("\n## Question\n");
    prompt.push_str(&state.user_query);
    prompt.push('\n');

    if !state.trace.is_empty() {
        prompt.push_str("\n## Steps taken\n");
        prompt.push_str(&render_trace(&state.trace));
    }

    prompt
}

/// One line per tool, in registration order, schema included.
pub fn render_catalog(specs: &[ToolSpec]) -> String {
    let mut out = String::new();
    for spec in specs {
        out.push_str(&format!(
            "- {}: {} (input schema: {})\n",
            spec.name, spec.description, spec.input_schema
        ));
    }
    out
}

/// Alternating `Human:`/`Assistant:` lines, one pair per turn.
pub fn render_history(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|t| format!("Human: {}\nAssistant: {}", t.user, t.agent))
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

/// Flat ordered log of the completed iterations. The `Action` line is the
/// full decision re-rendered as its wire JSON.
pub fn render_trace(trace: &[TraceEntry]) -> String {
    let mut out = String::new();
    for entry in trace {
        out.push_str(&format!(
            "Thought: {}\nAction: {}\nObservation: {}\n",
            entry.thought,
            entry.action_json(),
            entry.observation
        ));
    }
    out
}
