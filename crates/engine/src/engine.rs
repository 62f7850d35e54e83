//! The decision engine — one bounded iterate-until-done loop per run.
//!
//! Each iteration requests exactly one structured decision, branches on
//! it, and either terminates or records a trace entry and goes around
//! again. Four terminal states: final answer, awaiting user, iteration
//! cap, engine error.
//!
//! # Failure semantics
//!
//! Deliberately asymmetric. Provider failures and decision-shape
//! violations abort the run — there is no way to continue without a
//! decision — and surface as the `EngineError` outcome. Tool failures
//! (unknown name, invocation error, timeout) fold into the trace as
//! observations and the loop continues; the next request carries the
//! failure text so the model can route around it.

use std::sync::Arc;
use std::time::Duration;

use reagent_core::decision::{
    decision_schema, format_question, value_to_text, Action, Decision, ASK_USER,
};
use reagent_core::error::ToolError;
use reagent_core::outcome::{RunOutcome, RunReport};
use reagent_core::provider::{DecisionRequest, Provider};
use reagent_core::tool::ToolRegistry;
use reagent_core::trace::TraceEntry;
use reagent_core::turn::Turn;
use tracing::{debug, info, warn};

use crate::prompt::render_prompt;
use crate::state::RunState;

/// Default iteration cap per run.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Default wall-clock bound on a single tool invocation.
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(60);

/// The immutable context object behind every run.
///
/// Built once at startup, then shared: `run` takes `&self`, so concurrent
/// runs need no locking — each owns its own [`RunState`], and the registry
/// is never mutated after construction.
pub struct DecisionEngine {
    /// The completion capability.
    provider: Arc<dyn Provider>,
    /// Registered tools; also defines the decision schema's enum.
    tools: Arc<ToolRegistry>,
    /// Model name.
    model: String,
    /// Temperature. 0.0 keeps the loop deterministic.
    temperature: f32,
    /// Optional cap on generated tokens per decision.
    max_output_tokens: Option<u32>,
    /// Iteration cap per run.
    max_iterations: usize,
    /// Wall-clock bound per tool invocation.
    tool_timeout: Duration,
}

impl DecisionEngine {
    /// Create an engine with the default budget and timeout.
    pub fn new(
        provider: Arc<dyn Provider>,
        tools: Arc<ToolRegistry>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            tools,
            model: model.into(),
            temperature: 0.0,
            max_output_tokens: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tool_timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the max tokens generated per decision.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Set the per-invocation tool timeout.
    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        self.tool_timeout = timeout;
        self
    }

    /// Execute one run of the decision loop.
    ///
    /// Infallible by contract: every failure mode is a [`RunOutcome`], and
    /// the report always carries whatever trace was accumulated before the
    /// run ended.
    pub async fn run(&self, user_query: &str, prior_turns: &[Turn]) -> RunReport {
        let mut state = RunState::new(user_query, prior_turns);
        let specs = self.tools.specs();
        let schema = decision_schema(&self.tools.names());

        info!(
            run_id = %state.run_id,
            model = %self.model,
            max_iter = self.max_iterations,
            "decision loop starting"
        );

        for _ in 0..self.max_iterations {
            // ── Request one decision ──
            let request = DecisionRequest {
                model: self.model.clone(),
                prompt: render_prompt(&specs, &state),
                schema: schema.clone(),
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            };

            let raw = match self.provider.decide(&request).await {
                Ok(value) => value,
                Err(e) => {
                    warn!(run_id = %state.run_id, error = %e, "provider failed, run aborted");
                    return state.finish(RunOutcome::EngineError(e.to_string()));
                }
            };

            // ── Validate the shape, exactly once ──
            let decision = match Decision::from_value(raw) {
                Ok(decision) => decision,
                Err(e) => {
                    warn!(run_id = %state.run_id, error = %e, "invalid decision, run aborted");
                    return state.finish(RunOutcome::EngineError(e.to_string()));
                }
            };

            debug!(
                run_id = %state.run_id,
                iteration = state.iteration,
                thought = %decision.thought,
                "decision received"
            );

            // ── Branch on the action ──
            let (name, input) = match decision.action {
                Action::FinalAnswer(text) => {
                    info!(run_id = %state.run_id, iterations = state.iteration, "final answer");
                    return state.finish(RunOutcome::FinalAnswer(text));
                }
                Action::Tool { name, input } => (name, input),
            };

            // The ask-user sentinel terminates before any invocation; the
            // caller resumes by starting a new run with the exchange
            // appended to its prior turns.
            if name == ASK_USER {
                let question = format_question(&value_to_text(&input));
                info!(run_id = %state.run_id, iterations = state.iteration, "pausing for user");
                return state.finish(RunOutcome::AwaitingUser(question));
            }

            let observation = self.dispatch(&name, &input).await;
            state.record(TraceEntry::new(decision.thought, name, input, observation));
        }

        warn!(
            run_id = %state.run_id,
            max_iter = self.max_iterations,
            "iteration budget exhausted"
        );
        state.finish(RunOutcome::MaxIterations)
    }

    /// Resolve and invoke one tool. Every failure mode comes back as an
    /// observation string — nothing escapes the loop from here.
    async fn dispatch(&self, name: &str, input: &serde_json::Value) -> String {
        let Some(tool) = self.tools.resolve(name) else {
            warn!(tool = name, "decision named an unknown tool");
            return format!(
                "Error: tool '{}' not found. Available tools: {}",
                name,
                self.tools.names().join(", ")
            );
        };

        let started = std::time::Instant::now();
        let result = tokio::time::timeout(self.tool_timeout, tool.invoke(input.clone())).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(Ok(output)) => {
                debug!(tool = name, duration_ms, "tool succeeded");
                output
            }
            Ok(Err(e)) => {
                warn!(tool = name, duration_ms, error = %e, "tool failed");
                format!("Error: {e}")
            }
            Err(_) => {
                let e = ToolError::Timeout {
                    tool_name: name.to_string(),
                    timeout_secs: self.tool_timeout.as_secs(),
                };
                warn!(tool = name, duration_ms, "tool timed out");
                format!("Error: {e}")
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
