//! Shared test helpers for engine tests.

use reagent_core::error::{ProviderError, ToolError};
use reagent_core::provider::{DecisionRequest, Provider};
use reagent_core::tool::Tool;
use std::sync::Mutex;

/// A mock provider that returns a sequence of scripted decision values.
///
/// Each call to `decide` pops the next result from the queue and records
/// the request it was given. Panics if more calls are made than results
/// provided.
pub struct ScriptedProvider {
    results: Mutex<Vec<Result<serde_json::Value, ProviderError>>>,
    requests: Mutex<Vec<DecisionRequest>>,
    call_count: Mutex<usize>,
}

impl ScriptedProvider {
    /// All-success script: one raw decision value per expected call.
    pub fn new(decisions: Vec<serde_json::Value>) -> Self {
        Self::with_results(decisions.into_iter().map(Ok).collect())
    }

    /// Full script including provider failures.
    pub fn with_results(results: Vec<Result<serde_json::Value, ProviderError>>) -> Self {
        Self {
            results: Mutex::new(results),
            requests: Mutex::new(Vec::new()),
            call_count: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The prompt of the most recent request, if any call was made.
    pub fn last_prompt(&self) -> Option<String> {
        self.requests.lock().unwrap().last().map(|r| r.prompt.clone())
    }

    /// The schema of the most recent request, if any call was made.
    pub fn last_schema(&self) -> Option<serde_json::Value> {
        self.requests.lock().unwrap().last().map(|r| r.schema.clone())
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn decide(
        &self,
        request: &DecisionRequest,
    ) -> Result<serde_json::Value, ProviderError> {
        let mut count = self.call_count.lock().unwrap();
        let results = self.results.lock().unwrap();

        if *count >= results.len() {
            panic!(
                "ScriptedProvider: no more results (call #{}, have {})",
                *count,
                results.len()
            );
        }

        self.requests.lock().unwrap().push(request.clone());
        let result = results[*count].clone();
        *count += 1;
        result
    }
}

/// A decision value that invokes the named tool.
pub fn tool_decision(thought: &str, tool: &str, input: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "thought": thought,
        "tool": tool,
        "tool_input": input,
    })
}

/// A decision value that finishes the run with the given answer.
pub fn final_answer_decision(thought: &str, answer: &str) -> serde_json::Value {
    serde_json::json!({
        "thought": thought,
        "tool": reagent_core::FINAL_ANSWER,
        "tool_input": answer,
    })
}

/// A tool that always returns the same output.
pub struct FixedTool {
    name: &'static str,
    output: &'static str,
}

impl FixedTool {
    pub fn new(name: &'static str, output: &'static str) -> Self {
        Self { name, output }
    }
}

#[async_trait::async_trait]
impl Tool for FixedTool {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        "Returns a fixed string"
    }
    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({ "type": "object" })
    }
    async fn invoke(&self, _input: serde_json::Value) -> Result<String, ToolError> {
        Ok(self.output.to_string())
    }
}

/// A tool that always fails.
pub struct FailingTool;

#[async_trait::async_trait]
impl Tool for FailingTool {
    fn name(&self) -> &str {
        "flaky"
    }
    fn description(&self) -> &str {
        "Always fails"
    }
    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({ "type": "object" })
    }
    async fn invoke(&self, _input: serde_json::Value) -> Result<String, ToolError> {
        Err(ToolError::ExecutionFailed {
            tool_name: "flaky".into(),
            reason: "deliberately broken".into(),
        })
    }
}

/// A tool that takes far longer than any test timeout.
pub struct SlowTool;

#[async_trait::async_trait]
impl Tool for SlowTool {
    fn name(&self) -> &str {
        "slow"
    }
    fn description(&self) -> &str {
        "Sleeps for a long time"
    }
    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({ "type": "object" })
    }
    async fn invoke(&self, _input: serde_json::Value) -> Result<String, ToolError> {
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        Ok("too late".into())
    }
}
