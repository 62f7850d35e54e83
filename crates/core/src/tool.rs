//! Tool trait — the abstraction over external capabilities.
//!
//! A tool accepts an input matching its declared schema and returns a
//! string result or fails with a description. The registry maps names to
//! tools and renders the catalog; it never invokes anything itself —
//! invocation (and all failure handling) belongs to the decision engine.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::decision::FINAL_ANSWER;
use crate::error::{RegistryError, ToolError};

/// Static declaration of a capability: what the catalog advertises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Unique key in the registry.
    pub name: String,

    /// What the tool does, for prompting only.
    pub description: String,

    /// JSON Schema describing the input the tool accepts.
    pub input_schema: serde_json::Value,
}

/// The core Tool trait.
///
/// Each capability (web search, calculator, computational knowledge, etc.)
/// implements this trait. The `Result` return is the contract that makes
/// tool failures recoverable: an `Err` becomes an observation in the trace,
/// never an aborted run.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool (e.g., "calculator").
    fn name(&self) -> &str;

    /// A description of what this tool does (sent to the LLM).
    fn description(&self) -> &str;

    /// JSON Schema describing this tool's input.
    fn input_schema(&self) -> serde_json::Value;

    /// Invoke the tool with the verbatim `tool_input` from the decision.
    async fn invoke(&self, input: serde_json::Value) -> std::result::Result<String, ToolError>;

    /// This tool's catalog entry.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// A registry of available tools.
///
/// Built once at startup, immutable afterwards, safe to share across
/// concurrent runs. Registration order is preserved — it is the catalog
/// order in every decision request.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a tool. Name collisions and the reserved `"Final Answer"`
    /// literal are configuration errors caught here, not at dispatch time.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> std::result::Result<(), RegistryError> {
        let name = tool.name().to_string();
        if name == FINAL_ANSWER {
            return Err(RegistryError::ReservedName(name));
        }
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Pure lookup by name. Never invokes.
    pub fn resolve(&self, name: &str) -> Option<&dyn Tool> {
        self.index.get(name).map(|&i| self.tools[i].as_ref())
    }

    /// All catalog entries, in registration order.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|t| t.spec()).collect()
    }

    /// All registered tool names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A simple test tool for unit tests.
    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Echoes back the input"
        }
        fn input_schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string" }
                },
                "required": ["text"]
            })
        }
        async fn invoke(&self, input: serde_json::Value) -> std::result::Result<String, ToolError> {
            Ok(input["text"].as_str().unwrap_or("").to_string())
        }
    }

    struct NamedTool(&'static str);

    #[async_trait]
    impl Tool for NamedTool {
        fn name(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            "test tool"
        }
        fn input_schema(&self) -> serde_json::Value {
            serde_json::json!({ "type": "object" })
        }
        async fn invoke(&self, _input: serde_json::Value) -> std::result::Result<String, ToolError> {
            Ok("ok".into())
        }
    }

    #[test]
    fn register_and_resolve() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();
        assert!(registry.resolve("echo").is_some());
        assert!(registry.resolve("nonexistent").is_none());
    }

    #[test]
    fn duplicate_name_is_a_build_time_error() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();
        let err = registry.register(Box::new(EchoTool)).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(name) if name == "echo"));
    }

    #[test]
    fn final_answer_is_reserved() {
        let mut registry = ToolRegistry::new();
        let err = registry.register(Box::new(NamedTool("Final Answer"))).unwrap_err();
        assert!(matches!(err, RegistryError::ReservedName(_)));
    }

    #[test]
    fn specs_preserve_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(NamedTool("alpha"))).unwrap();
        registry.register(Box::new(NamedTool("zulu"))).unwrap();
        registry.register(Box::new(NamedTool("mike"))).unwrap();

        let names: Vec<String> = registry.specs().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["alpha", "zulu", "mike"]);
        assert_eq!(registry.names(), vec!["alpha", "zulu", "mike"]);
    }

    #[test]
    fn resolve_never_invokes() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();
        // resolve returns the tool itself; invocation stays with the caller
        let tool = registry.resolve("echo").unwrap();
        assert_eq!(tool.name(), "echo");
    }

    #[tokio::test]
    async fn resolved_tool_invokes() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(EchoTool)).unwrap();

        let tool = registry.resolve("echo").unwrap();
        let out = tool
            .invoke(serde_json::json!({"text": "hello world"}))
            .await
            .unwrap();
        assert_eq!(out, "hello world");
    }
}
