//! Provider trait — the abstraction over the completion capability.
//!
//! A Provider receives one rendered decision request per loop iteration and
//! must return a raw JSON value conforming to the request's schema, or
//! fail. The engine depends only on this contract, never on a specific
//! provider's wire format.
//!
//! Implementations: Gemini structured output, OpenAI-compatible endpoints.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ProviderError;

/// One structured-decision request: the rendered prompt plus the schema
/// the response must conform to.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionRequest {
    /// The model to use (e.g., "gemini-2.5-flash").
    pub model: String,

    /// The fully rendered prompt: tool catalog, prior turns, trace.
    pub prompt: String,

    /// JSON Schema the response must validate against.
    pub schema: serde_json::Value,

    /// Temperature (0.0 = deterministic — the loop's default).
    pub temperature: f32,

    /// Maximum tokens to generate, when the provider supports a cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl DecisionRequest {
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        schema: serde_json::Value,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            schema,
            temperature: 0.0,
            max_output_tokens: None,
        }
    }
}

/// The core Provider trait.
///
/// Every backend implements this. The engine calls `decide()` once per
/// iteration without knowing which provider is behind it; whatever comes
/// back is validated against the decision shape at the engine boundary.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "gemini").
    fn name(&self) -> &str;

    /// Request one structured decision. The returned value is the raw
    /// response JSON, not yet shape-validated.
    async fn decide(
        &self,
        request: &DecisionRequest,
    ) -> std::result::Result<serde_json::Value, ProviderError>;
}

impl std::fmt::Debug for dyn Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider").field("name", &self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_to_deterministic_temperature() {
        let req = DecisionRequest::new("gemini-2.5-flash", "prompt", serde_json::json!({}));
        assert!(req.temperature.abs() < f32::EPSILON);
        assert!(req.max_output_tokens.is_none());
    }

    #[test]
    fn request_serializes_without_empty_max_tokens() {
        let req = DecisionRequest::new("m", "p", serde_json::json!({"type": "object"}));
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"model\":\"m\""));
        assert!(!json.contains("max_output_tokens"));
    }
}
