//! Error types for the reagent domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant. The split mirrors the
//! engine's failure semantics: provider and decision errors are fatal to a
//! run, tool errors fold into the trace as observations, registry errors
//! surface at startup before any run exists.

use thiserror::Error;

/// The top-level error type for all reagent operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Decision contract errors ---
    #[error("Decision error: {0}")]
    Decision(#[from] DecisionError),

    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Registry errors ---
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures of the completion capability. Fatal to the run that hit them.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Response decode failed: {0}")]
    Decode(String),
}

/// A decision response that does not conform to the Decision shape.
/// Fatal to the run: the engine never repairs or retries a bad shape.
#[derive(Debug, Clone, Error)]
pub enum DecisionError {
    #[error("Decision failed shape validation: {0}")]
    Shape(String),
}

/// Failures inside a tool invocation. Recoverable: the engine folds these
/// into the trace as observations and the loop continues.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Invalid tool input: {0}")]
    InvalidInput(String),

    #[error("Tool execution failed: {tool_name} — {reason}")]
    ExecutionFailed { tool_name: String, reason: String },

    #[error("Tool timed out: {tool_name} after {timeout_secs}s")]
    Timeout { tool_name: String, timeout_secs: u64 },

    #[error("Tool not configured: {tool_name} — {reason}")]
    NotConfigured { tool_name: String, reason: String },

    #[error("Network error: {0}")]
    Network(String),
}

/// Registry construction failures. These are configuration errors caught
/// when the registry is built, never at dispatch time.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    #[error("Reserved tool name: {0}")]
    ReservedName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn tool_error_displays_correctly() {
        let err = Error::Tool(ToolError::ExecutionFailed {
            tool_name: "calculator".into(),
            reason: "division by zero".into(),
        });
        assert!(err.to_string().contains("calculator"));
        assert!(err.to_string().contains("division by zero"));
    }

    #[test]
    fn decision_error_displays_correctly() {
        let err = Error::Decision(DecisionError::Shape("missing field `thought`".into()));
        assert!(err.to_string().contains("shape validation"));
        assert!(err.to_string().contains("thought"));
    }

    #[test]
    fn registry_error_displays_correctly() {
        let err = RegistryError::DuplicateName("calculator".into());
        assert!(err.to_string().contains("Duplicate"));
        assert!(err.to_string().contains("calculator"));
    }
}
