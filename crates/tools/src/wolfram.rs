//! Computational knowledge tool backed by the Wolfram|Alpha LLM API.
//!
//! Sends `GET https://www.wolframalpha.com/api/v1/llm-api` and condenses
//! the plain-text reply: when it contains a `Result:` section that section
//! is returned (up to three lines), otherwise the first 500 characters.

use async_trait::async_trait;
use reagent_core::{Tool, ToolError};
use tracing::{debug, warn};

const WOLFRAM_API_URL: &str = "https://www.wolframalpha.com/api/v1/llm-api";
const MAX_CHARS: u32 = 2000;
const FALLBACK_LIMIT: usize = 500;

/// Answers math, science, and factual queries through Wolfram|Alpha.
pub struct WolframAlphaTool {
    app_id: Option<String>,
    client: reqwest::Client,
}

impl WolframAlphaTool {
    pub fn new(app_id: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { app_id, client }
    }

    async fn query(&self, query: &str) -> Result<String, ToolError> {
        let app_id = self.app_id.as_deref().ok_or_else(|| ToolError::NotConfigured {
            tool_name: "wolfram_alpha".into(),
            reason: "no Wolfram|Alpha app id (set WOLFRAM_ALPHA_APP_ID or wolfram_app_id in the config)"
                .into(),
        })?;

        debug!(query = %query, "Sending Wolfram|Alpha request");

        let response = self
            .client
            .get(WOLFRAM_API_URL)
            .query(&[
                ("input", query),
                ("appid", app_id),
                ("maxchars", &MAX_CHARS.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ToolError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 501 {
            return Err(ToolError::ExecutionFailed {
                tool_name: "wolfram_alpha".into(),
                reason: format!("Wolfram|Alpha could not interpret the query '{query}'; try rephrasing it"),
            });
        }

        if status == 403 {
            return Err(ToolError::ExecutionFailed {
                tool_name: "wolfram_alpha".into(),
                reason: "Wolfram|Alpha rejected the app id".into(),
            });
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Wolfram|Alpha returned error");
            return Err(ToolError::ExecutionFailed {
                tool_name: "wolfram_alpha".into(),
                reason: format!("Wolfram|Alpha returned HTTP {status}: {error_body}"),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ToolError::Network(e.to_string()))?;

        Ok(summarize_reply(&text))
    }
}

#[async_trait]
impl Tool for WolframAlphaTool {
    fn name(&self) -> &str {
        "wolfram_alpha"
    }

    fn description(&self) -> &str {
        "Query Wolfram|Alpha for math, science, unit conversions, and factual data. Best for precise computations."
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The query in plain English, e.g. 'integrate x^2 from 0 to 1'"
                }
            },
            "required": ["query"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<String, ToolError> {
        let query = extract_query(&input)?;
        self.query(&query).await
    }
}

fn extract_query(input: &serde_json::Value) -> Result<String, ToolError> {
    match input {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Object(map) => map
            .get("query")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| ToolError::InvalidInput("Missing 'query' field".into())),
        _ => Err(ToolError::InvalidInput(
            "Expected a query string or an object with a 'query' field".into(),
        )),
    }
}

/// Condense the LLM API's plain-text reply to its most useful part.
fn summarize_reply(text: &str) -> String {
    if let Some(idx) = text.find("Result:") {
        let after = &text[idx + "Result:".len()..];
        let section: Vec<&str> = after.lines().take(3).collect();
        return format!("Result:{}", section.join("\n")).trim().to_string();
    }

    let trimmed = text.trim();
    if trimmed.chars().count() > FALLBACK_LIMIT {
        let head: String = trimmed.chars().take(FALLBACK_LIMIT).collect();
        format!("{head}...")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_extracts_result_section() {
        let text = "Query:\nintegrate x^2\n\nResult: x^3/3 + constant\nAssumption: indefinite integral\nPlot: (omitted)";
        let summary = summarize_reply(text);
        assert!(summary.starts_with("Result: x^3/3 + constant"));
    }

    #[test]
    fn summarize_caps_result_at_three_lines() {
        let text = "Result: line one\nline two\nline three\nline four\nline five";
        let summary = summarize_reply(text);
        assert!(summary.contains("line three"));
        assert!(!summary.contains("line four"));
    }

    #[test]
    fn summarize_truncates_when_no_result_section() {
        let text = "x".repeat(800);
        let summary = summarize_reply(&text);
        assert_eq!(summary.chars().count(), FALLBACK_LIMIT + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn summarize_keeps_short_replies_whole() {
        let text = "Population of Seoul: about 9.4 million people";
        assert_eq!(summarize_reply(text), text);
    }

    #[test]
    fn summarize_truncates_on_char_boundaries() {
        // Multi-byte text must not panic on truncation.
        let text = "한".repeat(600);
        let summary = summarize_reply(&text);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), FALLBACK_LIMIT + 3);
    }

    #[tokio::test]
    async fn missing_app_id_is_not_configured() {
        let tool = WolframAlphaTool::new(None);
        let err = tool
            .invoke(serde_json::json!({"query": "2+2"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotConfigured { .. }));
        assert!(err.to_string().contains("WOLFRAM_ALPHA_APP_ID"));
    }

    #[test]
    fn query_from_bare_string() {
        assert_eq!(extract_query(&serde_json::json!("pi to 10 digits")).unwrap(), "pi to 10 digits");
    }

    #[test]
    fn missing_query_is_invalid_input() {
        let err = extract_query(&serde_json::json!(null)).unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }

    #[test]
    fn tool_metadata() {
        let tool = WolframAlphaTool::new(None);
        assert_eq!(tool.name(), "wolfram_alpha");
        assert!(!tool.description().is_empty());
    }
}
