//! Web search tool backed by the Tavily search API.
//!
//! Sends `POST https://api.tavily.com/search` and renders the hits as a
//! compact digest the model can quote from. Construction without an API
//! key is allowed; invocation then fails with `NotConfigured`, which the
//! engine surfaces as a recoverable observation.

use async_trait::async_trait;
use reagent_core::{Tool, ToolError};
use serde::Deserialize;
use tracing::{debug, warn};

const TAVILY_API_URL: &str = "https://api.tavily.com/search";
const MAX_RESULTS: usize = 3;

/// Searches the web through Tavily and summarizes the top hits.
pub struct TavilySearchTool {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl TavilySearchTool {
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }

    async fn search(&self, query: &str) -> Result<String, ToolError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| ToolError::NotConfigured {
            tool_name: "tavily_search".into(),
            reason: "no Tavily API key (set TAVILY_API_KEY or tavily_api_key in the config)".into(),
        })?;

        let body = serde_json::json!({
            "query": query,
            "search_depth": "advanced",
            "max_results": MAX_RESULTS,
        });

        debug!(query = %query, "Sending Tavily search request");

        let response = self
            .client
            .post(TAVILY_API_URL)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ToolError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            return Err(ToolError::ExecutionFailed {
                tool_name: "tavily_search".into(),
                reason: "Tavily rejected the API key".into(),
            });
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Tavily returned error");
            return Err(ToolError::ExecutionFailed {
                tool_name: "tavily_search".into(),
                reason: format!("Tavily returned HTTP {status}: {error_body}"),
            });
        }

        let api_response: TavilyResponse =
            response.json().await.map_err(|e| ToolError::ExecutionFailed {
                tool_name: "tavily_search".into(),
                reason: format!("Failed to parse Tavily response: {e}"),
            })?;

        Ok(render_digest(query, &api_response))
    }
}

#[async_trait]
impl Tool for TavilySearchTool {
    fn name(&self) -> &str {
        "tavily_search"
    }

    fn description(&self) -> &str {
        "Search the web for up-to-date information. Returns the top results with titles, URLs, and content snippets."
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<String, ToolError> {
        let query = extract_query(&input)?;
        self.search(&query).await
    }
}

/// Accepts either a bare query string or `{ "query": "..." }`.
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

fn render_digest(query: &str, response: &TavilyResponse) -> String {
    if response.results.is_empty() {
        return format!("No search results found for '{query}'.");
    }

    let mut digest = String::new();
    for (i, result) in response.results.iter().take(MAX_RESULTS).enumerate() {
        if i > 0 {
            digest.push('\n');
        }
        digest.push_str(&format!(
            "{}. {}\n   {}\n   {}\n",
            i + 1,
            result.title,
            result.url,
            result.content.trim()
        ));
    }
    digest
}

// --- Tavily API types (internal) ---

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
}
