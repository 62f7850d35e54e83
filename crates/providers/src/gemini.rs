//! Google Gemini native provider implementation.
//!
//! Uses the `generateContent` endpoint with structured output: the
//! decision schema is sent as `responseSchema` with a JSON response MIME
//! type, so the model is constrained to emit a single decision object.
//!
//! Authentication is the `x-goog-api-key` header (not Bearer).

use async_trait::async_trait;
use reagent_core::{DecisionRequest, Provider, ProviderError};
use serde::Deserialize;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider speaking the native `generateContent` API.
pub struct GeminiProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create with a custom base URL (e.g., for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the `generateContent` request body.
    fn build_body(request: &DecisionRequest) -> serde_json::Value {
        let mut generation_config = serde_json::json!({
            "temperature": request.temperature,
            "responseMimeType": "application/json",
            "responseSchema": request.schema,
        });

        if let Some(max_tokens) = request.max_output_tokens {
            generation_config["maxOutputTokens"] = serde_json::json!(max_tokens);
        }

        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }],
            "generationConfig": generation_config,
        })
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn decide(
        &self,
        request: &DecisionRequest,
    ) -> std::result::Result<serde_json::Value, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, request.model
        );
        let body = Self::build_body(request);

        debug!(provider = "gemini", model = %request.model, "Sending decision request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(ProviderError::RateLimited {
                retry_after_secs: 5,
            });
        }

        if status == 401 || status == 403 {
            return Err(ProviderError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status == 404 {
            return Err(ProviderError::ModelNotFound(request.model.clone()));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Gemini returned error");
            return Err(ProviderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: GenerateContentResponse =
            response.json().await.map_err(|e| ProviderError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        let text = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| ProviderError::ApiError {
                status_code: 200,
                message: "No candidates in response".into(),
            })?;

        serde_json::from_str(&text)
            .map_err(|e| ProviderError::Decode(format!("Model returned non-JSON decision: {e}")))
    }
}

// --- Gemini API types (internal) ---

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DecisionRequest {
        DecisionRequest::new(
            "gemini-2.5-flash",
            "What is 2+2?",
            serde_json::json!({"type": "object"}),
        )
    }

    #[test]
    fn base_url_is_trimmed() {
        let provider = GeminiProvider::new("key").with_base_url("http://localhost:9090/");
        assert_eq!(provider.base_url, "http://localhost:9090");
    }

    #[test]
    fn body_carries_prompt_and_structured_output_config() {
        let body = GeminiProvider::build_body(&request());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "What is 2+2?");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "object");
        assert_eq!(body["generationConfig"]["temperature"], 0.0);
        assert!(body["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn body_includes_max_tokens_when_set() {
        let mut req = request();
        req.max_output_tokens = Some(1024);
        let body = GeminiProvider::build_body(&req);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn parse_generate_content_response() {
        let data = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "{\"thought\":\"simple math\",\"tool\":\"Final Answer\",\"tool_input\":\"4\"}"}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 20}
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(data).unwrap();
        let text = &parsed.candidates[0].content.parts[0].text;
        let decision: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(decision["tool"], "Final Answer");
        assert_eq!(decision["tool_input"], "4");
    }

    #[test]
    fn parse_empty_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
