//! Blog scaffold tool — returns a fixed markdown outline for a topic.
//!
//! Two styles are supported: `tech_analysis` (a five-section deep dive)
//! and `product_review` (a four-section review). Anything else is an
//! invalid input.

use async_trait::async_trait;
use reagent_core::{Tool, ToolError};

pub const STYLE_TECH_ANALYSIS: &str = "tech_analysis";
pub const STYLE_PRODUCT_REVIEW: &str = "product_review";

/// Produces a ready-to-fill blog post outline.
pub struct BlogTemplateTool;

#[async_trait]
impl Tool for BlogTemplateTool {
    fn name(&self) -> &str {
        "blog_template"
    }

    fn description(&self) -> &str {
        "Generate a markdown blog post outline for a topic. Styles: 'tech_analysis' or 'product_review'."
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "What the post is about"
                },
                "style": {
                    "type": "string",
                    "enum": [STYLE_TECH_ANALYSIS, STYLE_PRODUCT_REVIEW],
                    "description": "Which outline to use"
                }
            },
            "required": ["topic", "style"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<String, ToolError> {
        let (topic, style) = extract_request(&input)?;
        match style.as_str() {
            STYLE_TECH_ANALYSIS => Ok(tech_analysis_outline(&topic)),
            STYLE_PRODUCT_REVIEW => Ok(product_review_outline(&topic)),
            other => Err(ToolError::InvalidInput(format!(
                "Unknown style '{other}'; supported styles: {STYLE_TECH_ANALYSIS}, {STYLE_PRODUCT_REVIEW}"
            ))),
        }
    }
}

/// Accepts `{ "topic": ..., "style": ... }` or a bare `"topic, style"` string.
fn extract_request(input: &serde_json::Value) -> Result<(String, String), ToolError> {
    match input {
        serde_json::Value::String(s) => {
            let (topic, style) = s.split_once(',').ok_or_else(|| {
                ToolError::InvalidInput("Expected 'topic, style' when passing a bare string".into())
            })?;
            Ok((topic.trim().to_string(), style.trim().to_string()))
        }
        serde_json::Value::Object(map) => {
            let topic = map
                .get("topic")
                .and_then(|v| v.as_str())
                .ok_or_else(|| ToolError::InvalidInput("Missing 'topic' field".into()))?;
            let style = map
                .get("style")
                .and_then(|v| v.as_str())
                .ok_or_else(|| ToolError::InvalidInput("Missing 'style' field".into()))?;
            Ok((topic.trim().to_string(), style.trim().to_string()))
        }
        _ => Err(ToolError::InvalidInput(
            "Expected an object with 'topic' and 'style' fields".into(),
        )),
    }
}

fn tech_analysis_outline(topic: &str) -> String {
    format!(
        "# {topic}: A Technical Deep Dive\n\
         \n\
         ## 1. Background\n\
         - What problem does {topic} address?\n\
         - How did earlier approaches fall short?\n\
         \n\
         ## 2. Core Concepts\n\
         - Key ideas and terminology\n\
         - Architecture at a glance\n\
         \n\
         ## 3. How It Works\n\
         - Walk through the main flow step by step\n\
         - Concrete code or configuration examples\n\
         \n\
         ## 4. Trade-offs\n\
         - Where it shines\n\
         - Limitations and when to avoid it\n\
         \n\
         ## 5. Conclusion\n\
         - Summary of findings\n\
         - Who should adopt it and what to watch next\n"
    )
}

fn product_review_outline(topic: &str) -> String {
    format!(
        "# {topic} Review: Is It Worth It?\n\
         \n\
         ## 1. First Impressions\n\
         - Unboxing, setup, and initial experience\n\
         \n\
         ## 2. Daily Use\n\
         - Strengths observed over time\n\
         - Annoyances and rough edges\n\
         \n\
         ## 3. Value\n\
         - Price versus the alternatives\n\
         - Who benefits most\n\
         \n\
         ## 4. Verdict\n\
         - Rating and final recommendation\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tech_analysis_has_five_sections() {
        let tool = BlogTemplateTool;
        let outline = tool
            .invoke(serde_json::json!({"topic": "Rust async", "style": "tech_analysis"}))
            .await
            .unwrap();
        assert!(outline.contains("# Rust async: A Technical Deep Dive"));
        assert!(outline.contains("## 5. Conclusion"));
    }

    #[tokio::test]
    async fn product_review_has_four_sections() {
        let tool = BlogTemplateTool;
        let outline = tool
            .invoke(serde_json::json!({"topic": "Keychron K3", "style": "product_review"}))
            .await
            .unwrap();
        assert!(outline.contains("# Keychron K3 Review"));
        assert!(outline.contains("## 4. Verdict"));
        assert!(!outline.contains("## 5."));
    }

    #[tokio::test]
    async fn bare_string_splits_on_comma() {
        let tool = BlogTemplateTool;
        let outline = tool
            .invoke(serde_json::json!("WebAssembly, tech_analysis"))
            .await
            .unwrap();
        assert!(outline.contains("# WebAssembly: A Technical Deep Dive"));
    }

    #[tokio::test]
    async fn unknown_style_is_invalid_input() {
        let tool = BlogTemplateTool;
        let err = tool
            .invoke(serde_json::json!({"topic": "anything", "style": "listicle"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
        assert!(err.to_string().contains("listicle"));
        assert!(err.to_string().contains("tech_analysis"));
    }

    #[tokio::test]
    async fn bare_string_without_comma_is_invalid() {
        let tool = BlogTemplateTool;
        let err = tool.invoke(serde_json::json!("just a topic")).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn missing_topic_is_invalid() {
        let tool = BlogTemplateTool;
        let err = tool
            .invoke(serde_json::json!({"style": "tech_analysis"}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("topic"));
    }
}
