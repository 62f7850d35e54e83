//! Built-in tool implementations for reagent.
//!
//! Tools give the agent something to act with: web search, arithmetic,
//! Wolfram|Alpha lookups, blog scaffolds, a pause-for-input channel, and
//! canned study plans. Network-backed tools take their credentials at
//! construction and degrade to `NotConfigured` errors when a key is
//! missing, so a partially configured registry still runs.

pub mod ask_user;
pub mod blog_template;
pub mod calculator;
pub mod study_plan;
pub mod web_search;
pub mod wolfram;

pub use ask_user::AskUserTool;
pub use blog_template::BlogTemplateTool;
pub use calculator::CalculatorTool;
pub use study_plan::StudyPlanTool;
pub use web_search::TavilySearchTool;
pub use wolfram::WolframAlphaTool;

use reagent_core::{RegistryError, ToolRegistry};

/// Create a registry with all built-in tools.
///
/// Registration order is the order the catalog is rendered in, so search
/// comes first and the meta-tools last.
pub fn builtin_registry(
    tavily_api_key: Option<String>,
    wolfram_app_id: Option<String>,
) -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(TavilySearchTool::new(tavily_api_key)))?;
    registry.register(Box::new(CalculatorTool))?;
    registry.register(Box::new(WolframAlphaTool::new(wolfram_app_id)))?;
    registry.register(Box::new(BlogTemplateTool))?;
    registry.register(Box::new(AskUserTool))?;
    registry.register(Box::new(StudyPlanTool))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_holds_all_six_tools() {
        let registry = builtin_registry(None, None).unwrap();
        assert_eq!(
            registry.names(),
            vec![
                "tavily_search",
                "calculator",
                "wolfram_alpha",
                "blog_template",
                "ask_user",
                "create_study_plan",
            ]
        );
    }

    #[test]
    fn builtin_specs_carry_descriptions_and_schemas() {
        let registry = builtin_registry(None, None).unwrap();
        for spec in registry.specs() {
            assert!(!spec.description.is_empty(), "{} has no description", spec.name);
            assert_eq!(spec.input_schema["type"], "object");
        }
    }

    #[tokio::test]
    async fn registry_resolves_and_invokes_the_calculator() {
        let registry = builtin_registry(None, None).unwrap();
        let calc = registry.resolve("calculator").unwrap();
        let out = calc.invoke(serde_json::json!("6*7")).await.unwrap();
        assert_eq!(out, "42");
    }
}
