//! CLI subcommand implementations.

pub mod ask;
pub mod chat;
pub mod config_cmd;
pub mod tools;

use std::sync::Arc;

use reagent_config::AppConfig;
use reagent_engine::DecisionEngine;

/// Build the decision engine from loaded configuration.
///
/// Shared by `ask` and `chat`. Fails with a setup hint when no provider
/// API key is available.
pub(crate) fn build_engine(config: &AppConfig) -> Result<DecisionEngine, Box<dyn std::error::Error>> {
    if config.provider != "ollama" && !config.has_api_key() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    GEMINI_API_KEY   (for the default Gemini provider)");
        eprintln!("    REAGENT_API_KEY  (generic)");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let provider = reagent_providers::create_provider(config)?;
    let registry = reagent_tools::builtin_registry(
        config.tavily_api_key.clone(),
        config.wolfram_app_id.clone(),
    )?;

    let mut engine = DecisionEngine::new(provider, Arc::new(registry), &config.model)
        .with_temperature(config.temperature)
        .with_max_iterations(config.max_iterations)
        .with_tool_timeout(config.tool_timeout());

    if let Some(max_tokens) = config.max_output_tokens {
        engine = engine.with_max_output_tokens(max_tokens);
    }

    Ok(engine)
}
