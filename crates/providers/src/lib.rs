//! LLM provider implementations for reagent.
//!
//! All providers implement the `reagent_core::Provider` trait. The
//! factory picks the right backend from configuration: Gemini speaks
//! its native structured-output API, everything else goes through the
//! OpenAI-compatible chat completions surface.

pub mod gemini;
pub mod openai_compat;

pub use gemini::GeminiProvider;
pub use openai_compat::OpenAiCompatProvider;

use reagent_config::AppConfig;
use reagent_core::{Provider, ProviderError};
use std::sync::Arc;

/// Build the provider named by the configuration.
pub fn create_provider(config: &AppConfig) -> Result<Arc<dyn Provider>, ProviderError> {
    match config.provider.as_str() {
        "gemini" => {
            let api_key = require_api_key(config)?;
            let mut provider = GeminiProvider::new(api_key);
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url);
            }
            Ok(Arc::new(provider))
        }
        "ollama" => Ok(Arc::new(OpenAiCompatProvider::ollama(
            config.base_url.as_deref(),
        ))),
        name => {
            let base_url = config
                .base_url
                .clone()
                .or_else(|| default_base_url(name))
                .ok_or_else(|| {
                    ProviderError::NotConfigured(format!(
                        "Unknown provider '{name}'; set base_url to use a custom endpoint"
                    ))
                })?;
            let api_key = require_api_key(config)?;
            Ok(Arc::new(OpenAiCompatProvider::new(name, base_url, api_key)))
        }
    }
}

fn require_api_key(config: &AppConfig) -> Result<String, ProviderError> {
    config.api_key.clone().ok_or_else(|| {
        ProviderError::NotConfigured(format!(
            "No API key for provider '{}'; set REAGENT_API_KEY or api_key in the config",
            config.provider
        ))
    })
}

/// Get the default base URL for well-known OpenAI-compatible providers.
fn default_base_url(provider_name: &str) -> Option<String> {
    match provider_name {
        "openai" => Some("https://api.openai.com/v1".into()),
        "openrouter" => Some("https://openrouter.ai/api/v1".into()),
        "groq" => Some("https://api.groq.com/openai/v1".into()),
        "together" => Some("https://api.together.xyz/v1".into()),
        "fireworks" => Some("https://api.fireworks.ai/inference/v1".into()),
        "deepseek" => Some("https://api.deepseek.com/v1".into()),
        _ => None,
    }
}
