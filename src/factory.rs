//! Constructs the concrete generator for a resolved configuration.

use crate::config::AdapterConfig;
use crate::error::{BridgeError, Result};
use crate::gemini::GeminiClient;
use crate::generator::ContentGenerator;
use crate::openai::OpenAiAdapter;
use crate::registry;

/// Build a [`ContentGenerator`] for the configured provider.
///
/// A missing API key is fatal — no adapter can be constructed without
/// credentials. A model missing from the registry only warns: vendor catalogs
/// evolve faster than the registry and the model may still work. The Gemini
/// path returns the native client directly; no translation layer is
/// instantiated for it.
///
/// # Errors
/// `BridgeError::Config` for an empty API key, `BridgeError::UnsupportedProvider`
/// when no dispatch target exists.
pub fn create_content_generator(config: &AdapterConfig) -> Result<Box<dyn ContentGenerator>> {
    if config.api_key.is_empty() {
        return Err(BridgeError::config("API key is required"));
    }

    if !registry::is_model_supported(&config.provider, &config.model) {
        tracing::warn!(
            provider = %config.provider,
            model = %config.model,
            "model is not in the registry for this provider; proceeding anyway"
        );
    }

    let embedding_model = config.resolve_embedding_model().unwrap_or_default();

    match config.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiAdapter::new(
            &config.api_key,
            &config.model,
            embedding_model,
            config.effective_base_url()?,
        ))),
        "gemini" => Ok(Box::new(GeminiClient::new(
            &config.api_key,
            &config.model,
            embedding_model,
            config.effective_base_url()?,
        ))),
        other => Err(BridgeError::unsupported_provider(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str, api_key: &str, model: &str) -> AdapterConfig {
        AdapterConfig {
            provider: provider.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            embedding_model: None,
            base_url: None,
        }
    }

    #[test]
    fn test_empty_api_key_is_fatal() {
        let result = create_content_generator(&config("openai", "", "gpt-4o"));
        assert!(matches!(result, Err(BridgeError::Config { .. })));
    }

    #[test]
    fn test_openai_and_gemini_dispatch() {
        assert!(create_content_generator(&config("openai", "sk-x", "gpt-4o")).is_ok());
        assert!(create_content_generator(&config("gemini", "key", "gemini-1.5-pro")).is_ok());
        // Case-insensitive provider names, as in the registry.
        assert!(create_content_generator(&config("OpenAI", "sk-x", "gpt-4o")).is_ok());
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let result = create_content_generator(&config("mistral", "key", "m"));
        assert!(matches!(
            result,
            Err(BridgeError::UnsupportedProvider { .. })
        ));
    }

    #[test]
    fn test_unregistered_model_still_constructs() {
        // Not in the registry, but catalogs drift; construction proceeds.
        let result = create_content_generator(&config("openai", "sk-x", "gpt-5-preview"));
        assert!(result.is_ok());
    }
}
