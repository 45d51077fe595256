//! Adapter construction config and its one-shot environment resolution.
//!
//! Configuration is resolved once, before an adapter is built; the adapter
//! then owns immutable copies of everything it needs and never re-reads the
//! environment.

use crate::error::{BridgeError, Result};
use crate::registry;
use serde::{Deserialize, Serialize};

/// Environment variables consumed by [`AdapterConfig::from_env`]. The API key
/// additionally falls back to the provider's own variable (`OPENAI_API_KEY`,
/// `GEMINI_API_KEY`).
pub const PROVIDER_ENV: &str = "LLM_PROVIDER";
pub const MODEL_ENV: &str = "LLM_MODEL";
pub const API_KEY_ENV: &str = "LLM_API_KEY";
pub const BASE_URL_ENV: &str = "LLM_BASE_URL";
pub const EMBEDDING_MODEL_ENV: &str = "LLM_EMBEDDING_MODEL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    pub provider: String,
    pub api_key: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl AdapterConfig {
    /// Resolve a configuration from the environment.
    ///
    /// # Errors
    /// Returns `BridgeError::Config` when the provider or its API key cannot
    /// be resolved; model problems are left to [`validate_config`] and the
    /// factory so they can be reported together.
    ///
    /// [`validate_config`]: crate::validate::validate_config
    pub fn from_env() -> Result<Self> {
        let provider = std::env::var(PROVIDER_ENV).map_err(|_| {
            BridgeError::config(format!("Environment variable '{PROVIDER_ENV}' not set"))
        })?;

        let api_key = match std::env::var(API_KEY_ENV) {
            Ok(key) => key,
            Err(_) => {
                let key_env = registry::record(&provider)
                    .map(|r| r.default_api_key_env)
                    .unwrap_or(API_KEY_ENV);
                std::env::var(key_env).map_err(|_| {
                    BridgeError::config(format!(
                        "Environment variable '{key_env}' not set. Set it with your provider API key."
                    ))
                })?
            }
        };

        Ok(Self {
            provider,
            api_key,
            model: std::env::var(MODEL_ENV).unwrap_or_default(),
            embedding_model: std::env::var(EMBEDDING_MODEL_ENV).ok(),
            base_url: std::env::var(BASE_URL_ENV).ok(),
        })
    }

    /// Effective embedding model: explicit override wins, then the provider's
    /// registry default.
    #[must_use]
    pub fn resolve_embedding_model(&self) -> Option<String> {
        self.embedding_model.clone().or_else(|| {
            registry::default_embedding_model(&self.provider).map(str::to_string)
        })
    }

    /// Effective base URL: explicit override wins, then the provider's
    /// registry default.
    ///
    /// # Errors
    /// Returns `BridgeError::Config` for an unknown provider with no override.
    pub fn effective_base_url(&self) -> Result<String> {
        if let Some(ref url) = self.base_url {
            return Ok(url.clone());
        }

        let record = registry::record(&self.provider).ok_or_else(|| {
            BridgeError::config(format!(
                "Unknown provider '{}' and no base_url configured. Known providers: {}",
                self.provider,
                registry::all_providers().collect::<Vec<_>>().join(", ")
            ))
        })?;

        Ok(record.default_base_url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn openai_config() -> AdapterConfig {
        AdapterConfig {
            provider: "openai".to_string(),
            api_key: "sk-test".to_string(),
            model: "gpt-4o".to_string(),
            embedding_model: None,
            base_url: None,
        }
    }

    #[test]
    fn test_embedding_model_falls_back_to_registry_default() {
        let config = openai_config();
        assert_eq!(
            config.resolve_embedding_model(),
            Some("text-embedding-3-small".to_string())
        );
    }

    #[test]
    fn test_explicit_embedding_model_wins() {
        let mut config = openai_config();
        config.embedding_model = Some("text-embedding-3-large".to_string());
        assert_eq!(
            config.resolve_embedding_model(),
            Some("text-embedding-3-large".to_string())
        );
    }

    #[test]
    fn test_effective_base_url_from_registry() {
        let url = openai_config().effective_base_url().unwrap();
        assert_eq!(url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_effective_base_url_override() {
        let mut config = openai_config();
        config.base_url = Some("https://my-server.com/v1".to_string());
        assert_eq!(
            config.effective_base_url().unwrap(),
            "https://my-server.com/v1"
        );
    }

    #[test]
    fn test_unknown_provider_without_override_is_an_error() {
        let mut config = openai_config();
        config.provider = "custom".to_string();
        assert!(config.effective_base_url().is_err());
    }
}
