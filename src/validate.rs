//! Accumulating validation of an [`AdapterConfig`].
//!
//! Validation is pure and never fails: every problem found is collected into
//! the result so a caller can report all of them at once.

use crate::config::AdapterConfig;
use crate::registry;

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check a configuration against the registry, collecting every problem.
#[must_use]
pub fn validate_config(config: &AdapterConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.provider.is_empty() {
        errors.push("Provider is required".to_string());
    } else if registry::record(&config.provider).is_none() {
        errors.push(format!("Unsupported provider: {}", config.provider));
    }

    if config.api_key.is_empty() {
        errors.push("API key is required".to_string());
    }

    if config.model.is_empty() {
        errors.push("Model is required".to_string());
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_config() -> AdapterConfig {
        AdapterConfig {
            provider: String::new(),
            api_key: String::new(),
            model: String::new(),
            embedding_model: None,
            base_url: None,
        }
    }

    #[test]
    fn test_empty_config_accumulates_all_errors() {
        let result = validate_config(&empty_config());
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.contains(&"Provider is required".to_string()));
        assert!(result.errors.contains(&"API key is required".to_string()));
        assert!(result.errors.contains(&"Model is required".to_string()));
    }

    #[test]
    fn test_valid_config_has_no_errors() {
        let config = AdapterConfig {
            provider: "openai".to_string(),
            api_key: "sk-x".to_string(),
            model: "gpt-4".to_string(),
            embedding_model: None,
            base_url: None,
        };
        let result = validate_config(&config);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_unknown_provider_is_reported() {
        let config = AdapterConfig {
            provider: "frobnicator".to_string(),
            api_key: "key".to_string(),
            model: "m".to_string(),
            embedding_model: None,
            base_url: None,
        };
        let result = validate_config(&config);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec!["Unsupported provider: frobnicator".to_string()]
        );
    }
}
