//! Built-in provider records: supported models, embedding defaults, base URLs.
//!
//! Pure static data. Lookups never fail — an unknown provider yields an empty
//! model list or `None`, and callers decide what that means. Model lists are
//! kept in declaration order; vendor catalogs evolve faster than this table,
//! so absence from a list is advisory, not fatal (see the factory).

/// One provider's registry entry.
#[derive(Debug, Clone)]
pub struct ProviderRecord {
    pub id: &'static str,
    pub models: &'static [&'static str],
    pub default_embedding_model: &'static str,
    pub default_api_key_env: &'static str,
    pub default_base_url: &'static str,
}

const PROVIDERS: &[ProviderRecord] = &[
    ProviderRecord {
        id: "openai",
        models: &[
            "gpt-4o",
            "gpt-4o-mini",
            "gpt-4-turbo",
            "gpt-4",
            "gpt-3.5-turbo",
        ],
        default_embedding_model: "text-embedding-3-small",
        default_api_key_env: "OPENAI_API_KEY",
        default_base_url: "https://api.openai.com/v1",
    },
    ProviderRecord {
        id: "gemini",
        models: &[
            "gemini-2.0-flash",
            "gemini-1.5-pro",
            "gemini-1.5-flash",
        ],
        default_embedding_model: "text-embedding-004",
        default_api_key_env: "GEMINI_API_KEY",
        default_base_url: "https://generativelanguage.googleapis.com",
    },
];

/// Look up a provider's record, case-insensitive on the name.
#[must_use]
pub fn record(provider: &str) -> Option<&'static ProviderRecord> {
    PROVIDERS.iter().find(|p| p.id == provider.to_lowercase())
}

/// All provider identifiers in declaration order.
#[must_use]
pub fn all_providers() -> impl Iterator<Item = &'static str> {
    PROVIDERS.iter().map(|p| p.id)
}

/// Supported models for a provider, empty for an unknown provider.
#[must_use]
pub fn supported_models(provider: &str) -> &'static [&'static str] {
    record(provider).map_or(&[], |p| p.models)
}

/// The provider's default embedding model, if the provider is known.
#[must_use]
pub fn default_embedding_model(provider: &str) -> Option<&'static str> {
    record(provider).map(|p| p.default_embedding_model)
}

#[must_use]
pub fn is_model_supported(provider: &str, model: &str) -> bool {
    supported_models(provider).contains(&model)
}

/// First declared provider whose model list contains the exact string.
///
/// Best-effort: if the same model name ever appears under two providers the
/// first declared one wins. Prefer carrying the (provider, model) pair where
/// it is available.
#[must_use]
pub fn infer_provider_from_model(model: &str) -> Option<&'static str> {
    PROVIDERS
        .iter()
        .find(|p| p.models.contains(&model))
        .map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_providers() {
        assert!(record("openai").is_some());
        assert!(record("gemini").is_some());
        assert!(record("OpenAI").is_some()); // case-insensitive
        assert!(record("unknown_provider").is_none());
    }

    #[test]
    fn test_declaration_order() {
        let providers: Vec<&str> = all_providers().collect();
        assert_eq!(providers, vec!["openai", "gemini"]);
    }

    #[test]
    fn test_unknown_provider_has_no_models() {
        assert!(supported_models("nope").is_empty());
        assert!(default_embedding_model("nope").is_none());
    }

    #[test]
    fn test_every_registry_pair_is_supported() {
        for provider in all_providers() {
            for model in supported_models(provider) {
                assert!(
                    is_model_supported(provider, model),
                    "{provider}/{model} should be supported"
                );
            }
        }
    }

    #[test]
    fn test_model_not_in_list_is_unsupported() {
        assert!(!is_model_supported("openai", "gemini-1.5-pro"));
        assert!(!is_model_supported("openai", "made-up-model"));
    }

    #[test]
    fn test_infer_provider_is_left_inverse_for_unique_models() {
        assert_eq!(infer_provider_from_model("gpt-4o"), Some("openai"));
        assert_eq!(infer_provider_from_model("gemini-1.5-pro"), Some("gemini"));
        assert_eq!(infer_provider_from_model("no-such-model"), None);
    }

    #[test]
    fn test_embedding_defaults() {
        assert_eq!(
            default_embedding_model("openai"),
            Some("text-embedding-3-small")
        );
        assert_eq!(
            default_embedding_model("gemini"),
            Some("text-embedding-004")
        );
    }
}
