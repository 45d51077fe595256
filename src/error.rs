//! Error types for the bridge.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BridgeError {
    /// Missing or unusable configuration, detected before any network call.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The factory has no dispatch target for the requested provider.
    #[error("Unsupported provider: {provider}")]
    UnsupportedProvider { provider: String },

    /// A structured error returned by the vendor API, with its HTTP status.
    #[error("{provider} API error (status {status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    /// Any other failure from a vendor call during generate/stream/embed.
    #[error("{provider} API call failed: {message}")]
    Call {
        provider: &'static str,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BridgeError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported_provider(provider: impl Into<String>) -> Self {
        Self::UnsupportedProvider {
            provider: provider.into(),
        }
    }

    pub fn api(provider: &'static str, status: u16, msg: impl Into<String>) -> Self {
        Self::Api {
            provider,
            status,
            message: msg.into(),
        }
    }

    pub fn call(provider: &'static str, msg: impl Into<String>) -> Self {
        Self::Call {
            provider,
            message: msg.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
