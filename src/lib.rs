//! One uniform interface for content generation, streaming, token counting,
//! and embeddings across incompatible LLM back ends.
//!
//! The calling application talks only to the [`ContentGenerator`] trait; the
//! factory picks the concrete adapter once, at construction. The OpenAI path
//! translates between the neutral shape and the Chat Completions format; the
//! Gemini path is native and needs no translation.
//!
//! ```no_run
//! use llm_bridge::{create_content_generator, AdapterConfig, Content, GenerateContentRequest};
//!
//! # async fn run() -> llm_bridge::Result<()> {
//! let config = AdapterConfig::from_env()?;
//! let generator = create_content_generator(&config)?;
//!
//! let response = generator
//!     .generate_content(GenerateContentRequest {
//!         contents: Content::user("Hello there").into(),
//!         system_instruction: None,
//!     })
//!     .await?;
//!
//! println!("{}", response.text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod gemini;
pub mod generator;
pub mod openai;
pub mod registry;
pub mod types;
pub mod validate;

pub use config::AdapterConfig;
pub use error::{BridgeError, Result};
pub use factory::create_content_generator;
pub use generator::{ContentGenerator, ContentStream};
pub use types::{
    Candidate, Content, ContentEmbedding, ContentList, CountTokensRequest, CountTokensResponse,
    EmbedContentRequest, EmbedContentResponse, FinishReason, GenerateContentRequest,
    GenerateContentResponse, Part, Role, UsageMetadata,
};
pub use validate::{validate_config, ValidationResult};
