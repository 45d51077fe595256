//! The uniform contract every adapter satisfies.

use crate::error::Result;
use crate::types::{
    CountTokensRequest, CountTokensResponse, EmbedContentRequest, EmbedContentResponse,
    GenerateContentRequest, GenerateContentResponse,
};
use async_trait::async_trait;
use futures::stream::Stream;
use std::pin::Pin;

/// A finite, non-restartable stream of neutral responses. Each element is
/// produced only when the consumer polls for it; dropping the stream drops
/// the underlying vendor response body, which releases the connection.
pub type ContentStream = Pin<Box<dyn Stream<Item = Result<GenerateContentResponse>> + Send>>;

/// One polymorphic interface over every back end, so callers never branch on
/// provider identity. Selected once, at construction, by the factory.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Single-shot generation. Exactly one candidate is produced.
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;

    /// Streaming generation. A fresh call is needed to replay; abandoning the
    /// stream part-way cancels the vendor request.
    async fn generate_content_stream(
        &self,
        request: GenerateContentRequest,
    ) -> Result<ContentStream>;

    /// Token count for the request's text. Back ends without a native
    /// counting endpoint return an approximation, never billing-grade.
    async fn count_tokens(&self, request: CountTokensRequest) -> Result<CountTokensResponse>;

    /// Embed the first non-empty text found in the request.
    async fn embed_content(&self, request: EmbedContentRequest) -> Result<EmbedContentResponse>;
}
