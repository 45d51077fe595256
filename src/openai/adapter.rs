//! The OpenAI-bound translation adapter: owns the HTTP calls and converts
//! between the neutral shape and the wire types via the pure translation
//! functions in this module's siblings.

use crate::error::{BridgeError, Result};
use crate::generator::{ContentGenerator, ContentStream};
use crate::types::{
    first_text, joined_text, ContentEmbedding, CountTokensRequest, CountTokensResponse,
    EmbedContentRequest, EmbedContentResponse, GenerateContentRequest, GenerateContentResponse,
};

use super::request::to_chat_request;
use super::response::from_chat_response;
use super::streaming::ChunkTranslator;
use super::types::{
    ChatCompletionChunk, ChatCompletionResponse, ChatErrorResponse, EmbeddingRequest,
    EmbeddingResponse,
};

use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures::StreamExt;

const PROVIDER: &str = "OpenAI";

/// Adapter bound to one model, embedding model, and endpoint at construction.
/// All fields are immutable for the adapter's lifetime; each call opens its
/// own request and no state is shared across concurrent invocations.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_key: String,
    model: String,
    embedding_model: String,
    base_url: String,
}

impl OpenAiAdapter {
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        embedding_model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            embedding_model: embedding_model.into(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post_json(&self, url: &str, body: &impl serde::Serialize) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| BridgeError::call(PROVIDER, e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BridgeError::call(PROVIDER, e.to_string()))?;

        tracing::debug!(status, body_len = text.len(), "response from {url}");

        if status >= 400 {
            return Err(error_from_body(status, &text));
        }

        Ok(text)
    }
}

#[async_trait]
impl ContentGenerator for OpenAiAdapter {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint("chat/completions");
        let chat_req = to_chat_request(&request, &self.model, false);

        tracing::info!(model = %chat_req.model, messages = chat_req.messages.len(), "POST {url}");

        let body = self.post_json(&url, &chat_req).await?;

        let chat_resp: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            BridgeError::call(
                PROVIDER,
                format!("unparseable response: {e}. Body: {}", truncate(&body, 300)),
            )
        })?;

        Ok(from_chat_response(&chat_resp))
    }

    async fn generate_content_stream(
        &self,
        request: GenerateContentRequest,
    ) -> Result<ContentStream> {
        let url = self.endpoint("chat/completions");
        let chat_req = to_chat_request(&request, &self.model, true);

        tracing::info!(model = %chat_req.model, "POST {url} (streaming)");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&chat_req)
            .send()
            .await
            .map_err(|e| BridgeError::call(PROVIDER, e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_body(status, &body));
        }

        let events = response
            .bytes_stream()
            .eventsource()
            .map(|event| event.map(|e| e.data));

        Ok(sse_translate_stream(events))
    }

    /// No native counting endpoint exists; the count is ceil(chars / 4) over
    /// the request's text. An approximation, never billing-grade.
    async fn count_tokens(&self, request: CountTokensRequest) -> Result<CountTokensResponse> {
        let text = joined_text(request.contents.as_slice());
        let total_tokens = text.chars().count().div_ceil(4) as u32;
        Ok(CountTokensResponse { total_tokens })
    }

    async fn embed_content(&self, request: EmbedContentRequest) -> Result<EmbedContentResponse> {
        let url = self.endpoint("embeddings");

        // Single-input limitation: only the first non-empty text is embedded.
        let input = first_text(request.contents.as_slice()).unwrap_or_default();

        let embed_req = EmbeddingRequest {
            model: self.embedding_model.clone(),
            input: input.to_string(),
        };

        tracing::info!(model = %embed_req.model, "POST {url}");

        let body = self.post_json(&url, &embed_req).await?;

        let embed_resp: EmbeddingResponse = serde_json::from_str(&body).map_err(|e| {
            BridgeError::call(
                PROVIDER,
                format!("unparseable response: {e}. Body: {}", truncate(&body, 300)),
            )
        })?;

        // A response with no data entries yields an empty vector, not an error.
        let values = embed_resp
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .unwrap_or_default();

        Ok(EmbedContentResponse {
            embeddings: vec![ContentEmbedding { values }],
        })
    }
}

/// Translate a stream of SSE data payloads into neutral responses. A failure
/// from the underlying stream is wrapped like the non-streaming path and
/// terminates the sequence; the held-back response is discarded, never
/// flushed after an error.
fn sse_translate_stream<S, E>(data_stream: S) -> ContentStream
where
    S: futures::Stream<Item = std::result::Result<String, E>> + Send + 'static,
    E: std::fmt::Display + Send,
{
    let stream = async_stream::stream! {
        let mut translator = ChunkTranslator::new();
        tokio::pin!(data_stream);

        while let Some(data) = data_stream.next().await {
            let data = match data {
                Ok(d) => d,
                Err(e) => {
                    yield Err(BridgeError::call(PROVIDER, e.to_string()));
                    return;
                }
            };

            if data == "[DONE]" {
                break;
            }

            let chunk: ChatCompletionChunk = match serde_json::from_str(&data) {
                Ok(c) => c,
                Err(e) => {
                    tracing::debug!("skipping unparseable chunk: {e}");
                    continue;
                }
            };

            if let Some(resp) = translator.process_chunk(&chunk) {
                yield Ok(resp);
            }
        }

        if let Some(resp) = translator.finish() {
            yield Ok(resp);
        }

        tracing::debug!("stream completed");
    };

    Box::pin(stream)
}

fn error_from_body(status: u16, body: &str) -> BridgeError {
    if let Ok(err) = serde_json::from_str::<ChatErrorResponse>(body) {
        BridgeError::api(PROVIDER, status, err.error.message)
    } else {
        BridgeError::api(PROVIDER, status, truncate(body, 500))
    }
}

// Cuts at the nearest char boundary at or below `max` bytes; vendor error
// bodies are arbitrary text and may put a multibyte char on the limit.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
