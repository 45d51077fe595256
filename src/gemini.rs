//! Native client for the Gemini generative language API.
//!
//! Gemini already speaks the neutral protocol, so this client carries no
//! translation layer: the neutral types serialize directly as the wire format
//! and responses deserialize straight back into them.

use crate::error::{BridgeError, Result};
use crate::generator::{ContentGenerator, ContentStream};
use crate::types::{
    Content, ContentEmbedding, CountTokensRequest, CountTokensResponse, EmbedContentRequest,
    EmbedContentResponse, GenerateContentRequest, GenerateContentResponse, Part,
};

use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures::StreamExt;
use serde::{Deserialize, Serialize};

const PROVIDER: &str = "Gemini";

/// Client bound to one model and endpoint at construction; satisfies the
/// generator contract directly.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    embedding_model: String,
    base_url: String,
}

// Wire shapes for the endpoints whose bodies differ from the neutral types.

#[derive(Debug, Serialize)]
struct GeminiEmbedRequest {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct GeminiEmbedResponse {
    embedding: ContentEmbedding,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    code: u16,
    message: String,
}

impl GeminiClient {
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

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:{method}",
            self.base_url.trim_end_matches('/')
        )
    }

    async fn send(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| BridgeError::call(PROVIDER, e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let text = response.text().await.unwrap_or_default();
            return Err(error_from_body(status, &text));
        }

        Ok(response)
    }

    async fn post_and_parse<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let response = self.send(url, body).await?;
        let text = response
            .text()
            .await
            .map_err(|e| BridgeError::call(PROVIDER, e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| {
            BridgeError::call(PROVIDER, format!("unparseable response: {e}"))
        })
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(&self.model, "generateContent");
        tracing::info!(model = %self.model, "POST {url}");
        self.post_and_parse(&url, &request).await
    }

    async fn generate_content_stream(
        &self,
        request: GenerateContentRequest,
    ) -> Result<ContentStream> {
        let url = format!(
            "{}?alt=sse",
            self.endpoint(&self.model, "streamGenerateContent")
        );
        tracing::info!(model = %self.model, "POST {url} (streaming)");

        let response = self.send(&url, &request).await?;
        let events = response.bytes_stream().eventsource();

        let stream = async_stream::stream! {
            tokio::pin!(events);

            while let Some(event) = events.next().await {
                let event = match event {
                    Ok(e) => e,
                    Err(e) => {
                        yield Err(BridgeError::call(PROVIDER, e.to_string()));
                        return;
                    }
                };

                match serde_json::from_str::<GenerateContentResponse>(&event.data) {
                    Ok(resp) => yield Ok(resp),
                    Err(e) => tracing::debug!("skipping unparseable chunk: {e}"),
                }
            }

            tracing::debug!("stream completed");
        };

        Ok(Box::pin(stream))
    }

    async fn count_tokens(&self, request: CountTokensRequest) -> Result<CountTokensResponse> {
        let url = self.endpoint(&self.model, "countTokens");
        tracing::info!(model = %self.model, "POST {url}");
        self.post_and_parse(&url, &request).await
    }

    async fn embed_content(&self, request: EmbedContentRequest) -> Result<EmbedContentResponse> {
        let url = self.endpoint(&self.embedding_model, "embedContent");

        // Same single-input behavior as the translated path: first non-empty
        // text wins.
        let input = crate::types::first_text(request.contents.as_slice()).unwrap_or_default();

        let embed_req = GeminiEmbedRequest {
            content: Content {
                role: None,
                parts: vec![Part::text(input)],
            },
        };

        tracing::info!(model = %self.embedding_model, "POST {url}");

        let resp: GeminiEmbedResponse = self.post_and_parse(&url, &embed_req).await?;

        Ok(EmbedContentResponse {
            embeddings: vec![resp.embedding],
        })
    }
}

fn error_from_body(status: u16, body: &str) -> BridgeError {
    if let Ok(envelope) = serde_json::from_str::<GeminiErrorEnvelope>(body) {
        let status = if envelope.error.code > 0 {
            envelope.error.code
        } else {
            status
        };
        BridgeError::api(PROVIDER, status, envelope.error.message)
    } else {
        BridgeError::api(PROVIDER, status, body.to_string())
    }
}
