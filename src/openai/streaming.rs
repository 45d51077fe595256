//! State machine for translating OpenAI streaming chunks into neutral
//! responses.
//!
//! The [`ChunkTranslator`] processes `ChatCompletionChunk`s one at a time.
//! Emission runs one chunk behind the wire: a text-bearing chunk becomes the
//! new pending response and flushes the previous one, while a textless chunk
//! that carries a finish reason attaches that reason to the pending response.
//! OpenAI terminates streams with an empty delta plus `finish_reason`, so
//! this keeps empty emissions out of the neutral stream without losing the
//! final reason.

use crate::types::{Candidate, Content, GenerateContentResponse, Part, Role};

use super::response::map_finish_reason;
use super::types::ChatCompletionChunk;

/// Translates a sequence of OpenAI chunks into neutral responses.
///
/// Usage:
///   let mut translator = ChunkTranslator::new();
///   for chunk in openai_chunks {
///       if let Some(resp) = translator.process_chunk(&chunk) { yield resp; }
///   }
///   if let Some(resp) = translator.finish() { yield resp; }
#[derive(Debug, Default)]
pub struct ChunkTranslator {
    pending: Option<GenerateContentResponse>,
}

impl ChunkTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one chunk, returning at most one response ready to emit.
    pub fn process_chunk(&mut self, chunk: &ChatCompletionChunk) -> Option<GenerateContentResponse> {
        let choice = chunk.choices.first()?;

        let finish_reason = map_finish_reason(choice.finish_reason.as_deref());
        let text = choice
            .delta
            .content
            .as_deref()
            .filter(|s| !s.is_empty());

        match text {
            Some(text) => {
                let next = GenerateContentResponse {
                    candidates: vec![Candidate {
                        content: Content {
                            role: Some(Role::Model),
                            parts: vec![Part::text(text)],
                        },
                        finish_reason,
                        index: 0,
                    }],
                    // The native API surfaces aggregate usage only on the
                    // non-streaming path.
                    usage_metadata: None,
                };
                self.pending.replace(next)
            }
            None => {
                if finish_reason.is_some() {
                    if let Some(pending) = self.pending.as_mut() {
                        if let Some(candidate) = pending.candidates.first_mut() {
                            candidate.finish_reason = finish_reason;
                        }
                    }
                }
                None
            }
        }
    }

    /// Call when the wire stream ends to flush the held-back response.
    pub fn finish(&mut self) -> Option<GenerateContentResponse> {
        self.pending.take()
    }
}
