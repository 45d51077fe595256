//! Translate neutral generation requests into OpenAI Chat Completions
//! requests.
//!
//! The neutral shape carries structured multi-part content plus a dedicated
//! system instruction; OpenAI wants a flat role/content message list. Every
//! content is reduced to its concatenated text before crossing the boundary —
//! multi-part structure is not preserved through a provider that cannot
//! express it.

use crate::types::{GenerateContentRequest, Role};

use super::types::{ChatCompletionRequest, ChatMessage};

/// Translate a neutral request into an OpenAI chat request.
/// Pure function: takes the request + bound model, returns the wire request.
pub fn to_chat_request(
    req: &GenerateContentRequest,
    model: &str,
    stream: bool,
) -> ChatCompletionRequest {
    let mut messages = Vec::new();

    if let Some(ref system) = req.system_instruction {
        let text = system.text();
        if !text.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: text,
            });
        }
    }

    for content in req.contents.as_slice() {
        let text = content.text();
        // Contents that reduce to no text produce no message at all.
        if text.is_empty() {
            continue;
        }
        let role = match content.role {
            Some(Role::Model) => "assistant",
            Some(Role::User) | None => "user",
        };
        messages.push(ChatMessage {
            role: role.to_string(),
            content: text,
        });
    }

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        stream: stream.then_some(true),
    }
}
