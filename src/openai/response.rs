//! Translate OpenAI Chat Completion responses into the neutral shape.

use crate::types::{
    Candidate, Content, FinishReason, GenerateContentResponse, Part, Role, UsageMetadata,
};

use super::types::ChatCompletionResponse;

/// Translate an OpenAI response into a neutral response.
/// Pure function: only candidate 0 of the native response is considered.
pub fn from_chat_response(resp: &ChatCompletionResponse) -> GenerateContentResponse {
    let choice = resp.choices.first();

    let text = choice
        .and_then(|c| c.message.content.clone())
        .unwrap_or_default();

    let finish_reason = choice.and_then(|c| map_finish_reason(c.finish_reason.as_deref()));

    let usage_metadata = resp.usage.as_ref().map(|u| UsageMetadata {
        prompt_token_count: u.prompt_tokens,
        candidates_token_count: u.completion_tokens,
        total_token_count: u.total_tokens,
    });

    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Content {
                role: Some(Role::Model),
                parts: vec![Part::text(text)],
            },
            finish_reason,
            index: 0,
        }],
        usage_metadata,
    }
}

/// Map an OpenAI finish_reason string onto the neutral enum. Case-sensitive:
/// an absent reason stays unset, while any unrecognized non-null string is
/// `Other`.
pub fn map_finish_reason(reason: Option<&str>) -> Option<FinishReason> {
    match reason {
        None => None,
        Some("stop") => Some(FinishReason::Stop),
        Some("length") => Some(FinishReason::MaxTokens),
        Some("content_filter") => Some(FinishReason::Safety),
        Some(_) => Some(FinishReason::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::types::{ChatUsage, Choice, ChoiceMessage};

    fn make_response(
        content: Option<String>,
        finish_reason: Option<String>,
        usage: Option<ChatUsage>,
    ) -> ChatCompletionResponse {
        ChatCompletionResponse {
            id: "chatcmpl-abc123".to_string(),
            created: 0,
            model: "gpt-4o".to_string(),
            choices: vec![Choice {
                index: 0,
                message: ChoiceMessage {
                    role: "assistant".to_string(),
                    content,
                },
                finish_reason,
            }],
            usage,
        }
    }

    #[test]
    fn test_simple_text_response() {
        let resp = make_response(
            Some("Hello!".to_string()),
            Some("stop".to_string()),
            Some(ChatUsage {
                prompt_tokens: 10,
                completion_tokens: 20,
                total_tokens: 30,
            }),
        );

        let result = from_chat_response(&resp);

        assert_eq!(result.candidates.len(), 1);
        let candidate = &result.candidates[0];
        assert_eq!(candidate.index, 0);
        assert_eq!(candidate.content.role, Some(Role::Model));
        assert_eq!(candidate.content.text(), "Hello!");
        assert_eq!(candidate.finish_reason, Some(FinishReason::Stop));

        let usage = result.usage_metadata.expect("usage should be copied");
        assert_eq!(usage.prompt_token_count, 10);
        assert_eq!(usage.candidates_token_count, 20);
        assert_eq!(usage.total_token_count, 30);
    }

    #[test]
    fn test_missing_usage_is_omitted_not_zero_filled() {
        let resp = make_response(Some("hi".to_string()), Some("stop".to_string()), None);
        let result = from_chat_response(&resp);
        assert!(result.usage_metadata.is_none());
    }

    #[test]
    fn test_absent_message_text_becomes_empty_string() {
        let resp = make_response(None, None, None);
        let result = from_chat_response(&resp);
        assert_eq!(result.candidates[0].content.text(), "");
        assert_eq!(result.candidates[0].finish_reason, None);
    }

    #[test]
    fn test_finish_reason_mapping_is_total() {
        assert_eq!(map_finish_reason(Some("stop")), Some(FinishReason::Stop));
        assert_eq!(
            map_finish_reason(Some("length")),
            Some(FinishReason::MaxTokens)
        );
        assert_eq!(
            map_finish_reason(Some("content_filter")),
            Some(FinishReason::Safety)
        );
        assert_eq!(map_finish_reason(None), None);
        assert_eq!(
            map_finish_reason(Some("tool_calls")),
            Some(FinishReason::Other)
        );
        // Case-sensitive: an unexpected casing is just another unknown string.
        assert_eq!(map_finish_reason(Some("STOP")), Some(FinishReason::Other));
    }

    #[test]
    fn test_mapping_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(map_finish_reason(Some("stop")), Some(FinishReason::Stop));
            assert_eq!(map_finish_reason(None), None);
        }
    }
}
