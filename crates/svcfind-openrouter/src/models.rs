//! OpenRouter wire types.
//!
//! Only the fields this service reads or writes are modelled; everything else
//! in the provider envelope is ignored on decode.

use serde::{Deserialize, Serialize};

/// Message role sent to the provider.
pub const ROLE_USER: &str = "user";

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_USER.to_string(),
            content: content.into(),
        }
    }
}

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Provider response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    /// Null content decodes as empty.
    #[serde(default)]
    pub content: Option<String>,
}

/// Response of `GET /key`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct KeyStatusEnvelope {
    pub data: KeyStatus,
}

/// Usage and limits of the configured API key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_remaining: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_free_tier: Option<bool>,
    /// Fields not modelled above, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "openai/gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::user("hi")],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"model":"openai/gpt-4o-mini","messages":[{"role":"user","content":"hi"}]}"#
        );
    }

    #[test]
    fn test_response_ignores_unknown_fields_and_null_content() {
        let body = r#"{
            "id": "gen-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": null}}],
            "usage": {"total_tokens": 10}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert!(response.choices[0].message.content.is_none());
    }

    #[test]
    fn test_key_status_keeps_extra_fields() {
        let body = r#"{"data":{"label":"sk-or-v1-abc","usage":1.5,"limit":null,"is_free_tier":false,"rate_limit":{"requests":10,"interval":"10s"}}}"#;
        let envelope: KeyStatusEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.label.as_deref(), Some("sk-or-v1-abc"));
        assert_eq!(envelope.data.usage, Some(1.5));
        assert!(envelope.data.limit.is_none());
        assert!(envelope.data.extra.contains_key("rate_limit"));
    }
}
