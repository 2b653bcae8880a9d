//! Wire types for the messages endpoint.

use serde::{Deserialize, Serialize};

use crate::translation::error::{TranslationError, TranslationResult};

/// Request body for one messages call.
#[derive(Clone, Debug, Serialize)]
pub struct MessagesRequest {
    /// Model identifier.
    pub model: String,
    /// Generation token budget.
    pub max_tokens: u32,
    /// Conversation; always a single user turn here.
    pub messages: Vec<Message>,
}

impl MessagesRequest {
    /// Build a single-turn request carrying `prompt` as the user message.
    #[must_use]
    pub fn single_turn(
        model: impl Into<String>,
        max_tokens: u32,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: vec![Message {
                role: Role::User,
                content: prompt.into(),
            }],
        }
    }
}

/// One conversation message.
#[derive(Clone, Debug, Serialize)]
pub struct Message {
    /// Author of the message.
    pub role: Role,
    /// Plain-text content.
    pub content: String,
}

/// Message author.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// End user.
    User,
}

/// Response envelope. Only `content` is consumed.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessagesResponse {
    /// Generated content blocks, in order.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// One block of generated content.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContentBlock {
    /// Text of the block; absent for non-text blocks.
    #[serde(default)]
    pub text: Option<String>,
}

impl MessagesResponse {
    /// Parse a raw response body.
    ///
    /// # Errors
    /// Returns a protocol error if the body is not a JSON object of the expected shape.
    pub fn from_body(body: &str) -> TranslationResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Text of the first content block. Later blocks are ignored.
    ///
    /// # Errors
    /// Returns a protocol error if there is no block or its text is missing or empty.
    pub fn first_text(&self) -> TranslationResult<&str> {
        self.content
            .first()
            .and_then(|block| block.text.as_deref())
            .filter(|text| !text.is_empty())
            .ok_or_else(TranslationError::invalid_response)
    }
}

/// Provider error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Error detail.
    pub error: ApiErrorDetail,
}

/// Provider error detail.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// Error category, e.g. `authentication_error`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Human-readable message.
    pub message: String,
}

/// Longest body excerpt embedded in an HTTP status error.
const BODY_SNIPPET_CHARS: usize = 200;

/// Describe a non-success body: the provider message when present, else a snippet.
#[must_use]
pub fn describe_error_body(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        let ApiErrorDetail { kind, mut message } = parsed.error;
        if let Some(kind) = kind {
            message = format!("{kind}: {message}");
        }
        return message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(BODY_SNIPPET_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::error::ErrorKind;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_request_shape() {
        let request = MessagesRequest::single_turn("model-x", 1024, "hello");
        let value = serde_json::to_value(&request).unwrap_or_default();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "model-x",
                "max_tokens": 1024,
                "messages": [{ "role": "user", "content": "hello" }]
            })
        );
    }

    #[test]
    fn test_first_text_ignores_extra_fields_and_blocks() -> TestResult {
        let body = r#"{
            "id": "msg_1",
            "type": "message",
            "content": [
                {"type": "text", "text": "first"},
                {"type": "text", "text": "second"}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 2}
        }"#;
        let response = MessagesResponse::from_body(body)?;
        assert_eq!(response.content.len(), 2);
        assert_eq!(response.first_text()?, "first");
        Ok(())
    }

    #[test]
    fn test_empty_content_is_protocol_error() -> TestResult {
        let response = MessagesResponse::from_body(r#"{"content": []}"#)?;
        assert!(response.content.is_empty());

        let err = response.first_text().err();
        assert_eq!(err.as_ref().map(TranslationError::kind), Some(ErrorKind::Protocol));
        assert_eq!(
            err.map(|e| e.to_string()).as_deref(),
            Some("invalid response from API")
        );
        Ok(())
    }

    #[test]
    fn test_missing_content_and_empty_text() -> TestResult {
        let missing = MessagesResponse::from_body(r#"{"id": "msg_1"}"#)?;
        assert!(missing.content.is_empty());
        assert!(missing.first_text().is_err());

        let empty = MessagesResponse::from_body(r#"{"content": [{"text": ""}]}"#)?;
        assert_eq!(empty.content.len(), 1);
        assert_eq!(empty.content[0].text.as_deref(), Some(""));
        assert!(empty.first_text().is_err());

        let non_text = MessagesResponse::from_body(r#"{"content": [{"type": "tool_use"}]}"#)?;
        assert_eq!(non_text.content.len(), 1);
        assert!(non_text.content[0].text.is_none());
        assert!(non_text.first_text().is_err());
        Ok(())
    }

    #[test]
    fn test_malformed_body() {
        let err = MessagesResponse::from_body("<html>bad gateway</html>").err();
        assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Protocol));
    }

    #[test]
    fn test_describe_error_body() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        assert_eq!(describe_error_body(body), "overloaded_error: Overloaded");
        assert_eq!(describe_error_body("  "), "empty response body");
        assert_eq!(describe_error_body("upstream down"), "upstream down");
        assert_eq!(describe_error_body(&"x".repeat(500)).len(), 200);
    }
}
