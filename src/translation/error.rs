//! Error types for the translation pipeline.

use std::fmt;

use thiserror::Error;

/// Translation pipeline error type.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Impression text was empty or whitespace-only.
    #[error("{0}")]
    InvalidInput(String),
    /// The messages endpoint answered with a non-success status.
    #[error("API returned status {status}: {message}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Provider error message or a snippet of the body.
        message: String,
    },
    /// Connection, timeout or body transfer failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body did not have the expected shape.
    #[error("{0}")]
    Protocol(String),
    /// Anything else.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Coarse classification of a [`TranslationError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or whitespace-only impression.
    InvalidInput,
    /// Connection failure or non-success HTTP status.
    Transport,
    /// Malformed or empty response envelope.
    Protocol,
    /// Any other failure.
    Unexpected,
}

impl ErrorKind {
    /// Stable lowercase name, used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Transport => "transport",
            Self::Protocol => "protocol",
            Self::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TranslationError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::HttpStatus { .. } | Self::Transport(_) => ErrorKind::Transport,
            Self::Protocol(_) => ErrorKind::Protocol,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Shorthand for the protocol error raised on an unusable envelope.
    #[must_use]
    pub fn invalid_response() -> Self {
        Self::Protocol("invalid response from API".to_string())
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(value: serde_json::Error) -> Self {
        Self::Protocol(format!("invalid response from API: {value}"))
    }
}

/// Convenience result alias for translation operations.
pub type TranslationResult<T> = Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            TranslationError::InvalidInput("x".to_string()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            TranslationError::HttpStatus {
                status: 500,
                message: "boom".to_string()
            }
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(TranslationError::invalid_response().kind(), ErrorKind::Protocol);
        assert_eq!(
            TranslationError::Unexpected("x".to_string()).kind(),
            ErrorKind::Unexpected
        );
    }

    #[test]
    fn test_json_error_is_protocol() {
        let err = serde_json::from_str::<serde_json::Value>("{not json")
            .map_err(TranslationError::from)
            .err();
        assert_eq!(err.as_ref().map(TranslationError::kind), Some(ErrorKind::Protocol));
        assert!(err.is_some_and(|e| e.to_string().starts_with("invalid response from API")));
    }

    #[test]
    fn test_http_status_message() {
        let err = TranslationError::HttpStatus {
            status: 401,
            message: "invalid x-api-key".to_string(),
        };
        assert_eq!(err.to_string(), "API returned status 401: invalid x-api-key");
    }
}
