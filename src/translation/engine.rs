//! Translation engine: validates input, calls the model, shapes the result.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::ExplainerConfig;
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::prompt::build_prompt;
use crate::translation::protocol::MessagesRequest;
use crate::translation::shaper::{
    MAX_CHARACTERS, Translation, TranslationFailure, TranslationOutcome,
};
use crate::translation::transport::{HttpTransport, MessagesTransport};

/// Turns radiology impressions into patient-friendly summaries.
pub struct TranslationEngine<T = HttpTransport> {
    transport: T,
    model: String,
    max_tokens: u32,
}

impl TranslationEngine<HttpTransport> {
    /// Create an engine talking HTTPS to the configured endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built from `config` and `api_key`.
    pub fn new(config: &ExplainerConfig, api_key: &str) -> TranslationResult<Self> {
        let transport = HttpTransport::new(config, api_key)?;
        info!(
            "Initialized TranslationEngine: model={}, endpoint={}",
            config.model,
            transport.endpoint()
        );
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: MessagesTransport> TranslationEngine<T> {
    /// Create an engine over any transport.
    #[must_use]
    pub fn with_transport(config: &ExplainerConfig, transport: T) -> Self {
        Self {
            transport,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Translate an impression. Every failure is folded into the outcome.
    pub async fn translate(&self, impression: &str) -> TranslationOutcome {
        self.try_translate(impression).await.map_or_else(
            |err| {
                let failure = TranslationFailure::from(&err);
                warn!(kind = %failure.kind, "{}", failure.message);
                TranslationOutcome::Failure(failure)
            },
            TranslationOutcome::Success,
        )
    }

    /// Translate an impression, surfacing the typed error.
    ///
    /// # Errors
    /// Returns [`TranslationError::InvalidInput`] for blank input without touching the
    /// network, otherwise any transport or protocol error from the round trip.
    pub async fn try_translate(&self, impression: &str) -> TranslationResult<Translation> {
        if impression.trim().is_empty() {
            return Err(TranslationError::InvalidInput(
                "Impression text cannot be empty".to_string(),
            ));
        }

        let prompt = build_prompt(impression, MAX_CHARACTERS);
        debug!(prompt_chars = prompt.chars().count(), model = %self.model, "built prompt");
        let request = MessagesRequest::single_turn(self.model.as_str(), self.max_tokens, prompt);

        let started = Instant::now();
        let response = self.transport.send(&request).await?;
        let raw = response.first_text()?;
        let translation = Translation::shape(raw, started);

        info!(
            chars = translation.character_count,
            ms = translation.response_time_ms,
            truncated = translation.character_count != raw.chars().count(),
            "translation complete"
        );
        Ok(translation)
    }
}
