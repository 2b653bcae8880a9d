//! Transport for the messages endpoint.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::config::ExplainerConfig;
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::protocol::{MessagesRequest, MessagesResponse, describe_error_body};

const API_KEY_HEADER: &str = "x-api-key";
const API_VERSION_HEADER: &str = "anthropic-version";

/// Sends one messages request and returns the parsed envelope.
#[async_trait]
pub trait MessagesTransport: Send + Sync {
    /// Perform the round trip.
    async fn send(&self, request: &MessagesRequest) -> TranslationResult<MessagesResponse>;
}

/// HTTPS transport backed by a shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport whose every request carries the key and version headers.
    ///
    /// # Errors
    /// Returns an error if the key is not a valid header value or the client cannot be built.
    pub fn new(config: &ExplainerConfig, api_key: &str) -> TranslationResult<Self> {
        let mut headers = HeaderMap::new();

        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            TranslationError::Unexpected(
                "API key contains characters not allowed in a header".to_string(),
            )
        })?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let version = HeaderValue::from_str(&config.api_version).map_err(|_| {
            TranslationError::Unexpected(format!("invalid api_version: {}", config.api_version))
        })?;
        headers.insert(API_VERSION_HEADER, version);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.api_url.clone(),
        })
    }

    /// Endpoint requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MessagesTransport for HttpTransport {
    async fn send(&self, request: &MessagesRequest) -> TranslationResult<MessagesResponse> {
        debug!(endpoint = %self.endpoint, model = %request.model, "posting messages request");

        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = describe_error_body(&body);
            warn!(status = status.as_u16(), %message, "messages endpoint returned an error");
            return Err(TranslationError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        MessagesResponse::from_body(&body)
    }
}
