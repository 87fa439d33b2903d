//! HTTP client for OpenAI-compatible chat completion endpoints.

use super::dto::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::{RetryPolicy, SamplingSettings};
use bookwright_error::{GenerationError, GenerationErrorKind};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Chat completions client shared by every OpenAI-compatible provider.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    provider: &'static str,
    retry: RetryPolicy,
}

impl OpenAICompatibleClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip(api_key), fields(provider = provider, model = %model))]
    pub fn new(
        api_key: String,
        model: String,
        endpoint: String,
        provider: &'static str,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            GenerationError::new(GenerationErrorKind::Http(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        Ok(Self {
            client,
            api_key,
            model,
            endpoint,
            provider,
            retry: RetryPolicy::disabled(),
        })
    }

    /// Retry transient failures with the given backoff.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Model identifier sent with every request.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Provider name used in logs and errors.
    pub fn provider_name(&self) -> &'static str {
        self.provider
    }

    /// Send one prompt as a user message and return the completion text.
    ///
    /// Rate limits, transport failures and 5xx responses are retried
    /// according to the configured [`RetryPolicy`].
    #[instrument(skip(self, prompt), fields(provider = self.provider, model = %self.model, prompt_len = prompt.len()))]
    pub async fn complete(
        &self,
        prompt: &str,
        sampling: &SamplingSettings,
    ) -> Result<String, GenerationError> {
        let request = ChatCompletionRequest::builder()
            .model(self.model.clone())
            .messages(vec![ChatMessage::user(prompt)])
            .temperature(sampling.temperature)
            .max_tokens(sampling.max_tokens)
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Builder(e.to_string())))?;

        if self.retry.is_disabled() {
            return self.send(&request).await;
        }

        use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};

        let retry_strategy = ExponentialBackoff::from_millis(self.retry.initial_backoff_ms)
            .factor(2)
            .max_delay(Duration::from_secs(self.retry.max_delay_secs))
            .map(jitter)
            .take(self.retry.max_retries);

        Retry::spawn(retry_strategy, || async {
            match self.send(&request).await {
                Ok(text) => Ok(text),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Transient error, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }

    async fn send(&self, request: &ChatCompletionRequest) -> Result<String, GenerationError> {
        debug!(endpoint = %self.endpoint, "Sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::new(classify_status(
                status,
                &self.model,
                message,
            )));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::ResponseParsing(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        body.first_text()
            .map(str::to_string)
            .ok_or_else(|| {
                GenerationError::new(GenerationErrorKind::EmptyResponse(self.provider.to_string()))
            })
    }
}

/// Map a non-success HTTP status to the matching error kind.
///
/// # Examples
///
/// ```
/// use bookwright_error::GenerationErrorKind;
/// use bookwright_models::classify_status;
/// use reqwest::StatusCode;
///
/// let kind = classify_status(StatusCode::TOO_MANY_REQUESTS, "m", String::new());
/// assert_eq!(kind, GenerationErrorKind::RateLimit);
/// ```
pub fn classify_status(status: StatusCode, model: &str, message: String) -> GenerationErrorKind {
    match status {
        StatusCode::TOO_MANY_REQUESTS => GenerationErrorKind::RateLimit,
        StatusCode::NOT_FOUND => GenerationErrorKind::ModelNotFound(model.to_string()),
        _ => GenerationErrorKind::Api {
            status: status.as_u16(),
            message,
        },
    }
}
