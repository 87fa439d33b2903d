//! Notifier that posts JSON to an HTTP webhook.

use async_trait::async_trait;
use bookwright_error::{BookwrightResult, NotifyError};
use bookwright_interface::Notifier;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// JSON body sent for each notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Message subject
    pub subject: String,
    /// Message body
    pub body: String,
}

/// Delivers notifications by POSTing a [`WebhookPayload`] to a URL.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: String,
    headers: HashMap<String, String>,
}

impl WebhookNotifier {
    /// Create a webhook notifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is blank or the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(NotifyError::new("Webhook URL is empty"));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url,
            headers: HashMap::new(),
        })
    }

    /// Send extra headers (e.g. an auth token) with every request.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    #[instrument(skip(self, body), fields(url = %self.url))]
    async fn notify(&self, subject: &str, body: &str) -> BookwrightResult<()> {
        let payload = WebhookPayload {
            subject: subject.to_string(),
            body: body.to_string(),
        };

        let mut request = self.client.post(&self.url).json(&payload);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!("Posting notification");
        let response = request
            .send()
            .await
            .map_err(|e| NotifyError::new(format!("Webhook request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::new(format!("Webhook returned {}", status)).into());
        }

        info!(subject, "Notification sent");
        Ok(())
    }
}
