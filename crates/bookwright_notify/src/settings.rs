//! Notification configuration.

use crate::{LogNotifier, WebhookNotifier};
use bookwright_error::BookwrightResult;
use bookwright_interface::Notifier;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// The `[notify]` configuration table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifySettings {
    /// Endpoint receiving `{subject, body}` JSON; notifications are only
    /// logged when unset
    pub webhook_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Extra request headers
    pub headers: HashMap<String, String>,
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: 10,
            headers: HashMap::new(),
        }
    }
}

/// Build the notifier described by the settings.
///
/// # Examples
///
/// ```
/// use bookwright_notify::{NotifySettings, notifier_from_settings};
///
/// let notifier = notifier_from_settings(&NotifySettings::default()).unwrap();
/// # let _ = notifier;
/// ```
pub fn notifier_from_settings(settings: &NotifySettings) -> BookwrightResult<Arc<dyn Notifier>> {
    match settings
        .webhook_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    {
        Some(url) => {
            let notifier = WebhookNotifier::new(url, Duration::from_secs(settings.timeout_secs))?
                .with_headers(settings.headers.clone());
            Ok(Arc::new(notifier))
        }
        None => Ok(Arc::new(LogNotifier::new())),
    }
}
