//! Notifier that only records messages in the log.

use async_trait::async_trait;
use bookwright_error::BookwrightResult;
use bookwright_interface::Notifier;
use tracing::info;

/// Writes notifications to the log instead of delivering them.
///
/// Used when no delivery channel is configured, so a run still shows
/// which editor actions are pending.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a log notifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, subject: &str, body: &str) -> BookwrightResult<()> {
        info!(subject, body, "Notification not sent: no delivery channel configured");
        Ok(())
    }
}
