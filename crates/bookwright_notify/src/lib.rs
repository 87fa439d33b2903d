//! Editor notification delivery for Bookwright.
//!
//! Two [`bookwright_interface::Notifier`] implementations are provided:
//! [`WebhookNotifier`] posts each message as JSON to an HTTP endpoint, and
//! [`LogNotifier`] writes it to the log when no delivery channel is
//! configured. [`notifier_from_settings`] picks between them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod log;
mod settings;
mod webhook;

pub use log::LogNotifier;
pub use settings::{NotifySettings, notifier_from_settings};
pub use webhook::{WebhookNotifier, WebhookPayload};
