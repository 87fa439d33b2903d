//! Editor-facing messages and best-effort delivery.

use bookwright_interface::Notifier;
use tracing::warn;

/// A message for the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short subject line
    pub subject: String,
    /// Message body
    pub body: String,
}

impl Notification {
    /// A first draft is ready for review.
    pub fn chapter_ready(book_title: &str, chapter_number: u32) -> Self {
        Self {
            subject: "Chapter Ready for Review".to_string(),
            body: format!(
                "Chapter {chapter_number} for '{book_title}' is generated and ready for review.\n\n\
                 To approve: set chapter_notes_status = no_notes_needed\n\
                 To regenerate: set chapter_notes_status = yes AND add chapter_notes."
            ),
        }
    }

    /// The editor asked for changes without writing notes.
    pub fn waiting_for_notes(book_title: &str, chapter_number: u32) -> Self {
        Self {
            subject: "Waiting for Chapter Notes".to_string(),
            body: format!("Chapter {chapter_number} of '{book_title}' is waiting for editor notes."),
        }
    }

    /// A rewrite based on editor notes is ready for review.
    pub fn chapter_updated(book_title: &str, chapter_number: u32) -> Self {
        Self {
            subject: "Chapter Updated for Review".to_string(),
            body: format!(
                "Chapter {chapter_number} for '{book_title}' was regenerated using your notes and is ready for review."
            ),
        }
    }

    /// Every chapter is approved and the book moved to the final stage.
    pub fn all_approved(book_title: &str) -> Self {
        Self {
            subject: "All Chapters Approved".to_string(),
            body: format!(
                "All chapters for '{book_title}' are approved. Book moved to FINAL stage."
            ),
        }
    }

    /// The manuscript was compiled and stored.
    pub fn book_compiled(book_title: &str, location: &str) -> Self {
        Self {
            subject: "Book Compiled".to_string(),
            body: format!("The manuscript for '{book_title}' was compiled and stored at {location}."),
        }
    }
}

/// Deliver a notification, logging instead of failing when delivery breaks.
pub async fn send_best_effort(notifier: &dyn Notifier, notification: &Notification) {
    if let Err(e) = notifier
        .notify(&notification.subject, &notification.body)
        .await
    {
        warn!(subject = %notification.subject, error = %e, "Notification failed");
    }
}
