//! Chapter records and the compound review state derived from them.

use crate::{ChapterStatus, NotesStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted chapter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Row identifier
    pub id: Uuid,
    /// Owning book
    pub book_id: Uuid,
    /// Position in the book, unique per book
    pub chapter_number: u32,
    /// Title as first parsed from the outline
    pub chapter_title: String,
    /// Generated chapter body
    pub chapter_text: String,
    /// Generated summary, fed to later chapters as context
    pub chapter_summary: String,
    /// Stored chapter status literal
    pub chapter_status: String,
    /// Stored editor decision literal
    pub chapter_notes_status: String,
    /// Editor notes for a rewrite
    pub chapter_notes: String,
}

impl Chapter {
    /// Decode the row into the state the review cycle decides on.
    pub fn state(&self) -> ChapterState {
        ChapterState {
            status: ChapterStatus::parse(&self.chapter_status),
            notes_status: NotesStatus::parse(&self.chapter_notes_status),
            has_text: !self.chapter_text.trim().is_empty(),
            notes: non_empty(&self.chapter_notes),
        }
    }

    /// Trimmed summary, if one has been generated.
    pub fn summary(&self) -> Option<&str> {
        let summary = self.chapter_summary.trim();
        (!summary.is_empty()).then_some(summary)
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Decoded chapter status, editor decision and content presence.
///
/// # Examples
///
/// ```
/// use bookwright_core::{ChapterState, ChapterStatus, NotesStatus};
///
/// let state = ChapterState {
///     status: ChapterStatus::Generated,
///     notes_status: NotesStatus::Yes,
///     has_text: true,
///     notes: None,
/// };
/// assert!(!state.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterState {
    /// Lifecycle status
    pub status: ChapterStatus,
    /// Editor decision
    pub notes_status: NotesStatus,
    /// Whether chapter text exists
    pub has_text: bool,
    /// Trimmed editor notes, if any
    pub notes: Option<String>,
}

impl ChapterState {
    /// Whether the chapter has reached its terminal state.
    pub fn is_approved(&self) -> bool {
        self.status == ChapterStatus::Approved
    }
}

/// Insertable chapter with the defaults of a freshly detected outline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChapter {
    /// Owning book
    pub book_id: Uuid,
    /// Position in the book
    pub chapter_number: u32,
    /// Title from the outline
    pub chapter_title: String,
    /// Initial status
    pub chapter_status: ChapterStatus,
}

impl NewChapter {
    /// A pending chapter with empty text, summary and notes.
    pub fn pending(book_id: Uuid, chapter_number: u32, chapter_title: impl Into<String>) -> Self {
        Self {
            book_id,
            chapter_number,
            chapter_title: chapter_title.into(),
            chapter_status: ChapterStatus::Pending,
        }
    }
}

/// Partial update for a chapter row. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterUpdate {
    /// New chapter body
    pub chapter_text: Option<String>,
    /// New summary
    pub chapter_summary: Option<String>,
    /// New status
    pub chapter_status: Option<ChapterStatus>,
    /// New editor decision
    pub chapter_notes_status: Option<NotesStatus>,
    /// New editor notes
    pub chapter_notes: Option<String>,
}

impl ChapterUpdate {
    /// Store freshly generated content and reset the editor decision, so the
    /// editor has to review the new text before anything else happens.
    pub fn generated(text: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            chapter_text: Some(text.into()),
            chapter_summary: Some(summary.into()),
            chapter_status: Some(ChapterStatus::Generated),
            chapter_notes_status: Some(NotesStatus::Undecided),
            chapter_notes: Some(String::new()),
        }
    }

    /// Change only the chapter status.
    pub fn status(status: ChapterStatus) -> Self {
        Self {
            chapter_status: Some(status),
            ..Self::default()
        }
    }

    /// Whether the update touches no field.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
