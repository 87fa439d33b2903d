//! Book project records.

use crate::{OutlineStatus, OutputStatus, Stage, normalize};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A book moving through the outline, chapters and final stages.
///
/// Status columns are kept as the raw stored strings; use [`BookProject::stage`]
/// and [`BookProject::output_status`] for the decoded view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookProject {
    /// Row identifier
    pub id: Uuid,
    /// Book title
    pub title: String,
    /// Editor notes written before the outline is generated
    pub notes_on_outline_before: Option<String>,
    /// Editor notes written after reviewing an outline
    pub notes_on_outline_after: Option<String>,
    /// Outline text, empty until generated
    pub outline: Option<String>,
    /// Outline review state
    pub outline_status: Option<String>,
    /// Stored stage literal
    pub current_stage: String,
    /// Stored output status literal
    pub book_output_status: Option<String>,
}

impl BookProject {
    /// Create a book in the outline stage with no outline yet.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            notes_on_outline_before: None,
            notes_on_outline_after: None,
            outline: None,
            outline_status: None,
            current_stage: Stage::Outline.as_ref().to_string(),
            book_output_status: None,
        }
    }

    /// Decoded stage, or `None` when the stored literal is unknown.
    pub fn stage(&self) -> Option<Stage> {
        normalize(&self.current_stage).parse().ok()
    }

    /// Decoded output status, or `None` when empty or unknown.
    pub fn output_status(&self) -> Option<OutputStatus> {
        self.book_output_status
            .as_deref()
            .and_then(|raw| normalize(raw).parse().ok())
    }

    /// Trimmed outline text; empty when no outline exists.
    pub fn outline_text(&self) -> &str {
        self.outline.as_deref().unwrap_or_default().trim()
    }
}

/// Partial update for a book row. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    /// New outline text
    pub outline: Option<String>,
    /// New outline review state
    pub outline_status: Option<OutlineStatus>,
    /// New stage
    pub current_stage: Option<Stage>,
    /// New output status
    pub book_output_status: Option<OutputStatus>,
}

impl BookUpdate {
    /// Store a freshly generated outline and hold the book in the outline stage.
    pub fn outline_generated(outline: impl Into<String>) -> Self {
        Self {
            outline: Some(outline.into()),
            outline_status: Some(OutlineStatus::Generated),
            current_stage: Some(Stage::Outline),
            book_output_status: None,
        }
    }

    /// Promote the book to the final stage, ready for compilation.
    pub fn ready_for_final() -> Self {
        Self {
            current_stage: Some(Stage::Final),
            book_output_status: Some(OutputStatus::Ready),
            ..Self::default()
        }
    }

    /// Mark the manuscript compiled and the book completed.
    pub fn compiled() -> Self {
        Self {
            current_stage: Some(Stage::Completed),
            book_output_status: Some(OutputStatus::Compiled),
            ..Self::default()
        }
    }

    /// Whether the update touches no field.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
