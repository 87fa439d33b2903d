//! Outline stage: draft outlines for books that have editor notes.

use crate::{BookReport, StageOutcome, StageReport};
use bookwright_core::{BookProject, BookUpdate, OutlineRequest};
use bookwright_error::{BookwrightResult, PipelineError, PipelineErrorKind};
use bookwright_interface::{BookRepository, ContentGenerator};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Result of the outline stage for one book.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum OutlineOutcome {
    /// No notes to work from yet
    #[display("skipped: no notes before outline")]
    SkippedNoNotes,
    /// An outline is already stored
    #[display("skipped: outline exists")]
    SkippedOutlineExists,
    /// A new outline was stored, awaiting review
    #[display("outline generated ({} chars)", chars)]
    Generated {
        /// Outline length
        chars: usize,
    },
    /// A collaborator failed
    #[display("failed: {}", error)]
    Failed {
        /// Rendered error
        error: String,
    },
}

impl StageOutcome for OutlineOutcome {
    fn failed(error: String) -> Self {
        Self::Failed { error }
    }

    fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Drafts an outline for every book with notes but no outline.
///
/// The book stays in the outline stage; moving it to chapters is the
/// editor's call.
pub struct OutlineStage {
    repository: Arc<dyn BookRepository>,
    generator: Arc<dyn ContentGenerator>,
}

impl OutlineStage {
    /// Create the stage over the given collaborators.
    pub fn new(repository: Arc<dyn BookRepository>, generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Visit every book.
    ///
    /// # Errors
    ///
    /// Fails only if the book list cannot be loaded.
    #[instrument(skip(self))]
    pub async fn run(&self) -> BookwrightResult<StageReport<OutlineOutcome>> {
        let books = self.repository.list_books().await?;
        info!(count = books.len(), "Running outline generation");

        let mut report = StageReport::default();
        for book in books {
            let outcome = match self.process_book(&book).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(book_id = %book.id, title = %book.title, error = %e, "Outline generation failed");
                    OutlineOutcome::failed(e.to_string())
                }
            };
            report.books.push(BookReport::new(&book, outcome));
        }
        Ok(report)
    }

    /// Draft and store an outline for one book when it needs one.
    ///
    /// # Errors
    ///
    /// Returns generator and repository failures.
    #[instrument(skip_all, fields(book_id = %book.id, title = %book.title))]
    pub async fn process_book(&self, book: &BookProject) -> BookwrightResult<OutlineOutcome> {
        let notes_before = trimmed(book.notes_on_outline_before.as_deref());
        if notes_before.is_empty() {
            debug!("No notes before outline");
            return Ok(OutlineOutcome::SkippedNoNotes);
        }
        if !book.outline_text().is_empty() {
            info!("Skipping: outline exists");
            return Ok(OutlineOutcome::SkippedOutlineExists);
        }

        let notes_after = trimmed(book.notes_on_outline_after.as_deref());
        let request = OutlineRequest::builder()
            .title(book.title.clone())
            .notes_before(notes_before)
            .notes_after((!notes_after.is_empty()).then(|| notes_after.to_string()))
            .build()
            .map_err(|e| PipelineError::new(PipelineErrorKind::RequestBuild(e.to_string())))?;

        info!("Generating outline");
        let outline = self.generator.generate_outline(&request).await?;
        let chars = outline.len();

        self.repository
            .update_book(book.id, &BookUpdate::outline_generated(outline))
            .await?;
        info!(chars, "Outline generated and saved, awaiting review");

        Ok(OutlineOutcome::Generated { chars })
    }
}

fn trimmed(value: Option<&str>) -> &str {
    value.unwrap_or_default().trim()
}
