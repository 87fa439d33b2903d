//! Final stage: compile approved books into stored manuscripts.

use crate::notification::{Notification, send_best_effort};
use crate::{BookReport, Manuscript, StageOutcome, StageReport};
use bookwright_core::{BookProject, BookUpdate, OutputStatus, Stage};
use bookwright_error::BookwrightResult;
use bookwright_interface::{BookRepository, Notifier};
use bookwright_storage::{ManuscriptMetadata, ManuscriptStorage};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Result of compiling one book.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FinalOutcome {
    /// The book has no chapter rows
    #[display("skipped: no chapters found")]
    SkippedNoChapters,
    /// The manuscript was stored and the book completed
    #[display("compiled to {} ({} bytes)", location, size_bytes)]
    Compiled {
        /// Where the manuscript was stored
        location: String,
        /// Manuscript size
        size_bytes: u64,
    },
    /// A collaborator failed
    #[display("failed: {}", error)]
    Failed {
        /// Rendered error
        error: String,
    },
}

impl StageOutcome for FinalOutcome {
    fn failed(error: String) -> Self {
        Self::Failed { error }
    }

    fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Compiles books that are in the final stage and ready for output.
pub struct FinalStage {
    repository: Arc<dyn BookRepository>,
    storage: Arc<dyn ManuscriptStorage>,
    notifier: Arc<dyn Notifier>,
}

impl FinalStage {
    /// Create the stage over the given collaborators.
    pub fn new(
        repository: Arc<dyn BookRepository>,
        storage: Arc<dyn ManuscriptStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            storage,
            notifier,
        }
    }

    /// Compile every book with stage `final` and output status `ready`.
    ///
    /// # Errors
    ///
    /// Fails only if the book list cannot be loaded; per-book failures are
    /// recorded in the report.
    #[instrument(skip(self))]
    pub async fn run(&self) -> BookwrightResult<StageReport<FinalOutcome>> {
        let books: Vec<BookProject> = self
            .repository
            .list_books_by_stage(Stage::Final)
            .await?
            .into_iter()
            .filter(|b| b.output_status() == Some(OutputStatus::Ready))
            .collect();
        info!(count = books.len(), "Running final stage");

        let mut report = StageReport::default();
        for book in books {
            let outcome = match self.compile_book(&book).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(book_id = %book.id, title = %book.title, error = %e, "Compilation failed");
                    FinalOutcome::failed(e.to_string())
                }
            };
            report.books.push(BookReport::new(&book, outcome));
        }
        Ok(report)
    }

    /// Assemble, store and complete one book.
    ///
    /// # Errors
    ///
    /// Returns repository and storage failures.
    #[instrument(skip_all, fields(book_id = %book.id, title = %book.title))]
    pub async fn compile_book(&self, book: &BookProject) -> BookwrightResult<FinalOutcome> {
        let chapters = self.repository.list_chapters_ordered(book.id).await?;
        if chapters.is_empty() {
            warn!("No chapters found, skipping");
            return Ok(FinalOutcome::SkippedNoChapters);
        }

        let manuscript = Manuscript::assemble(book, &chapters);
        let metadata = ManuscriptMetadata::markdown(manuscript.file_name());
        let reference = self
            .storage
            .store(manuscript.to_markdown().as_bytes(), &metadata)
            .await?;

        self.repository
            .update_book(book.id, &BookUpdate::compiled())
            .await?;

        send_best_effort(
            self.notifier.as_ref(),
            &Notification::book_compiled(&book.title, &reference.storage_path),
        )
        .await;
        info!(
            path = %reference.storage_path,
            backend = self.storage.backend_name(),
            "Manuscript compiled and stored"
        );

        Ok(FinalOutcome::Compiled {
            location: reference.storage_path,
            size_bytes: reference.size_bytes,
        })
    }
}
