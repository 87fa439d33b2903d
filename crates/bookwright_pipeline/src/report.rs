//! Per-run reports shared by the stage drivers.

use bookwright_core::BookProject;
use bookwright_error::{BookwrightResult, PipelineError, PipelineErrorKind};
use uuid::Uuid;

/// A per-book stage result that can record a failure.
pub trait StageOutcome {
    /// Outcome for a book whose processing returned an error.
    fn failed(error: String) -> Self;

    /// Whether this outcome records a failure.
    fn is_failure(&self) -> bool;
}

/// Outcome for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReport<O> {
    /// Book identifier
    pub book_id: Uuid,
    /// Book title
    pub title: String,
    /// What happened
    pub outcome: O,
}

impl<O> BookReport<O> {
    /// Record an outcome for a book.
    pub fn new(book: &BookProject, outcome: O) -> Self {
        Self {
            book_id: book.id,
            title: book.title.clone(),
            outcome,
        }
    }
}

/// Outcomes of one stage run, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport<O> {
    /// Per-book outcomes
    pub books: Vec<BookReport<O>>,
}

impl<O> Default for StageReport<O> {
    fn default() -> Self {
        Self { books: Vec::new() }
    }
}

impl<O: StageOutcome> StageReport<O> {
    /// Number of books whose processing failed.
    pub fn failures(&self) -> usize {
        self.books.iter().filter(|b| b.outcome.is_failure()).count()
    }

    /// Fail with [`PipelineErrorKind::BooksFailed`] if any book failed.
    pub fn ensure_no_failures(&self) -> BookwrightResult<()> {
        failures_to_result(self.failures())
    }

    /// Outcome recorded for a book.
    pub fn outcome(&self, book_id: Uuid) -> Option<&O> {
        self.books
            .iter()
            .find(|b| b.book_id == book_id)
            .map(|b| &b.outcome)
    }
}

/// Turn a failure count into an error when it is non-zero.
pub(crate) fn failures_to_result(failures: usize) -> BookwrightResult<()> {
    if failures > 0 {
        return Err(PipelineError::new(PipelineErrorKind::BooksFailed(failures)).into());
    }
    Ok(())
}
