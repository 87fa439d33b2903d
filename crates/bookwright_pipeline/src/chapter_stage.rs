//! Chapter stage driver.

use crate::notification::{Notification, send_best_effort};
use crate::{
    BookReport, ChapterStateMachine, OutlineChapter, StageOutcome, StageReport, StepOutcome,
    parse_outline,
};
use bookwright_core::{BookProject, BookUpdate, NewChapter, Stage};
use bookwright_error::{BookwrightResult, PipelineError, PipelineErrorKind};
use bookwright_interface::{BookRepository, ContentGenerator, Notifier};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// How the per-chapter loop of one book ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ChapterLoopEnd {
    /// Every chapter was visited without a halt
    #[display("all chapters visited")]
    Completed,
    /// A chapter needs editor attention
    #[display("halted at chapter {}", chapter)]
    Halted {
        /// Chapter that halted the loop
        chapter: u32,
    },
    /// An outline chapter had no row
    #[display("chapter {} row missing", chapter)]
    MissingRow {
        /// Chapter whose row was absent
        chapter: u32,
    },
}

/// Result of running the chapter stage on one book.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BookOutcome {
    /// The book has no outline text
    #[display("skipped: missing outline")]
    SkippedMissingOutline,
    /// The outline has no recognizable chapter lines
    #[display("skipped: no chapters detected in outline")]
    SkippedNoChapters,
    /// The book went through the review loop
    #[display(
        "{} chapters, {} rows created, {}{}",
        chapters,
        inserted,
        loop_end,
        if *promoted { ", moved to final" } else { "" }
    )]
    Processed {
        /// Chapters detected in the outline
        chapters: usize,
        /// Rows created this run
        inserted: usize,
        /// How the loop ended
        loop_end: ChapterLoopEnd,
        /// Whether the book moved to the final stage
        promoted: bool,
    },
    /// A collaborator failed; state is as last persisted
    #[display("failed: {}", error)]
    Failed {
        /// Rendered error
        error: String,
    },
}

impl StageOutcome for BookOutcome {
    fn failed(error: String) -> Self {
        Self::Failed { error }
    }

    fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Drafts and reviews chapters for every book in the chapters stage.
///
/// Per book: make sure every outline chapter has a row, walk the chapters
/// in order until one needs the editor, then move the book to the final
/// stage once every row is approved.
pub struct ChapterStage {
    repository: Arc<dyn BookRepository>,
    notifier: Arc<dyn Notifier>,
    machine: ChapterStateMachine,
}

impl ChapterStage {
    /// Create the stage over the given collaborators.
    pub fn new(
        repository: Arc<dyn BookRepository>,
        generator: Arc<dyn ContentGenerator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let machine =
            ChapterStateMachine::new(repository.clone(), generator, notifier.clone());
        Self {
            repository,
            notifier,
            machine,
        }
    }

    /// Process every book whose stage is `chapters`.
    ///
    /// A failure in one book is logged and recorded as
    /// [`BookOutcome::Failed`]; the remaining books are still processed.
    ///
    /// # Errors
    ///
    /// Fails only if the book list cannot be loaded.
    #[instrument(skip(self))]
    pub async fn run(&self) -> BookwrightResult<StageReport<BookOutcome>> {
        let books = self.repository.list_books_by_stage(Stage::Chapters).await?;
        info!(count = books.len(), "Running chapter stage");

        let mut report = StageReport::default();
        for book in books {
            let outcome = match self.process_book(&book).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(book_id = %book.id, title = %book.title, error = %e, "Chapter stage failed for book");
                    BookOutcome::failed(e.to_string())
                }
            };
            report.books.push(BookReport::new(&book, outcome));
        }

        Ok(report)
    }

    /// Run the chapter stage on one book.
    ///
    /// # Errors
    ///
    /// Returns the first repository or generator failure. Rows and updates
    /// persisted before the failure are kept.
    #[instrument(skip_all, fields(book_id = %book.id, title = %book.title))]
    pub async fn process_book(&self, book: &BookProject) -> BookwrightResult<BookOutcome> {
        let outline = book.outline_text();
        if outline.is_empty() {
            warn!("Skipping book: missing outline");
            return Ok(BookOutcome::SkippedMissingOutline);
        }

        let chapters = parse_outline(outline);
        info!(
            detected = ?chapters.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "Chapters detected from outline"
        );
        if chapters.is_empty() {
            warn!("No chapters detected; outline needs lines like '1. Title' or 'Chapter 1: Title'");
            return Ok(BookOutcome::SkippedNoChapters);
        }

        let inserted = self.ensure_rows(book, &chapters).await?;
        let loop_end = self.review(book, outline, &chapters).await?;
        let promoted = self.roll_up(book).await?;

        Ok(BookOutcome::Processed {
            chapters: chapters.len(),
            inserted,
            loop_end,
            promoted,
        })
    }

    /// Create a pending row for each outline chapter that has none.
    async fn ensure_rows(
        &self,
        book: &BookProject,
        chapters: &[OutlineChapter],
    ) -> BookwrightResult<usize> {
        let mut inserted = 0;
        for entry in chapters {
            if self
                .repository
                .get_chapter(book.id, *entry.number())
                .await?
                .is_none()
            {
                self.repository
                    .insert_chapter(&NewChapter::pending(
                        book.id,
                        *entry.number(),
                        entry.title().clone(),
                    ))
                    .await?;
                info!(chapter = *entry.number(), "Inserted chapter row");
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Step through chapters in order until one halts the book.
    async fn review(
        &self,
        book: &BookProject,
        outline: &str,
        chapters: &[OutlineChapter],
    ) -> BookwrightResult<ChapterLoopEnd> {
        for entry in chapters {
            let chapter_number = *entry.number();
            let Some(row) = self.repository.get_chapter(book.id, chapter_number).await? else {
                let missing = PipelineError::new(PipelineErrorKind::MissingChapterRow(chapter_number));
                error!(error = %missing, "Stopping chapter loop");
                return Ok(ChapterLoopEnd::MissingRow {
                    chapter: chapter_number,
                });
            };

            match self.machine.step(book, outline, entry, &row).await? {
                StepOutcome::Continue => continue,
                StepOutcome::Halt => {
                    return Ok(ChapterLoopEnd::Halted {
                        chapter: chapter_number,
                    });
                }
            }
        }
        Ok(ChapterLoopEnd::Completed)
    }

    /// Move the book to the final stage once every stored chapter is approved.
    async fn roll_up(&self, book: &BookProject) -> BookwrightResult<bool> {
        let rows = self.repository.list_chapters_ordered(book.id).await?;
        if rows.is_empty() || !rows.iter().all(|c| c.state().is_approved()) {
            return Ok(false);
        }

        self.repository
            .update_book(book.id, &BookUpdate::ready_for_final())
            .await?;
        send_best_effort(
            self.notifier.as_ref(),
            &Notification::all_approved(&book.title),
        )
        .await;
        info!("All chapters approved, book moved to final stage");
        Ok(true)
    }
}
