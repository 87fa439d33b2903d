//! Per-chapter review cycle.
//!
//! Each chapter moves through draft, editor review and optional rewrites
//! until the editor approves it. Decisions are driven entirely by the
//! persisted row, so a run can stop at any point and the next run picks up
//! where the editor left off.

use crate::notification::{Notification, send_best_effort};
use crate::OutlineChapter;
use bookwright_core::{
    BookProject, Chapter, ChapterRequest, ChapterState, ChapterStatus, ChapterUpdate, NotesStatus,
};
use bookwright_error::{BookwrightResult, PipelineError, PipelineErrorKind};
use bookwright_interface::{BookRepository, ContentGenerator, Notifier};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// What the review cycle does with a chapter in a given state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ChapterAction {
    /// Already approved; move on
    #[display("skip")]
    Skip,
    /// No text yet; draft it and wait for review
    #[display("generate")]
    Generate,
    /// Editor wants changes but wrote no notes; wait for them
    #[display("await notes")]
    AwaitNotes,
    /// Editor accepted the draft
    #[display("approve")]
    Approve,
    /// Rewrite the chapter following the editor's notes
    #[display("regenerate")]
    Regenerate {
        /// Trimmed editor notes
        notes: String,
    },
    /// No decision yet (or an explicit "no"); wait for the editor
    #[display("pause")]
    Pause,
    /// Decision literal outside the known vocabulary; leave the row alone
    #[display("ignore '{}'", notes_status)]
    Ignore {
        /// Normalized stored literal
        notes_status: String,
    },
}

/// Whether the driver moves on to the next chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StepOutcome {
    /// Proceed to the next chapter
    Continue,
    /// Stop processing this book for the run
    Halt,
}

/// Pick the action for a chapter. The first matching rule wins.
///
/// # Examples
///
/// ```
/// use bookwright_core::{ChapterState, ChapterStatus, NotesStatus};
/// use bookwright_pipeline::{ChapterAction, decide};
///
/// let state = ChapterState {
///     status: ChapterStatus::Generated,
///     notes_status: NotesStatus::NoNotesNeeded,
///     has_text: true,
///     notes: None,
/// };
/// assert_eq!(decide(&state), ChapterAction::Approve);
/// ```
pub fn decide(state: &ChapterState) -> ChapterAction {
    if state.is_approved() {
        return ChapterAction::Skip;
    }
    if !state.has_text {
        return ChapterAction::Generate;
    }
    match (&state.notes_status, &state.notes) {
        (NotesStatus::Yes, None) => ChapterAction::AwaitNotes,
        (NotesStatus::NoNotesNeeded, _) => ChapterAction::Approve,
        (NotesStatus::Yes, Some(notes)) => ChapterAction::Regenerate {
            notes: notes.clone(),
        },
        (NotesStatus::Undecided | NotesStatus::No, _) => ChapterAction::Pause,
        (NotesStatus::Unrecognized(raw), _) => ChapterAction::Ignore {
            notes_status: raw.clone(),
        },
    }
}

/// Render earlier chapters' summaries as generator context.
///
/// Only chapters numbered below `chapter_number` with a non-blank summary
/// are included, in ascending order, separated by a blank line.
///
/// # Examples
///
/// ```
/// use bookwright_core::Chapter;
/// use bookwright_pipeline::format_previous_summaries;
/// use uuid::Uuid;
///
/// let book_id = Uuid::new_v4();
/// let chapter = |n: u32, summary: &str| Chapter {
///     id: Uuid::new_v4(),
///     book_id,
///     chapter_number: n,
///     chapter_title: format!("Part {n}"),
///     chapter_text: "text".into(),
///     chapter_summary: summary.into(),
///     chapter_status: "approved".into(),
///     chapter_notes_status: String::new(),
///     chapter_notes: String::new(),
/// };
///
/// let rows = vec![chapter(1, "- one"), chapter(2, " "), chapter(3, "- three")];
/// assert_eq!(format_previous_summaries(&rows, 3), "Chapter 1 summary:\n- one");
/// ```
pub fn format_previous_summaries(chapters: &[Chapter], chapter_number: u32) -> String {
    let mut earlier: Vec<&Chapter> = chapters
        .iter()
        .filter(|c| c.chapter_number < chapter_number)
        .collect();
    earlier.sort_by_key(|c| c.chapter_number);

    earlier
        .into_iter()
        .filter_map(|c| {
            c.summary()
                .map(|summary| format!("Chapter {} summary:\n{}", c.chapter_number, summary))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Applies one review-cycle step to a chapter row.
pub struct ChapterStateMachine {
    repository: Arc<dyn BookRepository>,
    generator: Arc<dyn ContentGenerator>,
    notifier: Arc<dyn Notifier>,
}

impl ChapterStateMachine {
    /// Create a state machine over the given collaborators.
    pub fn new(
        repository: Arc<dyn BookRepository>,
        generator: Arc<dyn ContentGenerator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            generator,
            notifier,
        }
    }

    /// Act on one chapter and report whether the driver should continue.
    ///
    /// `outline` is the book's trimmed outline and `entry` the chapter as
    /// parsed from it; the generator sees the outline title, not the one
    /// stored on the row.
    ///
    /// # Errors
    ///
    /// Returns repository and generator failures unchanged. Notification
    /// failures are logged and never returned.
    #[instrument(
        skip_all,
        fields(book_id = %book.id, chapter = *entry.number())
    )]
    pub async fn step(
        &self,
        book: &BookProject,
        outline: &str,
        entry: &OutlineChapter,
        chapter: &Chapter,
    ) -> BookwrightResult<StepOutcome> {
        let action = decide(&chapter.state());
        debug!(%action, "Chapter action selected");

        match action {
            ChapterAction::Skip => {
                debug!("Chapter already approved, skipping");
                Ok(StepOutcome::Continue)
            }
            ChapterAction::Generate => {
                info!(title = %entry.title(), "Generating chapter");
                self.draft(book, outline, entry, chapter.id, None).await?;
                send_best_effort(
                    self.notifier.as_ref(),
                    &Notification::chapter_ready(&book.title, *entry.number()),
                )
                .await;
                info!("Chapter generated, waiting for review");
                Ok(StepOutcome::Halt)
            }
            ChapterAction::AwaitNotes => {
                self.repository
                    .update_chapter(chapter.id, &ChapterUpdate::status(ChapterStatus::WaitingNotes))
                    .await?;
                send_best_effort(
                    self.notifier.as_ref(),
                    &Notification::waiting_for_notes(&book.title, *entry.number()),
                )
                .await;
                info!("Waiting for editor notes");
                Ok(StepOutcome::Halt)
            }
            ChapterAction::Approve => {
                self.repository
                    .update_chapter(chapter.id, &ChapterUpdate::status(ChapterStatus::Approved))
                    .await?;
                info!("Chapter approved");
                Ok(StepOutcome::Continue)
            }
            ChapterAction::Regenerate { notes } => {
                info!("Regenerating chapter with editor notes");
                self.draft(book, outline, entry, chapter.id, Some(notes))
                    .await?;
                send_best_effort(
                    self.notifier.as_ref(),
                    &Notification::chapter_updated(&book.title, *entry.number()),
                )
                .await;
                info!("Chapter regenerated, waiting for review");
                Ok(StepOutcome::Halt)
            }
            ChapterAction::Pause => {
                let literal = match chapter.chapter_notes_status.trim() {
                    "" => "empty",
                    other => other,
                };
                info!(notes_status = literal, "Paused until the editor decides");
                Ok(StepOutcome::Halt)
            }
            ChapterAction::Ignore { notes_status } => {
                warn!(%notes_status, "Unrecognized chapter_notes_status, leaving chapter untouched");
                Ok(StepOutcome::Continue)
            }
        }
    }

    /// Generate, summarize and persist a draft.
    async fn draft(
        &self,
        book: &BookProject,
        outline: &str,
        entry: &OutlineChapter,
        chapter_id: Uuid,
        notes: Option<String>,
    ) -> BookwrightResult<()> {
        let chapters = self.repository.list_chapters_ordered(book.id).await?;
        let previous_summaries = format_previous_summaries(&chapters, *entry.number());

        let request = ChapterRequest::builder()
            .book_title(book.title.clone())
            .outline(outline)
            .chapter_number(*entry.number())
            .chapter_title(entry.title().clone())
            .previous_summaries(previous_summaries)
            .notes(notes)
            .build()
            .map_err(|e| PipelineError::new(PipelineErrorKind::RequestBuild(e.to_string())))?;

        let text = self.generator.generate_chapter(&request).await?;
        let summary = self.generator.summarize_chapter(&text).await?;

        self.repository
            .update_chapter(chapter_id, &ChapterUpdate::generated(text, summary))
            .await
    }
}
