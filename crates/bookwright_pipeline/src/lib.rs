//! Stage drivers for the Bookwright book production pipeline.
//!
//! A run has three stages, each a pass over the stored books:
//!
//! - [`OutlineStage`] drafts an outline for books with editor notes.
//! - [`ChapterStage`] creates chapter rows from the outline and walks each
//!   book's chapters through the [`ChapterStateMachine`]: draft, wait for
//!   the editor, rewrite on notes, approve. It stops at the first chapter
//!   that needs the editor and moves fully approved books to the final stage.
//! - [`FinalStage`] compiles approved books into a [`Manuscript`] and
//!   stores it.
//!
//! [`Pipeline`] runs all three in order. Collaborators are injected as
//! trait objects, so the same drivers run against PostgreSQL and a hosted
//! model in production and against [`InMemoryBookRepository`] in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chapter_stage;
mod final_stage;
mod in_memory;
mod manuscript;
mod notification;
mod outline;
mod outline_stage;
mod report;
mod runner;
mod state_machine;

pub use chapter_stage::{BookOutcome, ChapterLoopEnd, ChapterStage};
pub use final_stage::{FinalOutcome, FinalStage};
pub use in_memory::InMemoryBookRepository;
pub use manuscript::{Manuscript, ManuscriptChapter};
pub use notification::{Notification, send_best_effort};
pub use outline::{OutlineChapter, parse_outline};
pub use outline_stage::{OutlineOutcome, OutlineStage};
pub use report::{BookReport, StageOutcome, StageReport};
pub use runner::{Pipeline, PipelineReport};
pub use state_machine::{
    ChapterAction, ChapterStateMachine, StepOutcome, decide, format_previous_summaries,
};
