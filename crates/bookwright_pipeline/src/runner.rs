//! Full run: outline, chapters, then final compilation.

use crate::{
    BookOutcome, ChapterStage, FinalOutcome, FinalStage, OutlineOutcome, OutlineStage,
    StageReport,
};
use bookwright_error::BookwrightResult;
use bookwright_interface::{BookRepository, ContentGenerator, Notifier};
use bookwright_storage::ManuscriptStorage;
use std::sync::Arc;
use tracing::{info, instrument};

/// Reports from each stage of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Outline stage
    pub outline: StageReport<OutlineOutcome>,
    /// Chapter stage
    pub chapters: StageReport<BookOutcome>,
    /// Final stage
    pub compile: StageReport<FinalOutcome>,
}

impl PipelineReport {
    /// Books that failed in any stage.
    pub fn failures(&self) -> usize {
        self.outline.failures() + self.chapters.failures() + self.compile.failures()
    }

    /// Fail with [`PipelineErrorKind::BooksFailed`](bookwright_error::PipelineErrorKind::BooksFailed)
    /// if any stage recorded a failed book.
    pub fn ensure_no_failures(&self) -> BookwrightResult<()> {
        crate::report::failures_to_result(self.failures())
    }
}

/// Runs the three stages in order over shared collaborators.
pub struct Pipeline {
    outline: OutlineStage,
    chapters: ChapterStage,
    compile: FinalStage,
}

impl Pipeline {
    /// Wire every stage to the same collaborators.
    pub fn new(
        repository: Arc<dyn BookRepository>,
        generator: Arc<dyn ContentGenerator>,
        notifier: Arc<dyn Notifier>,
        storage: Arc<dyn ManuscriptStorage>,
    ) -> Self {
        Self {
            outline: OutlineStage::new(repository.clone(), generator.clone()),
            chapters: ChapterStage::new(repository.clone(), generator, notifier.clone()),
            compile: FinalStage::new(repository, storage, notifier),
        }
    }

    /// Outline stage.
    pub fn outline_stage(&self) -> &OutlineStage {
        &self.outline
    }

    /// Chapter stage.
    pub fn chapter_stage(&self) -> &ChapterStage {
        &self.chapters
    }

    /// Final stage.
    pub fn final_stage(&self) -> &FinalStage {
        &self.compile
    }

    /// Run outline generation, chapter review and compilation once.
    ///
    /// A book promoted by the chapter stage is compiled in the same run.
    ///
    /// # Errors
    ///
    /// Fails if a stage cannot list its books.
    #[instrument(skip(self))]
    pub async fn run(&self) -> BookwrightResult<PipelineReport> {
        let outline = self.outline.run().await?;
        let chapters = self.chapters.run().await?;
        let compile = self.compile.run().await?;

        let report = PipelineReport {
            outline,
            chapters,
            compile,
        };
        info!(failures = report.failures(), "Pipeline run finished");
        Ok(report)
    }
}
