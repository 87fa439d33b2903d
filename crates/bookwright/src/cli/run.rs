//! Pipeline and stage command handlers.

use bookwright::{
    BookwrightConfig, BookwrightResult, FileSystemStorage, GroqGenerator, Pipeline,
    PostgresBookRepository, StageOutcome, StageReport, establish_connection,
    notifier_from_settings,
};
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Which part of the pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageSelection {
    /// Outline, chapters and final compilation in order
    All,
    /// Outline stage only
    Outline,
    /// Chapter stage only
    Chapters,
    /// Final stage only
    Compile,
}

/// Wire production collaborators from configuration and the environment.
fn build_pipeline(config: &BookwrightConfig) -> BookwrightResult<Pipeline> {
    let repository = PostgresBookRepository::new(establish_connection()?);
    let generator = GroqGenerator::new(config.generator.clone())?;
    let notifier = notifier_from_settings(&config.notify)?;
    let storage = FileSystemStorage::new(config.output.dir.clone())?;

    info!(
        model = %config.generator.model,
        output = %config.output.dir.display(),
        "Pipeline ready"
    );

    Ok(Pipeline::new(
        Arc::new(repository),
        Arc::new(generator),
        notifier,
        Arc::new(storage),
    ))
}

/// Load configuration and run the selected stages once.
#[instrument(skip(config_path), fields(config = ?config_path))]
pub async fn run_stages(
    selection: StageSelection,
    config_path: Option<&Path>,
) -> BookwrightResult<()> {
    let config = BookwrightConfig::load(config_path)?;
    let pipeline = build_pipeline(&config)?;

    let checked = match selection {
        StageSelection::All => {
            let report = pipeline.run().await?;
            print_stage("outline", &report.outline);
            print_stage("chapters", &report.chapters);
            print_stage("compile", &report.compile);
            report.ensure_no_failures()
        }
        StageSelection::Outline => {
            let report = pipeline.outline_stage().run().await?;
            print_stage("outline", &report);
            report.ensure_no_failures()
        }
        StageSelection::Chapters => {
            let report = pipeline.chapter_stage().run().await?;
            print_stage("chapters", &report);
            report.ensure_no_failures()
        }
        StageSelection::Compile => {
            let report = pipeline.final_stage().run().await?;
            print_stage("compile", &report);
            report.ensure_no_failures()
        }
    };

    checked.inspect_err(|e| warn!(error = %e, "Some books failed; see the log above for details"))
}

fn print_stage<O: StageOutcome + Display>(stage: &str, report: &StageReport<O>) {
    if report.books.is_empty() {
        println!("{}: no books to process", stage);
        return;
    }

    for book in &report.books {
        println!("{}: {} ({}) {}", stage, book.title, book.book_id, book.outcome);
    }
}
