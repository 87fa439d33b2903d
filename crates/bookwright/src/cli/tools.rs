//! Maintenance command handlers.

use bookwright::{
    BookwrightResult, PipelineError, PipelineErrorKind, establish_connection, parse_outline,
    run_migrations,
};
use std::path::Path;
use tracing::instrument;

/// Print the chapters detected in an outline file.
#[instrument]
pub fn show_outline(path: &Path) -> BookwrightResult<()> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        PipelineError::new(PipelineErrorKind::OutlineRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    let chapters = parse_outline(&text);
    if chapters.is_empty() {
        println!("No chapters detected");
    }
    for chapter in &chapters {
        println!("{}", chapter);
    }

    Ok(())
}

/// Apply pending migrations to the database named by `DATABASE_URL`.
pub fn migrate() -> BookwrightResult<()> {
    let mut conn = establish_connection()?;
    let applied = run_migrations(&mut conn)?;

    if applied.is_empty() {
        println!("Database schema is up to date");
    }
    for version in &applied {
        println!("Applied migration {}", version);
    }

    Ok(())
}
