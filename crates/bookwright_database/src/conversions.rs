//! Conversions between domain records and Diesel rows.

use crate::{BookProjectChangeset, BookProjectRow, ChapterChangeset, ChapterRow, NewChapterRow};
use bookwright_core::{BookProject, BookUpdate, Chapter, ChapterUpdate, NewChapter, NotesStatus};
use bookwright_error::{DatabaseError, DatabaseErrorKind};
use chrono::Utc;

/// Convert a book row into the domain record.
pub fn row_to_book(row: BookProjectRow) -> BookProject {
    BookProject {
        id: row.id,
        title: row.title,
        notes_on_outline_before: row.notes_on_outline_before,
        notes_on_outline_after: row.notes_on_outline_after,
        outline: row.outline,
        outline_status: row.outline_status,
        current_stage: row.current_stage,
        book_output_status: row.book_output_status,
    }
}

/// Convert a partial book update into a changeset.
pub fn book_update_to_changeset(update: &BookUpdate) -> BookProjectChangeset {
    BookProjectChangeset {
        outline: update.outline.clone(),
        outline_status: update.outline_status.map(|s| s.as_ref().to_string()),
        current_stage: update.current_stage.map(|s| s.as_ref().to_string()),
        book_output_status: update.book_output_status.map(|s| s.as_ref().to_string()),
    }
}

/// Convert a chapter row into the domain record.
pub fn row_to_chapter(row: ChapterRow) -> Result<Chapter, DatabaseError> {
    let chapter_number = u32::try_from(row.chapter_number).map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::InvalidValue(format!(
            "chapter_number {} on chapter {}",
            row.chapter_number, row.id
        )))
    })?;

    Ok(Chapter {
        id: row.id,
        book_id: row.book_id,
        chapter_number,
        chapter_title: row.chapter_title,
        chapter_text: row.chapter_text.unwrap_or_default(),
        chapter_summary: row.chapter_summary.unwrap_or_default(),
        chapter_status: row.chapter_status.unwrap_or_default(),
        chapter_notes_status: row.chapter_notes_status.unwrap_or_default(),
        chapter_notes: row.chapter_notes.unwrap_or_default(),
    })
}

/// Convert a chapter number into its column value.
pub fn chapter_number_to_column(chapter_number: u32) -> Result<i32, DatabaseError> {
    i32::try_from(chapter_number).map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::InvalidValue(format!(
            "chapter_number {} exceeds column range",
            chapter_number
        )))
    })
}

/// Convert a new chapter into an insertable row with empty content fields.
pub fn new_chapter_to_row(chapter: &NewChapter) -> Result<NewChapterRow, DatabaseError> {
    Ok(NewChapterRow {
        book_id: chapter.book_id,
        chapter_number: chapter_number_to_column(chapter.chapter_number)?,
        chapter_title: chapter.chapter_title.clone(),
        chapter_text: String::new(),
        chapter_summary: String::new(),
        chapter_status: chapter.chapter_status.as_str().to_string(),
        chapter_notes_status: NotesStatus::Undecided.as_str().to_string(),
        chapter_notes: String::new(),
    })
}

/// Convert a partial chapter update into a changeset stamped with the current time.
pub fn chapter_update_to_changeset(update: &ChapterUpdate) -> ChapterChangeset {
    ChapterChangeset {
        chapter_text: update.chapter_text.clone(),
        chapter_summary: update.chapter_summary.clone(),
        chapter_status: update
            .chapter_status
            .as_ref()
            .map(|s| s.as_str().to_string()),
        chapter_notes_status: update
            .chapter_notes_status
            .as_ref()
            .map(|s| s.as_str().to_string()),
        chapter_notes: update.chapter_notes.clone(),
        updated_at: Utc::now(),
    }
}
