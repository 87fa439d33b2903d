//! Diesel models for book and chapter rows.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Database row for the book_projects table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::book_projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookProjectRow {
    pub id: Uuid,
    pub title: String,
    pub notes_on_outline_before: Option<String>,
    pub notes_on_outline_after: Option<String>,
    pub outline: Option<String>,
    pub outline_status: Option<String>,
    pub current_stage: String,
    pub book_output_status: Option<String>,
}

/// Changeset for book_projects. `None` columns are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::schema::book_projects)]
pub struct BookProjectChangeset {
    pub outline: Option<String>,
    pub outline_status: Option<String>,
    pub current_stage: Option<String>,
    pub book_output_status: Option<String>,
}

/// Database row for the book_chapters table.
///
/// Text columns are nullable because editors may clear them by hand;
/// a NULL is read as an empty string.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Associations)]
#[diesel(belongs_to(BookProjectRow, foreign_key = book_id))]
#[diesel(table_name = crate::schema::book_chapters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChapterRow {
    pub id: Uuid,
    pub book_id: Uuid,
    pub chapter_number: i32,
    pub chapter_title: String,
    pub chapter_text: Option<String>,
    pub chapter_summary: Option<String>,
    pub chapter_status: Option<String>,
    pub chapter_notes_status: Option<String>,
    pub chapter_notes: Option<String>,
}

/// Insertable struct for book_chapters.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::book_chapters)]
pub struct NewChapterRow {
    pub book_id: Uuid,
    pub chapter_number: i32,
    pub chapter_title: String,
    pub chapter_text: String,
    pub chapter_summary: String,
    pub chapter_status: String,
    pub chapter_notes_status: String,
    pub chapter_notes: String,
}

/// Changeset for book_chapters. `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::book_chapters)]
pub struct ChapterChangeset {
    pub chapter_text: Option<String>,
    pub chapter_summary: Option<String>,
    pub chapter_status: Option<String>,
    pub chapter_notes_status: Option<String>,
    pub chapter_notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}
