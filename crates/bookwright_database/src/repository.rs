//! PostgreSQL implementation of BookRepository.

use crate::conversions::{
    book_update_to_changeset, chapter_number_to_column, chapter_update_to_changeset,
    new_chapter_to_row, row_to_book, row_to_chapter,
};
use crate::schema::{book_chapters, book_projects};
use crate::{BookProjectRow, ChapterRow};

use async_trait::async_trait;
use bookwright_core::{BookProject, BookUpdate, Chapter, ChapterUpdate, NewChapter, Stage};
use bookwright_error::{BookwrightResult, DatabaseError, DatabaseErrorKind};
use bookwright_interface::BookRepository;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// PostgreSQL implementation of [`BookRepository`] using Diesel ORM.
///
/// Books live in `book_projects` and chapters in `book_chapters`, with a
/// unique key on `(book_id, chapter_number)`.
///
/// # Example
/// ```no_run
/// use bookwright_database::{PostgresBookRepository, establish_connection};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let conn = establish_connection()?;
/// let repo = PostgresBookRepository::new(conn);
/// # Ok(())
/// # }
/// ```
pub struct PostgresBookRepository {
    /// Database connection wrapped in Arc<Mutex> for async access.
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresBookRepository {
    /// Create a new PostgreSQL book repository.
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Create a repository from a shared connection.
    pub fn from_arc(conn: Arc<Mutex<PgConnection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    #[tracing::instrument(skip(self))]
    async fn list_books(&self) -> BookwrightResult<Vec<BookProject>> {
        let mut conn = self.conn.lock().await;

        let rows: Vec<BookProjectRow> = book_projects::table
            .select(BookProjectRow::as_select())
            .load(&mut *conn)
            .map_err(DatabaseError::from)?;

        Ok(rows.into_iter().map(row_to_book).collect())
    }

    #[tracing::instrument(skip(self), fields(stage = %stage))]
    async fn list_books_by_stage(&self, stage: Stage) -> BookwrightResult<Vec<BookProject>> {
        let mut conn = self.conn.lock().await;

        let rows: Vec<BookProjectRow> = book_projects::table
            .filter(book_projects::current_stage.eq(stage.as_ref()))
            .select(BookProjectRow::as_select())
            .load(&mut *conn)
            .map_err(DatabaseError::from)?;

        tracing::debug!(count = rows.len(), "Loaded books");
        Ok(rows.into_iter().map(row_to_book).collect())
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_book(&self, book_id: Uuid, update: &BookUpdate) -> BookwrightResult<()> {
        if update.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.lock().await;

        let changed = diesel::update(book_projects::table.find(book_id))
            .set(&book_update_to_changeset(update))
            .execute(&mut *conn)
            .map_err(DatabaseError::from)?;

        if changed == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound(format!(
                "book {}",
                book_id
            )))
            .into());
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_chapter(
        &self,
        book_id: Uuid,
        chapter_number: u32,
    ) -> BookwrightResult<Option<Chapter>> {
        let number = chapter_number_to_column(chapter_number)?;
        let mut conn = self.conn.lock().await;

        let row: Option<ChapterRow> = book_chapters::table
            .filter(book_chapters::book_id.eq(book_id))
            .filter(book_chapters::chapter_number.eq(number))
            .select(ChapterRow::as_select())
            .first(&mut *conn)
            .optional()
            .map_err(DatabaseError::from)?;

        Ok(row.map(row_to_chapter).transpose()?)
    }

    #[tracing::instrument(skip(self, chapter), fields(book_id = %chapter.book_id, chapter_number = chapter.chapter_number))]
    async fn insert_chapter(&self, chapter: &NewChapter) -> BookwrightResult<Chapter> {
        let new_row = new_chapter_to_row(chapter)?;
        let mut conn = self.conn.lock().await;

        let row: ChapterRow = diesel::insert_into(book_chapters::table)
            .values(&new_row)
            .returning(ChapterRow::as_returning())
            .get_result(&mut *conn)
            .map_err(DatabaseError::from)?;

        Ok(row_to_chapter(row)?)
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_chapter(
        &self,
        chapter_id: Uuid,
        update: &ChapterUpdate,
    ) -> BookwrightResult<()> {
        if update.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.lock().await;

        let changed = diesel::update(book_chapters::table.find(chapter_id))
            .set(&chapter_update_to_changeset(update))
            .execute(&mut *conn)
            .map_err(DatabaseError::from)?;

        if changed == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound(format!(
                "chapter {}",
                chapter_id
            )))
            .into());
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_chapters_ordered(&self, book_id: Uuid) -> BookwrightResult<Vec<Chapter>> {
        let mut conn = self.conn.lock().await;

        let rows: Vec<ChapterRow> = book_chapters::table
            .filter(book_chapters::book_id.eq(book_id))
            .order(book_chapters::chapter_number.asc())
            .select(ChapterRow::as_select())
            .load(&mut *conn)
            .map_err(DatabaseError::from)?;

        let chapters = rows
            .into_iter()
            .map(row_to_chapter)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(chapters)
    }
}
