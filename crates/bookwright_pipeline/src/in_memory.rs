//! In-process book repository for tests and dry runs.

use async_trait::async_trait;
use bookwright_core::{BookProject, BookUpdate, Chapter, ChapterUpdate, NewChapter, Stage};
use bookwright_error::{BookwrightResult, DatabaseError, DatabaseErrorKind};
use bookwright_interface::BookRepository;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Store {
    books: Vec<BookProject>,
    chapters: Vec<Chapter>,
}

/// [`BookRepository`] backed by vectors behind an async lock.
///
/// Matches the PostgreSQL repository's contract: stage filters compare the
/// stored literal exactly, `(book_id, chapter_number)` is unique, and
/// updates of unknown ids fail with `NotFound`.
///
/// # Examples
///
/// ```
/// use bookwright_core::{BookProject, Stage};
/// use bookwright_interface::BookRepository;
/// use bookwright_pipeline::InMemoryBookRepository;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let repo = InMemoryBookRepository::with_books(vec![BookProject::new("Tides")]);
/// let books = repo.list_books_by_stage(Stage::Outline).await?;
/// assert_eq!(books.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    store: RwLock<Store>,
}

impl InMemoryBookRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given books.
    pub fn with_books(books: Vec<BookProject>) -> Self {
        Self {
            store: RwLock::new(Store {
                books,
                chapters: Vec::new(),
            }),
        }
    }

    /// Add a book.
    pub async fn add_book(&self, book: BookProject) {
        self.store.write().await.books.push(book);
    }

    /// Add a chapter row as-is, bypassing the pending defaults.
    ///
    /// # Errors
    ///
    /// Fails if the book already has a row with the same number.
    pub async fn add_chapter(&self, chapter: Chapter) -> BookwrightResult<()> {
        let mut store = self.store.write().await;
        ensure_unique(&store, chapter.book_id, chapter.chapter_number)?;
        store.chapters.push(chapter);
        Ok(())
    }

    /// Current state of a book.
    pub async fn book(&self, book_id: Uuid) -> Option<BookProject> {
        self.store
            .read()
            .await
            .books
            .iter()
            .find(|b| b.id == book_id)
            .cloned()
    }
}

fn ensure_unique(store: &Store, book_id: Uuid, chapter_number: u32) -> Result<(), DatabaseError> {
    if store
        .chapters
        .iter()
        .any(|c| c.book_id == book_id && c.chapter_number == chapter_number)
    {
        return Err(DatabaseError::new(DatabaseErrorKind::Duplicate(format!(
            "chapter {} of book {}",
            chapter_number, book_id
        ))));
    }
    Ok(())
}

fn apply_book_update(book: &mut BookProject, update: &BookUpdate) {
    if let Some(outline) = &update.outline {
        book.outline = Some(outline.clone());
    }
    if let Some(status) = update.outline_status {
        book.outline_status = Some(status.as_ref().to_string());
    }
    if let Some(stage) = update.current_stage {
        book.current_stage = stage.as_ref().to_string();
    }
    if let Some(status) = update.book_output_status {
        book.book_output_status = Some(status.as_ref().to_string());
    }
}

fn apply_chapter_update(chapter: &mut Chapter, update: &ChapterUpdate) {
    if let Some(text) = &update.chapter_text {
        chapter.chapter_text = text.clone();
    }
    if let Some(summary) = &update.chapter_summary {
        chapter.chapter_summary = summary.clone();
    }
    if let Some(status) = &update.chapter_status {
        chapter.chapter_status = status.as_str().to_string();
    }
    if let Some(notes_status) = &update.chapter_notes_status {
        chapter.chapter_notes_status = notes_status.as_str().to_string();
    }
    if let Some(notes) = &update.chapter_notes {
        chapter.chapter_notes = notes.clone();
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list_books(&self) -> BookwrightResult<Vec<BookProject>> {
        Ok(self.store.read().await.books.clone())
    }

    async fn list_books_by_stage(&self, stage: Stage) -> BookwrightResult<Vec<BookProject>> {
        Ok(self
            .store
            .read()
            .await
            .books
            .iter()
            .filter(|b| b.current_stage == stage.as_ref())
            .cloned()
            .collect())
    }

    async fn update_book(&self, book_id: Uuid, update: &BookUpdate) -> BookwrightResult<()> {
        let mut store = self.store.write().await;
        let book = store
            .books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or_else(|| {
                DatabaseError::new(DatabaseErrorKind::NotFound(format!("book {}", book_id)))
            })?;
        apply_book_update(book, update);
        Ok(())
    }

    async fn get_chapter(
        &self,
        book_id: Uuid,
        chapter_number: u32,
    ) -> BookwrightResult<Option<Chapter>> {
        Ok(self
            .store
            .read()
            .await
            .chapters
            .iter()
            .find(|c| c.book_id == book_id && c.chapter_number == chapter_number)
            .cloned())
    }

    async fn insert_chapter(&self, chapter: &NewChapter) -> BookwrightResult<Chapter> {
        let mut store = self.store.write().await;
        ensure_unique(&store, chapter.book_id, chapter.chapter_number)?;

        let row = Chapter {
            id: Uuid::new_v4(),
            book_id: chapter.book_id,
            chapter_number: chapter.chapter_number,
            chapter_title: chapter.chapter_title.clone(),
            chapter_text: String::new(),
            chapter_summary: String::new(),
            chapter_status: chapter.chapter_status.as_str().to_string(),
            chapter_notes_status: String::new(),
            chapter_notes: String::new(),
        };
        store.chapters.push(row.clone());
        Ok(row)
    }

    async fn update_chapter(
        &self,
        chapter_id: Uuid,
        update: &ChapterUpdate,
    ) -> BookwrightResult<()> {
        let mut store = self.store.write().await;
        let chapter = store
            .chapters
            .iter_mut()
            .find(|c| c.id == chapter_id)
            .ok_or_else(|| {
                DatabaseError::new(DatabaseErrorKind::NotFound(format!("chapter {}", chapter_id)))
            })?;
        apply_chapter_update(chapter, update);
        Ok(())
    }

    async fn list_chapters_ordered(&self, book_id: Uuid) -> BookwrightResult<Vec<Chapter>> {
        let mut chapters: Vec<Chapter> = self
            .store
            .read()
            .await
            .chapters
            .iter()
            .filter(|c| c.book_id == book_id)
            .cloned()
            .collect();
        chapters.sort_by_key(|c| c.chapter_number);
        Ok(chapters)
    }
}
