//! Trait definitions for the pipeline's external collaborators.

use async_trait::async_trait;
use bookwright_core::{
    BookProject, BookUpdate, Chapter, ChapterRequest, ChapterUpdate, NewChapter, OutlineRequest,
    Stage,
};
use bookwright_error::BookwrightResult;
use uuid::Uuid;

/// Read/write access to persisted book and chapter records.
///
/// Implementations must provide read-your-writes consistency: a chapter
/// inserted or updated through the repository is visible to the next read
/// in the same run.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List every book, in store order.
    async fn list_books(&self) -> BookwrightResult<Vec<BookProject>>;

    /// List books whose stored stage equals `stage`, in store order.
    async fn list_books_by_stage(&self, stage: Stage) -> BookwrightResult<Vec<BookProject>>;

    /// Apply a partial update to a book.
    async fn update_book(&self, book_id: Uuid, update: &BookUpdate) -> BookwrightResult<()>;

    /// Fetch one chapter by its position in a book.
    async fn get_chapter(
        &self,
        book_id: Uuid,
        chapter_number: u32,
    ) -> BookwrightResult<Option<Chapter>>;

    /// Insert a chapter row.
    async fn insert_chapter(&self, chapter: &NewChapter) -> BookwrightResult<Chapter>;

    /// Apply a partial update to a chapter.
    async fn update_chapter(
        &self,
        chapter_id: Uuid,
        update: &ChapterUpdate,
    ) -> BookwrightResult<()>;

    /// List all chapters of a book in ascending chapter number.
    async fn list_chapters_ordered(&self, book_id: Uuid) -> BookwrightResult<Vec<Chapter>>;
}

/// Produces outline and chapter text.
///
/// Calls are all-or-nothing: they either return usable text or an error,
/// never partial content. Retries and timeouts are the implementation's
/// concern.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Draft a book outline.
    async fn generate_outline(&self, request: &OutlineRequest) -> BookwrightResult<String>;

    /// Draft (or redraft, when the request carries notes) one chapter.
    async fn generate_chapter(&self, request: &ChapterRequest) -> BookwrightResult<String>;

    /// Summarize a chapter for use as context by later chapters.
    async fn summarize_chapter(&self, chapter_text: &str) -> BookwrightResult<String>;

    /// Provider name (e.g., "groq").
    fn provider_name(&self) -> &'static str;
}

/// Delivers review notifications to editors.
///
/// Delivery is best-effort: callers log a failed notification and carry on.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a notification.
    async fn notify(&self, subject: &str, body: &str) -> BookwrightResult<()>;
}
