//! Shared test doubles for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use bookwright_core::{
    BookProject, BookUpdate, Chapter, ChapterRequest, ChapterUpdate, NewChapter, OutlineRequest,
    Stage,
};
use bookwright_error::{BookwrightResult, GenerationError, GenerationErrorKind, NotifyError};
use bookwright_interface::{BookRepository, ContentGenerator, Notifier};
use bookwright_pipeline::InMemoryBookRepository;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Generator returning deterministic text and recording every request.
#[derive(Default)]
pub struct ScriptedGenerator {
    outline: String,
    fail_on_chapter: Option<u32>,
    fail_books: HashSet<String>,
    pub chapter_requests: Mutex<Vec<ChapterRequest>>,
    pub outline_requests: Mutex<Vec<OutlineRequest>>,
    pub summarized: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self {
            outline: "1. Opening\n2. Closing".to_string(),
            ..Self::default()
        }
    }

    pub fn with_outline(mut self, outline: &str) -> Self {
        self.outline = outline.to_string();
        self
    }

    /// Fail every chapter request for this chapter number.
    pub fn failing_on_chapter(mut self, chapter_number: u32) -> Self {
        self.fail_on_chapter = Some(chapter_number);
        self
    }

    /// Fail every chapter request for this book title.
    pub fn failing_for_book(mut self, title: &str) -> Self {
        self.fail_books.insert(title.to_string());
        self
    }

    pub fn chapter_calls(&self) -> Vec<ChapterRequest> {
        self.chapter_requests.lock().expect("lock").clone()
    }

    pub fn outline_calls(&self) -> Vec<OutlineRequest> {
        self.outline_requests.lock().expect("lock").clone()
    }

    pub fn summary_calls(&self) -> usize {
        self.summarized.lock().expect("lock").len()
    }
}

pub fn draft_text(chapter_number: u32, notes: Option<&str>) -> String {
    match notes {
        Some(notes) => format!("Chapter {} rewritten ({})", chapter_number, notes),
        None => format!("Chapter {} first draft", chapter_number),
    }
}

pub fn summary_of(text: &str) -> String {
    format!("- {}", text)
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate_outline(&self, request: &OutlineRequest) -> BookwrightResult<String> {
        self.outline_requests
            .lock()
            .expect("lock")
            .push(request.clone());
        Ok(self.outline.clone())
    }

    async fn generate_chapter(&self, request: &ChapterRequest) -> BookwrightResult<String> {
        self.chapter_requests
            .lock()
            .expect("lock")
            .push(request.clone());

        if self.fail_on_chapter == Some(*request.chapter_number())
            || self.fail_books.contains(request.book_title())
        {
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: 500,
                message: "scripted failure".to_string(),
            })
            .into());
        }

        Ok(draft_text(*request.chapter_number(), request.notes().as_deref()))
    }

    async fn summarize_chapter(&self, chapter_text: &str) -> BookwrightResult<String> {
        self.summarized
            .lock()
            .expect("lock")
            .push(chapter_text.to_string());
        Ok(summary_of(chapter_text))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

// ---------------------------------------------------------------------------
// Notifiers
// ---------------------------------------------------------------------------

/// Notifier that keeps every message.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn subjects(&self) -> Vec<String> {
        self.sent
            .lock()
            .expect("lock")
            .iter()
            .map(|(subject, _)| subject.clone())
            .collect()
    }

    pub fn bodies(&self) -> Vec<String> {
        self.sent
            .lock()
            .expect("lock")
            .iter()
            .map(|(_, body)| body.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, subject: &str, body: &str) -> BookwrightResult<()> {
        self.sent
            .lock()
            .expect("lock")
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// Notifier whose delivery always fails.
#[derive(Default)]
pub struct FailingNotifier {
    pub attempts: Mutex<usize>,
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _subject: &str, _body: &str) -> BookwrightResult<()> {
        *self.attempts.lock().expect("lock") += 1;
        Err(NotifyError::new("smtp unreachable").into())
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// A repository call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    ListBooks,
    ListBooksByStage(Stage),
    UpdateBook(Uuid, BookUpdate),
    GetChapter(Uuid, u32),
    InsertChapter(Uuid, u32),
    UpdateChapter(Uuid, ChapterUpdate),
    ListChapters(Uuid),
}

impl Op {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Op::UpdateBook(..) | Op::InsertChapter(..) | Op::UpdateChapter(..)
        )
    }
}

/// In-memory repository that records every call.
///
/// `hide_chapter` makes `get_chapter` report a chapter as absent, to
/// exercise the missing-row path.
pub struct RecordingRepository {
    pub inner: InMemoryBookRepository,
    pub ops: Mutex<Vec<Op>>,
    hidden: Mutex<HashSet<u32>>,
}

impl RecordingRepository {
    pub fn new(books: Vec<BookProject>) -> Self {
        Self {
            inner: InMemoryBookRepository::with_books(books),
            ops: Mutex::new(Vec::new()),
            hidden: Mutex::new(HashSet::new()),
        }
    }

    pub fn hide_chapter(&self, chapter_number: u32) {
        self.hidden.lock().expect("lock").insert(chapter_number);
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().expect("lock").clone()
    }

    pub fn mutations(&self) -> Vec<Op> {
        self.ops().into_iter().filter(Op::is_mutation).collect()
    }

    pub fn clear_ops(&self) {
        self.ops.lock().expect("lock").clear();
    }

    pub async fn chapter(&self, book_id: Uuid, chapter_number: u32) -> Chapter {
        self.inner
            .get_chapter(book_id, chapter_number)
            .await
            .expect("in-memory read")
            .expect("chapter row exists")
    }

    pub async fn book(&self, book_id: Uuid) -> BookProject {
        self.inner.book(book_id).await.expect("book exists")
    }

    fn record(&self, op: Op) {
        self.ops.lock().expect("lock").push(op);
    }
}

#[async_trait]
impl BookRepository for RecordingRepository {
    async fn list_books(&self) -> BookwrightResult<Vec<BookProject>> {
        self.record(Op::ListBooks);
        self.inner.list_books().await
    }

    async fn list_books_by_stage(&self, stage: Stage) -> BookwrightResult<Vec<BookProject>> {
        self.record(Op::ListBooksByStage(stage));
        self.inner.list_books_by_stage(stage).await
    }

    async fn update_book(&self, book_id: Uuid, update: &BookUpdate) -> BookwrightResult<()> {
        self.record(Op::UpdateBook(book_id, update.clone()));
        self.inner.update_book(book_id, update).await
    }

    async fn get_chapter(
        &self,
        book_id: Uuid,
        chapter_number: u32,
    ) -> BookwrightResult<Option<Chapter>> {
        self.record(Op::GetChapter(book_id, chapter_number));
        if self.hidden.lock().expect("lock").contains(&chapter_number) {
            return Ok(None);
        }
        self.inner.get_chapter(book_id, chapter_number).await
    }

    async fn insert_chapter(&self, chapter: &NewChapter) -> BookwrightResult<Chapter> {
        self.record(Op::InsertChapter(chapter.book_id, chapter.chapter_number));
        self.inner.insert_chapter(chapter).await
    }

    async fn update_chapter(
        &self,
        chapter_id: Uuid,
        update: &ChapterUpdate,
    ) -> BookwrightResult<()> {
        self.record(Op::UpdateChapter(chapter_id, update.clone()));
        self.inner.update_chapter(chapter_id, update).await
    }

    async fn list_chapters_ordered(&self, book_id: Uuid) -> BookwrightResult<Vec<Chapter>> {
        self.record(Op::ListChapters(book_id));
        self.inner.list_chapters_ordered(book_id).await
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A book in the chapters stage with the given outline.
pub fn book_in_chapters(title: &str, outline: &str) -> BookProject {
    let mut book = BookProject::new(title);
    book.current_stage = "chapters".to_string();
    book.outline = Some(outline.to_string());
    book
}

/// A chapter row with explicit column values.
pub fn chapter_row(
    book_id: Uuid,
    chapter_number: u32,
    text: &str,
    status: &str,
    notes_status: &str,
    notes: &str,
) -> Chapter {
    Chapter {
        id: Uuid::new_v4(),
        book_id,
        chapter_number,
        chapter_title: format!("Title {}", chapter_number),
        chapter_text: text.to_string(),
        chapter_summary: if text.is_empty() {
            String::new()
        } else {
            summary_of(text)
        },
        chapter_status: status.to_string(),
        chapter_notes_status: notes_status.to_string(),
        chapter_notes: notes.to_string(),
    }
}

/// Collaborators wired as trait objects, with handles kept for assertions.
pub struct Harness {
    pub repository: Arc<RecordingRepository>,
    pub generator: Arc<ScriptedGenerator>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new(books: Vec<BookProject>) -> Self {
        Self::with_generator(books, ScriptedGenerator::new())
    }

    pub fn with_generator(books: Vec<BookProject>, generator: ScriptedGenerator) -> Self {
        Self {
            repository: Arc::new(RecordingRepository::new(books)),
            generator: Arc::new(generator),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    pub fn chapter_stage(&self) -> bookwright_pipeline::ChapterStage {
        bookwright_pipeline::ChapterStage::new(
            self.repository.clone(),
            self.generator.clone(),
            self.notifier.clone(),
        )
    }

    pub fn state_machine(&self) -> bookwright_pipeline::ChapterStateMachine {
        bookwright_pipeline::ChapterStateMachine::new(
            self.repository.clone(),
            self.generator.clone(),
            self.notifier.clone(),
        )
    }
}
