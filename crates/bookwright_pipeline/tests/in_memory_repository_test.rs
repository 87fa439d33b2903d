use bookwright_core::{
    BookProject, BookUpdate, ChapterStatus, ChapterUpdate, NewChapter, NotesStatus, Stage,
};
use bookwright_error::{BookwrightErrorKind, DatabaseErrorKind};
use bookwright_interface::BookRepository;
use bookwright_pipeline::InMemoryBookRepository;
use uuid::Uuid;

#[tokio::test]
async fn test_insert_defaults_and_ordering() -> Result<(), Box<dyn std::error::Error>> {
    let book = BookProject::new("Tides");
    let repo = InMemoryBookRepository::with_books(vec![book.clone()]);

    for n in [3, 1, 2] {
        repo.insert_chapter(&NewChapter::pending(book.id, n, format!("Part {}", n)))
            .await?;
    }

    let chapters = repo.list_chapters_ordered(book.id).await?;
    let numbers: Vec<u32> = chapters.iter().map(|c| c.chapter_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let first = &chapters[0];
    assert_eq!(first.chapter_status, "pending");
    assert_eq!(first.chapter_text, "");
    assert_eq!(first.chapter_summary, "");
    assert_eq!(first.chapter_notes_status, "");
    assert_eq!(first.chapter_notes, "");
    Ok(())
}

#[tokio::test]
async fn test_duplicate_chapter_number_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let book_id = Uuid::new_v4();
    let repo = InMemoryBookRepository::new();
    repo.insert_chapter(&NewChapter::pending(book_id, 1, "One"))
        .await?;

    let err = repo
        .insert_chapter(&NewChapter::pending(book_id, 1, "Again"))
        .await
        .expect_err("duplicate insert should fail");

    assert!(matches!(
        err.kind(),
        BookwrightErrorKind::Database(db) if matches!(db.kind, DatabaseErrorKind::Duplicate(_))
    ));

    // Same number in another book is fine.
    repo.insert_chapter(&NewChapter::pending(Uuid::new_v4(), 1, "Other book"))
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_updates_write_exact_literals() -> Result<(), Box<dyn std::error::Error>> {
    let book = BookProject::new("Tides");
    let repo = InMemoryBookRepository::with_books(vec![book.clone()]);
    let chapter = repo
        .insert_chapter(&NewChapter::pending(book.id, 1, "One"))
        .await?;

    repo.update_chapter(chapter.id, &ChapterUpdate::generated("text", "summary"))
        .await?;
    repo.update_chapter(
        chapter.id,
        &ChapterUpdate {
            chapter_notes_status: Some(NotesStatus::NoNotesNeeded),
            ..ChapterUpdate::default()
        },
    )
    .await?;
    repo.update_chapter(chapter.id, &ChapterUpdate::status(ChapterStatus::Approved))
        .await?;

    let stored = repo.get_chapter(book.id, 1).await?.ok_or("missing")?;
    assert_eq!(stored.chapter_text, "text");
    assert_eq!(stored.chapter_summary, "summary");
    assert_eq!(stored.chapter_status, "approved");
    assert_eq!(stored.chapter_notes_status, "no_notes_needed");

    repo.update_book(book.id, &BookUpdate::ready_for_final()).await?;
    let stored = repo.book(book.id).await.ok_or("missing")?;
    assert_eq!(stored.current_stage, "final");
    assert_eq!(stored.book_output_status.as_deref(), Some("ready"));
    assert_eq!(repo.list_books_by_stage(Stage::Final).await?.len(), 1);
    assert!(repo.list_books_by_stage(Stage::Chapters).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let repo = InMemoryBookRepository::new();

    let err = repo
        .update_book(Uuid::new_v4(), &BookUpdate::compiled())
        .await
        .expect_err("unknown book");
    assert!(format!("{}", err).contains("not found"));

    let err = repo
        .update_chapter(Uuid::new_v4(), &ChapterUpdate::status(ChapterStatus::Approved))
        .await
        .expect_err("unknown chapter");
    assert!(format!("{}", err).contains("not found"));
}

#[tokio::test]
async fn test_stage_filter_is_exact() -> Result<(), Box<dyn std::error::Error>> {
    let mut shouting = BookProject::new("Shouting");
    shouting.current_stage = "CHAPTERS".to_string();
    let mut exact = BookProject::new("Exact");
    exact.current_stage = "chapters".to_string();
    let repo = InMemoryBookRepository::with_books(vec![shouting, exact.clone()]);

    let books = repo.list_books_by_stage(Stage::Chapters).await?;
    assert_eq!(books, vec![exact]);
    Ok(())
}
