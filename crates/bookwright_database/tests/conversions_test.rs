use bookwright_core::{
    BookUpdate, ChapterStatus, ChapterUpdate, NewChapter, NotesStatus, OutputStatus, Stage,
};
use bookwright_database::{
    BookProjectRow, ChapterRow, book_update_to_changeset, chapter_update_to_changeset,
    new_chapter_to_row, row_to_book, row_to_chapter,
};
use uuid::Uuid;

fn chapter_row(number: i32) -> ChapterRow {
    ChapterRow {
        id: Uuid::new_v4(),
        book_id: Uuid::new_v4(),
        chapter_number: number,
        chapter_title: "Intro".to_string(),
        chapter_text: None,
        chapter_summary: Some("- it begins".to_string()),
        chapter_status: Some("Approved ".to_string()),
        chapter_notes_status: None,
        chapter_notes: None,
    }
}

#[test]
fn null_text_columns_read_as_empty_strings() {
    let chapter = row_to_chapter(chapter_row(1)).unwrap();

    assert_eq!(chapter.chapter_number, 1);
    assert_eq!(chapter.chapter_text, "");
    assert_eq!(chapter.chapter_notes_status, "");
    assert_eq!(chapter.summary(), Some("- it begins"));
    assert!(chapter.state().is_approved());
}

#[test]
fn negative_chapter_number_is_rejected() {
    assert!(row_to_chapter(chapter_row(-1)).is_err());
}

#[test]
fn new_chapter_row_uses_pending_defaults() {
    let book_id = Uuid::new_v4();
    let row = new_chapter_to_row(&NewChapter::pending(book_id, 4, "Rising Action")).unwrap();

    assert_eq!(row.book_id, book_id);
    assert_eq!(row.chapter_number, 4);
    assert_eq!(row.chapter_status, "pending");
    assert_eq!(row.chapter_notes_status, "");
    assert_eq!(row.chapter_text, "");
    assert_eq!(row.chapter_summary, "");
    assert_eq!(row.chapter_notes, "");
}

#[test]
fn generated_update_writes_storage_literals() {
    let changeset = chapter_update_to_changeset(&ChapterUpdate::generated("text", "summary"));

    assert_eq!(changeset.chapter_status.as_deref(), Some("generated"));
    assert_eq!(changeset.chapter_notes_status.as_deref(), Some(""));
    assert_eq!(changeset.chapter_notes.as_deref(), Some(""));
    assert_eq!(changeset.chapter_text.as_deref(), Some("text"));
}

#[test]
fn status_update_leaves_other_columns_untouched() {
    let changeset =
        chapter_update_to_changeset(&ChapterUpdate::status(ChapterStatus::WaitingNotes));

    assert_eq!(changeset.chapter_status.as_deref(), Some("waiting_notes"));
    assert!(changeset.chapter_text.is_none());
    assert!(changeset.chapter_notes_status.is_none());

    let approve = ChapterUpdate {
        chapter_notes_status: Some(NotesStatus::NoNotesNeeded),
        ..ChapterUpdate::default()
    };
    assert_eq!(
        chapter_update_to_changeset(&approve).chapter_notes_status.as_deref(),
        Some("no_notes_needed")
    );
}

#[test]
fn book_changesets_use_stage_literals() {
    let changeset = book_update_to_changeset(&BookUpdate::ready_for_final());
    assert_eq!(changeset.current_stage.as_deref(), Some("final"));
    assert_eq!(changeset.book_output_status.as_deref(), Some("ready"));
    assert!(changeset.outline.is_none());

    let outline = book_update_to_changeset(&BookUpdate::outline_generated("1. Intro"));
    assert_eq!(outline.current_stage.as_deref(), Some("outline"));
    assert_eq!(outline.outline_status.as_deref(), Some("generated"));
}

#[test]
fn book_row_keeps_raw_stage_literal() {
    let book = row_to_book(BookProjectRow {
        id: Uuid::new_v4(),
        title: "Tides".to_string(),
        notes_on_outline_before: None,
        notes_on_outline_after: None,
        outline: Some("1. Intro".to_string()),
        outline_status: None,
        current_stage: "Chapters".to_string(),
        book_output_status: Some("ready".to_string()),
    });

    assert_eq!(book.current_stage, "Chapters");
    assert_eq!(book.stage(), Some(Stage::Chapters));
    assert_eq!(book.output_status(), Some(OutputStatus::Ready));
}
