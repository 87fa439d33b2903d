mod common;

use bookwright_core::{ChapterState, ChapterStatus, NotesStatus};
use bookwright_pipeline::{
    ChapterAction, OutlineChapter, StepOutcome, decide, format_previous_summaries,
};
use common::{Harness, book_in_chapters, chapter_row};

fn state(status: ChapterStatus, notes_status: NotesStatus, has_text: bool, notes: Option<&str>) -> ChapterState {
    ChapterState {
        status,
        notes_status,
        has_text,
        notes: notes.map(str::to_string),
    }
}

#[test]
fn test_decide_priority_order() {
    // Approved wins over everything, including missing text.
    assert_eq!(
        decide(&state(ChapterStatus::Approved, NotesStatus::Yes, false, None)),
        ChapterAction::Skip
    );
    // Missing text wins over any editor decision.
    assert_eq!(
        decide(&state(ChapterStatus::Generated, NotesStatus::NoNotesNeeded, false, None)),
        ChapterAction::Generate
    );
    assert_eq!(
        decide(&state(ChapterStatus::Generated, NotesStatus::Yes, true, None)),
        ChapterAction::AwaitNotes
    );
    assert_eq!(
        decide(&state(ChapterStatus::Generated, NotesStatus::NoNotesNeeded, true, Some("ignored"))),
        ChapterAction::Approve
    );
    assert_eq!(
        decide(&state(ChapterStatus::WaitingNotes, NotesStatus::Yes, true, Some("tighten"))),
        ChapterAction::Regenerate {
            notes: "tighten".to_string()
        }
    );
    assert_eq!(
        decide(&state(ChapterStatus::Generated, NotesStatus::Undecided, true, None)),
        ChapterAction::Pause
    );
    assert_eq!(
        decide(&state(ChapterStatus::Generated, NotesStatus::No, true, Some("notes"))),
        ChapterAction::Pause
    );
    assert_eq!(
        decide(&state(
            ChapterStatus::Generated,
            NotesStatus::Unrecognized("maybe".to_string()),
            true,
            None
        )),
        ChapterAction::Ignore {
            notes_status: "maybe".to_string()
        }
    );
}

#[test]
fn test_decide_reads_normalized_row_values() {
    let book_id = uuid::Uuid::new_v4();
    let row = chapter_row(book_id, 1, "text", " APPROVED ", "", "");
    assert_eq!(decide(&row.state()), ChapterAction::Skip);

    let row = chapter_row(book_id, 1, "text", "generated", " No_Notes_Needed", "");
    assert_eq!(decide(&row.state()), ChapterAction::Approve);

    let row = chapter_row(book_id, 1, "   ", "generated", "no_notes_needed", "");
    assert_eq!(decide(&row.state()), ChapterAction::Generate);

    let row = chapter_row(book_id, 1, "text", "generated", "YES", "  \n ");
    assert_eq!(decide(&row.state()), ChapterAction::AwaitNotes);
}

#[test]
fn test_previous_summaries_format() {
    let book_id = uuid::Uuid::new_v4();
    let mut rows = vec![
        chapter_row(book_id, 3, "three", "approved", "", ""),
        chapter_row(book_id, 1, "one", "approved", "", ""),
        chapter_row(book_id, 2, "", "pending", "", ""),
        chapter_row(book_id, 4, "four", "generated", "", ""),
    ];
    rows[0].chapter_summary = "  - third  ".to_string();
    rows[1].chapter_summary = "- first".to_string();

    assert_eq!(
        format_previous_summaries(&rows, 4),
        "Chapter 1 summary:\n- first\n\nChapter 3 summary:\n- third"
    );
    assert_eq!(format_previous_summaries(&rows, 1), "");
}

#[tokio::test]
async fn test_approved_chapter_is_never_mutated() -> Result<(), Box<dyn std::error::Error>> {
    let book = book_in_chapters("Tides", "1. Low Water");
    let harness = Harness::new(vec![book.clone()]);
    let row = chapter_row(book.id, 1, "", "approved", "yes", "");
    harness.repository.inner.add_chapter(row.clone()).await?;

    let outcome = harness
        .state_machine()
        .step(&book, "1. Low Water", &OutlineChapter::new(1, "Low Water"), &row)
        .await?;

    assert_eq!(outcome, StepOutcome::Continue);
    assert!(harness.repository.mutations().is_empty());
    assert!(harness.generator.chapter_calls().is_empty());
    assert!(harness.notifier.subjects().is_empty());
    assert_eq!(harness.repository.chapter(book.id, 1).await, row);
    Ok(())
}

#[tokio::test]
async fn test_pause_literals_halt_without_mutation() -> Result<(), Box<dyn std::error::Error>> {
    for literal in ["", "no", " NO "] {
        let book = book_in_chapters("Tides", "1. Low Water");
        let harness = Harness::new(vec![book.clone()]);
        let row = chapter_row(book.id, 1, "draft", "generated", literal, "");
        harness.repository.inner.add_chapter(row.clone()).await?;

        let outcome = harness
            .state_machine()
            .step(&book, "1. Low Water", &OutlineChapter::new(1, "Low Water"), &row)
            .await?;

        assert_eq!(outcome, StepOutcome::Halt, "literal {:?}", literal);
        assert!(harness.repository.mutations().is_empty());
        assert!(harness.notifier.subjects().is_empty());
        assert_eq!(harness.repository.chapter(book.id, 1).await, row);
    }
    Ok(())
}

#[tokio::test]
async fn test_yes_without_notes_waits() -> Result<(), Box<dyn std::error::Error>> {
    let book = book_in_chapters("Tides", "1. Low Water");
    let harness = Harness::new(vec![book.clone()]);
    let row = chapter_row(book.id, 1, "draft", "generated", "yes", "");
    harness.repository.inner.add_chapter(row.clone()).await?;

    let outcome = harness
        .state_machine()
        .step(&book, "1. Low Water", &OutlineChapter::new(1, "Low Water"), &row)
        .await?;

    assert_eq!(outcome, StepOutcome::Halt);
    let stored = harness.repository.chapter(book.id, 1).await;
    assert_eq!(stored.chapter_status, "waiting_notes");
    assert_eq!(stored.chapter_text, "draft");
    assert_eq!(harness.notifier.subjects(), vec!["Waiting for Chapter Notes"]);
    assert_eq!(
        harness.notifier.bodies(),
        vec!["Chapter 1 of 'Tides' is waiting for editor notes."]
    );
    assert!(harness.generator.chapter_calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_no_notes_needed_approves_and_continues() -> Result<(), Box<dyn std::error::Error>> {
    let book = book_in_chapters("Tides", "1. Low Water");
    let harness = Harness::new(vec![book.clone()]);
    let row = chapter_row(book.id, 1, "draft", "generated", "no_notes_needed", "");
    harness.repository.inner.add_chapter(row.clone()).await?;

    let outcome = harness
        .state_machine()
        .step(&book, "1. Low Water", &OutlineChapter::new(1, "Low Water"), &row)
        .await?;

    assert_eq!(outcome, StepOutcome::Continue);
    let stored = harness.repository.chapter(book.id, 1).await;
    assert_eq!(stored.chapter_status, "approved");
    assert_eq!(stored.chapter_notes_status, "no_notes_needed");
    assert!(harness.notifier.subjects().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_regeneration_resets_editor_fields() -> Result<(), Box<dyn std::error::Error>> {
    let outline = "1. Low Water\n2. High Water";
    let book = book_in_chapters("Tides", outline);
    let harness = Harness::new(vec![book.clone()]);
    harness
        .repository
        .inner
        .add_chapter(chapter_row(book.id, 1, "one", "approved", "no_notes_needed", ""))
        .await?;
    let row = chapter_row(book.id, 2, "old draft", "waiting_notes", "Yes", "  More dialogue  ");
    harness.repository.inner.add_chapter(row.clone()).await?;

    let outcome = harness
        .state_machine()
        .step(&book, outline, &OutlineChapter::new(2, "High Water"), &row)
        .await?;

    assert_eq!(outcome, StepOutcome::Halt);

    let stored = harness.repository.chapter(book.id, 2).await;
    let expected_text = common::draft_text(2, Some("More dialogue"));
    assert_eq!(stored.chapter_text, expected_text);
    assert_eq!(stored.chapter_summary, common::summary_of(&expected_text));
    assert_eq!(stored.chapter_status, "generated");
    assert_eq!(stored.chapter_notes_status, "");
    assert_eq!(stored.chapter_notes, "");

    let requests = harness.generator.chapter_calls();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].notes().as_deref(), Some("More dialogue"));
    assert_eq!(requests[0].chapter_title(), "High Water");
    assert_eq!(requests[0].outline(), outline);
    assert_eq!(
        requests[0].previous_summaries(),
        &format!("Chapter 1 summary:\n{}", common::summary_of("one"))
    );

    assert_eq!(harness.notifier.subjects(), vec!["Chapter Updated for Review"]);
    assert_eq!(
        harness.notifier.bodies(),
        vec!["Chapter 2 for 'Tides' was regenerated using your notes and is ready for review."]
    );
    Ok(())
}

#[tokio::test]
async fn test_unrecognized_notes_status_continues_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let book = book_in_chapters("Tides", "1. Low Water");
    let harness = Harness::new(vec![book.clone()]);
    let row = chapter_row(book.id, 1, "draft", "generated", "maybe later", "");
    harness.repository.inner.add_chapter(row.clone()).await?;

    let outcome = harness
        .state_machine()
        .step(&book, "1. Low Water", &OutlineChapter::new(1, "Low Water"), &row)
        .await?;

    assert_eq!(outcome, StepOutcome::Continue);
    assert!(harness.repository.mutations().is_empty());
    assert!(harness.notifier.subjects().is_empty());
    Ok(())
}
