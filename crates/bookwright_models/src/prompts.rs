//! Prompt templates for outline drafting, chapter drafting and summarization.

use bookwright_core::{ChapterRequest, OutlineRequest};

const NONE: &str = "None";

fn or_none(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => NONE,
    }
}

/// Prompt for drafting a book outline.
///
/// # Examples
///
/// ```
/// use bookwright_core::OutlineRequest;
/// use bookwright_models::outline_prompt;
///
/// let request = OutlineRequest::builder()
///     .title("Tides")
///     .notes_before("Three short chapters")
///     .build()
///     .unwrap();
///
/// let prompt = outline_prompt(&request);
/// assert!(prompt.starts_with("Title: Tides"));
/// assert!(prompt.contains("Editor notes after outline:\nNone"));
/// ```
pub fn outline_prompt(request: &OutlineRequest) -> String {
    format!(
        "Title: {}\n\n\
         Editor notes before outline:\n{}\n\n\
         Editor notes after outline:\n{}\n\n\
         Create a clear book outline with:\n\
         - Numbered chapters\n\
         - Chapter titles\n\
         - Short bullet points per chapter\n",
        request.title(),
        request.notes_before(),
        or_none(request.notes_after().as_deref()),
    )
}

/// Prompt for drafting one chapter, with editor notes when rewriting.
pub fn chapter_prompt(request: &ChapterRequest) -> String {
    let previous = or_none(Some(request.previous_summaries().as_str()));
    format!(
        "Book title: {}\n\n\
         Outline:\n{}\n\n\
         Previous chapter summaries:\n{}\n\n\
         Now write Chapter {}: {}\n\n\
         Editor notes for this chapter:\n{}\n\n\
         Write clearly and keep continuity.\n\
         End with a short wrap-up for the next chapter.\n",
        request.book_title(),
        request.outline(),
        previous,
        request.chapter_number(),
        request.chapter_title(),
        or_none(request.notes().as_deref()),
    )
}

/// Prompt for condensing a chapter into context for later chapters.
pub fn summary_prompt(chapter_text: &str) -> String {
    format!(
        "Summarize the following chapter in 8–12 bullet points.\n\
         Focus on key facts, ideas, and concepts.\n\n\
         CHAPTER:\n{}\n",
        chapter_text
    )
}
