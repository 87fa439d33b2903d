//! Requests handed to content generators.

use serde::{Deserialize, Serialize};

/// Everything a generator needs to draft one chapter.
///
/// # Examples
///
/// ```
/// use bookwright_core::ChapterRequest;
///
/// let request = ChapterRequest::builder()
///     .book_title("Tides")
///     .outline("1. Low Water\n2. High Water")
///     .chapter_number(2u32)
///     .chapter_title("High Water")
///     .previous_summaries("Chapter 1 summary:\n- the tide goes out")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.chapter_number(), 2);
/// assert!(request.notes().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ChapterRequest {
    /// Title of the book
    book_title: String,
    /// Full outline text
    outline: String,
    /// Chapter position
    chapter_number: u32,
    /// Chapter title from the outline
    chapter_title: String,
    /// Summaries of earlier chapters, empty for the first chapter
    #[builder(default)]
    previous_summaries: String,
    /// Editor notes for a rewrite
    #[builder(default)]
    notes: Option<String>,
}

impl ChapterRequest {
    /// Creates a new chapter request builder.
    pub fn builder() -> ChapterRequestBuilder {
        ChapterRequestBuilder::default()
    }
}

/// Everything a generator needs to draft a book outline.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct OutlineRequest {
    /// Title of the book
    title: String,
    /// Editor notes written before any outline exists
    notes_before: String,
    /// Editor notes on a previous outline
    #[builder(default)]
    notes_after: Option<String>,
}

impl OutlineRequest {
    /// Creates a new outline request builder.
    pub fn builder() -> OutlineRequestBuilder {
        OutlineRequestBuilder::default()
    }
}
