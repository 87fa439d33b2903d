//! Manuscript assembly.

use bookwright_core::{BookProject, Chapter};

/// One chapter as it appears in the manuscript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuscriptChapter {
    /// Chapter number
    pub number: u32,
    /// Chapter title
    pub title: String,
    /// Chapter body
    pub text: String,
}

/// A compiled book: title followed by its chapters in order.
///
/// # Examples
///
/// ```
/// use bookwright_core::BookProject;
/// use bookwright_pipeline::Manuscript;
///
/// let manuscript = Manuscript::assemble(&BookProject::new("The Long Tide"), &[]);
/// assert_eq!(manuscript.file_name(), "The_Long_Tide.md");
/// assert_eq!(manuscript.to_markdown(), "# The Long Tide\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manuscript {
    title: String,
    chapters: Vec<ManuscriptChapter>,
}

impl Manuscript {
    /// Build the manuscript from a book and its chapter rows.
    pub fn assemble(book: &BookProject, chapters: &[Chapter]) -> Self {
        let mut chapters: Vec<ManuscriptChapter> = chapters
            .iter()
            .map(|c| ManuscriptChapter {
                number: c.chapter_number,
                title: c.chapter_title.trim().to_string(),
                text: c.chapter_text.trim().to_string(),
            })
            .collect();
        chapters.sort_by_key(|c| c.number);

        Self {
            title: book.title.trim().to_string(),
            chapters,
        }
    }

    /// Book title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Chapters in ascending order.
    pub fn chapters(&self) -> &[ManuscriptChapter] {
        &self.chapters
    }

    /// Output file name: the title with spaces and path separators replaced
    /// by underscores, plus a `.md` extension.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .title
            .chars()
            .map(|c| match c {
                ' ' | '/' | '\\' => '_',
                other => other,
            })
            .collect();

        match stem.as_str() {
            "" | "." | ".." => "untitled.md".to_string(),
            _ => format!("{}.md", stem),
        }
    }

    /// Render as Markdown with a level-one title and level-two chapter headings.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n", self.title);
        for chapter in &self.chapters {
            out.push_str(&format!(
                "\n## Chapter {}: {}\n\n{}\n",
                chapter.number, chapter.title, chapter.text
            ));
        }
        out
    }
}
