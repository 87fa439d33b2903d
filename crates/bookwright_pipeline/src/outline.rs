//! Chapter detection in free-form outline text.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static NUMBERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s+(.*)$").expect("Valid numbered chapter regex")
});

static CHAPTER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^chapter\s+(\d+)\s*[:\-]\s*(.*)$").expect("Valid chapter prefix regex")
});

/// A chapter entry detected in an outline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_getters::Getters)]
pub struct OutlineChapter {
    /// Chapter number as written in the outline
    number: u32,
    /// Trimmed chapter title, possibly empty
    title: String,
}

impl OutlineChapter {
    /// Create an outline entry.
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
        }
    }
}

impl std::fmt::Display for OutlineChapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number, self.title)
    }
}

/// Extract the ordered chapter list from outline text.
///
/// Lines of the form `N. Title` or `Chapter N: Title` / `Chapter N - Title`
/// (any case) are chapter entries; everything else is ignored. When a
/// number appears more than once the first title wins. The result is sorted
/// by chapter number and may be empty.
///
/// # Examples
///
/// ```
/// use bookwright_pipeline::parse_outline;
///
/// let chapters = parse_outline("1. Intro\nChapter 2: Body\n- bullet\n1. Dup");
/// let titles: Vec<_> = chapters.iter().map(|c| (*c.number(), c.title().as_str())).collect();
/// assert_eq!(titles, vec![(1, "Intro"), (2, "Body")]);
/// ```
pub fn parse_outline(text: &str) -> Vec<OutlineChapter> {
    let mut chapters: BTreeMap<u32, String> = BTreeMap::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some((number, title)) = match_line(line) {
            chapters.entry(number).or_insert(title);
        }
    }

    chapters
        .into_iter()
        .map(|(number, title)| OutlineChapter { number, title })
        .collect()
}

fn match_line(line: &str) -> Option<(u32, String)> {
    let captures = NUMBERED
        .captures(line)
        .or_else(|| CHAPTER_PREFIX.captures(line))?;
    let number = captures.get(1)?.as_str().parse::<u32>().ok()?;
    let title = captures.get(2).map_or("", |m| m.as_str()).trim();
    Some((number, title.to_string()))
}
