//! Status vocabularies persisted on book and chapter rows.
//!
//! The literal values are a storage contract shared with editor-facing
//! tooling that writes these columns directly, so every enum here maps
//! to and from the exact stored strings.

use serde::{Deserialize, Serialize};

/// Trim and lower-case a stored status value.
///
/// # Examples
///
/// ```
/// use bookwright_core::normalize;
///
/// assert_eq!(normalize("  No_Notes_Needed \n"), "no_notes_needed");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The macro phase a book is in.
///
/// # Examples
///
/// ```
/// use bookwright_core::Stage;
///
/// assert_eq!(Stage::Chapters.as_ref(), "chapters");
/// assert_eq!(" FINAL ".trim().parse::<Stage>().unwrap(), Stage::Final);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stage {
    /// Outline is being generated or reviewed
    Outline,
    /// Chapters are being drafted and reviewed
    Chapters,
    /// Every chapter is approved; awaiting compilation
    Final,
    /// Manuscript compiled and stored
    Completed,
}

/// Output state of the compiled manuscript.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputStatus {
    /// Ready to be compiled
    Ready,
    /// Compiled and stored
    Compiled,
}

/// Review state of the generated outline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutlineStatus {
    /// Outline generated and waiting for author approval
    Generated,
}

/// Lifecycle state of a single chapter.
///
/// Values outside the known vocabulary are kept verbatim in
/// [`ChapterStatus::Unrecognized`] so they round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ChapterStatus {
    /// Row created, no text yet
    #[display("pending")]
    Pending,
    /// Text generated and waiting for an editor decision
    #[display("generated")]
    Generated,
    /// Editor asked for changes but has not written notes yet
    #[display("waiting_notes")]
    WaitingNotes,
    /// Editor accepted the chapter
    #[display("approved")]
    Approved,
    /// Any other stored literal (normalized)
    #[display("{}", _0)]
    Unrecognized(String),
}

impl ChapterStatus {
    /// Decode a stored value, tolerating whitespace and case differences.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookwright_core::ChapterStatus;
    ///
    /// assert_eq!(ChapterStatus::parse(" Approved "), ChapterStatus::Approved);
    /// assert_eq!(
    ///     ChapterStatus::parse("draft"),
    ///     ChapterStatus::Unrecognized("draft".to_string())
    /// );
    /// ```
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "pending" => Self::Pending,
            "generated" => Self::Generated,
            "waiting_notes" => Self::WaitingNotes,
            "approved" => Self::Approved,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The literal persisted for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Generated => "generated",
            Self::WaitingNotes => "waiting_notes",
            Self::Approved => "approved",
            Self::Unrecognized(raw) => raw,
        }
    }
}

/// The editor's decision on a generated chapter.
///
/// Editors write this column by hand: `no_notes_needed` approves,
/// `yes` (with notes) requests a rewrite, and an empty value or `no`
/// leaves the chapter paused until a decision is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum NotesStatus {
    /// Empty column; no decision yet
    #[display("")]
    Undecided,
    /// Explicit "no"; treated as a pause
    #[display("no")]
    No,
    /// Editor wants changes
    #[display("yes")]
    Yes,
    /// Editor approves as written
    #[display("no_notes_needed")]
    NoNotesNeeded,
    /// Any other stored literal (normalized)
    #[display("{}", _0)]
    Unrecognized(String),
}

impl NotesStatus {
    /// Decode a stored value, tolerating whitespace and case differences.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookwright_core::NotesStatus;
    ///
    /// assert_eq!(NotesStatus::parse(""), NotesStatus::Undecided);
    /// assert_eq!(NotesStatus::parse(" YES"), NotesStatus::Yes);
    /// ```
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "" => Self::Undecided,
            "no" => Self::No,
            "yes" => Self::Yes,
            "no_notes_needed" => Self::NoNotesNeeded,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The literal persisted for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Undecided => "",
            Self::No => "no",
            Self::Yes => "yes",
            Self::NoNotesNeeded => "no_notes_needed",
            Self::Unrecognized(raw) => raw,
        }
    }
}

