//! Pipeline error types.

/// Specific error conditions raised by the stage drivers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// A chapter row expected to exist could not be found
    #[display("Chapter row missing for chapter {}", _0)]
    MissingChapterRow(u32),
    /// A generator request could not be assembled
    #[display("Failed to build request: {}", _0)]
    RequestBuild(String),
    /// Outline text could not be read
    #[display("Failed to read outline: {}", _0)]
    OutlineRead(String),
    /// A run finished with per-book failures
    #[display("{} book(s) failed during the run", _0)]
    BooksFailed(usize),
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use bookwright_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::MissingChapterRow(3));
/// assert!(format!("{}", err).contains("chapter 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
