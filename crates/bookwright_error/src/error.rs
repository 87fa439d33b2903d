//! Top-level error wrapper types.

use crate::{
    ConfigError, DatabaseError, GenerationError, NotifyError, PipelineError, StorageError,
};

/// Every error condition a Bookwright operation can surface.
///
/// # Examples
///
/// ```
/// use bookwright_error::{BookwrightError, NotifyError};
///
/// let err: BookwrightError = NotifyError::new("connection refused").into();
/// assert!(format!("{}", err).contains("Notify Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BookwrightErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Content generator error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Notification delivery error
    #[from(NotifyError)]
    Notify(NotifyError),
    /// Pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Manuscript storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Bookwright error with kind discrimination.
///
/// # Examples
///
/// ```
/// use bookwright_error::{BookwrightErrorKind, BookwrightResult, ConfigError};
///
/// fn might_fail() -> BookwrightResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), BookwrightErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Bookwright Error: {}", _0)]
pub struct BookwrightError(Box<BookwrightErrorKind>);

impl BookwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: BookwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BookwrightErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BookwrightErrorKind
impl<T> From<T> for BookwrightError
where
    T: Into<BookwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Bookwright operations.
pub type BookwrightResult<T> = std::result::Result<T, BookwrightError>;
