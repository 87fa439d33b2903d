//! Notification error types.

/// Notification delivery failure with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Notify Error: {} at line {} in {}", message, line, file)]
pub struct NotifyError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl NotifyError {
    /// Create a new NotifyError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookwright_error::NotifyError;
    ///
    /// let err = NotifyError::new("webhook returned 502");
    /// assert!(err.message.contains("502"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
