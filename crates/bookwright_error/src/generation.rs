//! Content generation errors.

/// Content generator error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Transport-level failure talking to the provider
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// Provider returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the provider
        message: String,
    },
    /// Provider rejected the request for exceeding its rate limit
    #[display("Rate limit exceeded")]
    RateLimit,
    /// Requested model does not exist
    #[display("Model not found: {}", _0)]
    ModelNotFound(String),
    /// Response body could not be interpreted
    #[display("Response parsing error: {}", _0)]
    ResponseParsing(String),
    /// Provider returned no usable text
    #[display("Empty response from {}", _0)]
    EmptyResponse(String),
    /// Request could not be assembled
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Content generator error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at {}:{}", kind, file, line)]
pub struct GenerationError {
    /// The specific error kind
    pub kind: GenerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Whether retrying the same request later could succeed.
    pub fn is_retryable(&self) -> bool {
        match &self.kind {
            GenerationErrorKind::Http(_) | GenerationErrorKind::RateLimit => true,
            GenerationErrorKind::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
