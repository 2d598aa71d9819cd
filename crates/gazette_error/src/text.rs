//! Generative-text backend error types.

/// Text backend error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TextBackendErrorKind {
    /// No API keys were configured for the backend
    #[display("No API keys available")]
    MissingCredentials,
    /// Request could not be sent or the connection failed
    #[display("Text backend request failed: {}", _0)]
    Transport(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message (response body)
        message: String,
    },
    /// Response body did not match the expected shape
    #[display("Malformed text backend response: {}", _0)]
    MalformedResponse(String),
}

/// Text backend error with source location tracking.
///
/// # Examples
///
/// ```
/// use gazette_error::{TextBackendError, TextBackendErrorKind};
///
/// let err = TextBackendError::new(TextBackendErrorKind::MissingCredentials);
/// assert!(format!("{}", err).contains("No API keys available"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Text Backend Error: {} at line {} in {}", kind, line, file)]
pub struct TextBackendError {
    /// The kind of error that occurred
    pub kind: TextBackendErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TextBackendError {
    /// Create a new TextBackendError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TextBackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
