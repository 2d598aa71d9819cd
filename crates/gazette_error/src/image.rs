//! Image search and download error types.

/// Image backend error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// The image search backend has no access key
    #[display("Image search backend not configured")]
    NotConfigured,
    /// Request could not be sent or the connection failed
    #[display("Image request failed: {}", _0)]
    Transport(String),
    /// HTTP error with status code
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message (response body)
        message: String,
    },
    /// Search response could not be decoded
    #[display("Malformed image search response: {}", _0)]
    MalformedResponse(String),
}

/// Image backend error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
