//! Content repository (contents API) error types.

/// Content repository error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RepositoryErrorKind {
    /// Token or repository coordinates are missing
    #[display("Content repository not configured: {}", _0)]
    NotConfigured(String),
    /// Request could not be sent or the connection failed
    #[display("Repository request failed: {}", _0)]
    Transport(String),
    /// The remote API answered with a non-success status
    #[display("Repository rejected write with HTTP {}: {}", status_code, message)]
    Rejected {
        /// HTTP status code
        status_code: u16,
        /// Response body
        message: String,
    },
}

impl RepositoryErrorKind {
    /// HTTP status code of a rejected write, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RepositoryErrorKind::Rejected { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Content repository error with source location tracking.
///
/// # Examples
///
/// ```
/// use gazette_error::{RepositoryError, RepositoryErrorKind};
///
/// let err = RepositoryError::new(RepositoryErrorKind::Rejected {
///     status_code: 422,
///     message: "sha wasn't supplied".to_string(),
/// });
/// assert_eq!(err.kind.status_code(), Some(422));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Repository Error: {} at line {} in {}", kind, line, file)]
pub struct RepositoryError {
    /// The kind of error that occurred
    pub kind: RepositoryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RepositoryError {
    /// Create a new RepositoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RepositoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
