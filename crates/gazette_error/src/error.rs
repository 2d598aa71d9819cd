//! Top-level error wrapper types.

use crate::{
    BackendError, ConfigError, HttpError, ImageError, JsonError, PipelineError, RepositoryError,
    TextBackendError,
};

/// Every error condition the workspace can surface.
///
/// # Examples
///
/// ```
/// use gazette_error::{GazetteError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: GazetteError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GazetteErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Generic backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Generative-text backend error
    #[from(TextBackendError)]
    Text(TextBackendError),
    /// Image search or download error
    #[from(ImageError)]
    Image(ImageError),
    /// Content repository error
    #[from(RepositoryError)]
    Repository(RepositoryError),
    /// Publication pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Gazette error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Gazette Error: {}", _0)]
pub struct GazetteError(Box<GazetteErrorKind>);

impl GazetteError {
    /// Create a new error from a kind.
    pub fn new(kind: GazetteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GazetteErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to GazetteErrorKind
impl<T> From<T> for GazetteError
where
    T: Into<GazetteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Gazette operations.
pub type GazetteResult<T> = std::result::Result<T, GazetteError>;
