//! Ports for the external backends.

use crate::TextRequest;
use async_trait::async_trait;
use gazette_error::GazetteResult;

/// Generative-text backend.
///
/// Implementations choose credentials themselves. An `Ok` value means the
/// backend answered; the text may still be empty.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the trimmed response text.
    async fn generate(&self, req: &TextRequest) -> GazetteResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Image-search backend.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Return up to `count` image URLs for `query`, landscape only.
    async fn search(&self, query: &str, count: u32) -> GazetteResult<Vec<String>>;

    /// Fetch the bytes behind an image URL.
    async fn download(&self, url: &str) -> GazetteResult<Vec<u8>>;

    /// False when no credentials were supplied; callers skip the backend.
    fn is_configured(&self) -> bool {
        true
    }
}

/// Remote content store that accepts one file per commit.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Create or replace `path` with `content` in a single commit.
    ///
    /// # Errors
    ///
    /// Any response other than 200 or 201 is an error carrying the status.
    async fn put_file(&self, path: &str, content: &[u8], message: &str) -> GazetteResult<()>;

    /// Human-readable target, e.g. `owner/repo@main`.
    fn location(&self) -> String;
}
