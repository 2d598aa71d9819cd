//! Featured image sourcing.

use crate::slugify;
use gazette_core::Outline;
use gazette_error::{GazetteResult, PipelineError, PipelineErrorKind};
use gazette_interface::{ContentRepository, ImageSearch};
use gazette_rate_limit::{PublishingConfig, RateLimiter};
use tracing::{debug, info, instrument, warn};

/// Finds an image for a keyword and re-hosts it in the content repository.
pub struct ImageSourcer<'a> {
    search: &'a dyn ImageSearch,
    repository: &'a dyn ContentRepository,
    limiter: &'a RateLimiter,
    publishing: &'a PublishingConfig,
}

impl<'a> ImageSourcer<'a> {
    /// Creates a sourcer.
    pub fn new(
        search: &'a dyn ImageSearch,
        repository: &'a dyn ContentRepository,
        limiter: &'a RateLimiter,
        publishing: &'a PublishingConfig,
    ) -> Self {
        Self {
            search,
            repository,
            limiter,
            publishing,
        }
    }

    /// Site-relative path of the featured image, or an empty string.
    ///
    /// Only runs when a section of `outline` asks for an image. Every
    /// failure is logged and yields an empty path.
    #[instrument(skip(self, outline))]
    pub async fn featured_image(&self, keyword: &str, outline: &Outline) -> String {
        if !outline.wants_images() {
            debug!("No section needs an image");
            return String::new();
        }
        if !self.search.is_configured() {
            info!("Image search not configured, publishing without image");
            return String::new();
        }

        match self.source(keyword).await {
            Ok(Some(path)) => path,
            Ok(None) => {
                info!("No image found");
                String::new()
            }
            Err(e) => {
                let e = PipelineError::new(PipelineErrorKind::ImageSourcingFailed(e.to_string()));
                warn!(error = %e, "Continuing without featured image");
                String::new()
            }
        }
    }

    async fn source(&self, keyword: &str) -> GazetteResult<Option<String>> {
        let slug = slugify(keyword);
        if slug.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::ImageSourcingFailed(format!(
                "no image file name for keyword '{}'",
                keyword
            )))
            .into());
        }

        let query = format!("{} {}", keyword, self.publishing.image_query_qualifier)
            .trim()
            .to_string();

        let urls = {
            let _guard = self.limiter.acquire().await;
            self.search.search(&query, 1).await?
        };
        let Some(url) = urls.first() else {
            return Ok(None);
        };

        let bytes = self.search.download(url).await?;
        let filename = format!("{}-featured.jpg", slug);
        let image_dir = self.publishing.image_dir.trim_matches('/');
        let repo_path = format!("{}/{}", image_dir, filename);

        self.repository
            .put_file(&repo_path, &bytes, &format!("Add image: {}", filename))
            .await?;

        info!(path = %repo_path, "Image uploaded");
        Ok(Some(format!("/{}", repo_path)))
    }
}
