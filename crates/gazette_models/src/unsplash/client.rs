//! Unsplash REST client.

use crate::unsplash::dto::SearchResponse;
use async_trait::async_trait;
use gazette_error::{GazetteResult, HttpError, ImageError, ImageErrorKind};
use gazette_interface::ImageSearch;
use gazette_rate_limit::EndpointsConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Image search over `GET /search/photos`, landscape orientation only.
///
/// Without an access key the client reports itself unconfigured and every
/// call fails with [`ImageErrorKind::NotConfigured`].
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    client: Client,
    base_url: String,
    access_key: Option<String>,
}

impl UnsplashClient {
    /// Creates a client using the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(access_key: Option<String>, endpoints: &EndpointsConfig) -> GazetteResult<Self> {
        Self::with_base_url(access_key, &endpoints.unsplash)
    }

    /// Creates a client against a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_base_url(
        access_key: Option<String>,
        base_url: impl Into<String>,
    ) -> GazetteResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key: access_key.filter(|k| !k.trim().is_empty()),
        })
    }

    fn access_key(&self) -> GazetteResult<&str> {
        self.access_key
            .as_deref()
            .ok_or_else(|| ImageError::new(ImageErrorKind::NotConfigured).into())
    }
}

#[async_trait]
impl ImageSearch for UnsplashClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, count: u32) -> GazetteResult<Vec<String>> {
        let access_key = self.access_key()?;
        let url = format!("{}/search/photos", self.base_url);
        debug!(url = %url, "Searching Unsplash");

        let per_page = count.to_string();
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Client-ID {}", access_key))
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("orientation", "landscape"),
            ])
            .send()
            .await
            .map_err(|e| {
                ImageError::new(ImageErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ImageError::new(ImageErrorKind::Http {
                status_code: status,
                message: error_text,
            })
            .into());
        }

        let parsed: SearchResponse = response.json().await.map_err(|e| {
            ImageError::new(ImageErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let urls: Vec<String> = parsed
            .results
            .into_iter()
            .filter_map(|photo| photo.urls.regular)
            .take(count as usize)
            .collect();
        debug!(found = urls.len(), "Unsplash search complete");
        Ok(urls)
    }

    #[instrument(skip(self))]
    async fn download(&self, url: &str) -> GazetteResult<Vec<u8>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            ImageError::new(ImageErrorKind::Transport(format!("Download failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(ImageError::new(ImageErrorKind::Http {
                status_code: status,
                message: format!("Download of {} failed", url),
            })
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            ImageError::new(ImageErrorKind::Transport(format!(
                "Failed to read image body: {}",
                e
            )))
        })?;
        debug!(bytes = bytes.len(), "Image downloaded");
        Ok(bytes.to_vec())
    }

    fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }
}
