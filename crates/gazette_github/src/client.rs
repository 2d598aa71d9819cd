//! Contents API client.

use crate::PutContentsRequest;
use async_trait::async_trait;
use gazette_error::{GazetteResult, RepositoryError, RepositoryErrorKind};
use gazette_interface::ContentRepository;
use gazette_rate_limit::EndpointsConfig;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument};

/// Writes files to one branch of one GitHub repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: String,
    repo: String,
    branch: String,
}

impl GitHubClient {
    /// Creates a client for `repo` (`owner/name`) on `branch`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryErrorKind::NotConfigured`] if the token is empty or
    /// the repository is not in `owner/name` form.
    pub fn new(
        token: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
        endpoints: &EndpointsConfig,
    ) -> GazetteResult<Self> {
        Self::with_base_url(token, repo, branch, &endpoints.github)
    }

    /// Creates a client against a custom API base URL.
    ///
    /// # Errors
    ///
    /// Same as [`GitHubClient::new`].
    pub fn with_base_url(
        token: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
        base_url: impl Into<String>,
    ) -> GazetteResult<Self> {
        let token = token.into();
        let repo = repo.into();

        if token.trim().is_empty() {
            return Err(RepositoryError::new(RepositoryErrorKind::NotConfigured(
                "GITHUB_TOKEN is empty".to_string(),
            ))
            .into());
        }
        match repo.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {}
            _ => {
                return Err(RepositoryError::new(RepositoryErrorKind::NotConfigured(format!(
                    "GITHUB_REPO must be owner/name, got '{}'",
                    repo
                )))
                .into());
            }
        }

        Ok(Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            repo,
            branch: branch.into(),
        })
    }

    /// Target branch.
    pub fn branch(&self) -> &str {
        &self.branch
    }
}

#[async_trait]
impl ContentRepository for GitHubClient {
    #[instrument(skip(self, content), fields(repo = %self.repo, bytes = content.len()))]
    async fn put_file(&self, path: &str, content: &[u8], message: &str) -> GazetteResult<()> {
        let url = format!(
            "{}/repos/{}/contents/{}",
            self.base_url,
            self.repo,
            path.trim_start_matches('/')
        );
        let body = PutContentsRequest::new(message, content, self.branch.as_str());
        debug!(url = %url, "Committing file");

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", "gazette")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                RepositoryError::new(RepositoryErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            info!(status = status.as_u16(), "File committed");
            return Ok(());
        }

        let error_text = response.text().await.unwrap_or_default();
        error!(status = status.as_u16(), body = %error_text, "Repository rejected write");
        Err(RepositoryError::new(RepositoryErrorKind::Rejected {
            status_code: status.as_u16(),
            message: error_text,
        })
        .into())
    }

    fn location(&self) -> String {
        format!("{}@{}", self.repo, self.branch)
    }
}
