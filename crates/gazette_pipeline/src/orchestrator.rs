//! One publication run, start to finish.

use crate::{
    ContentGenerator, ImageSourcer, Publisher, QuotaStatus, RunConfig, assemble_article,
    next_keyword,
};
use chrono::{DateTime, Utc};
use gazette_core::{RunOutcome, RunResult, RunState, RunStats};
use gazette_error::{
    GazetteError, GazetteErrorKind, GazetteResult, PipelineError, PipelineErrorKind,
    RepositoryErrorKind,
};
use gazette_github::GitHubClient;
use gazette_interface::{ContentRepository, ImageSearch, TextGenerator};
use gazette_models::{GeminiClient, UnsplashClient};
use gazette_rate_limit::{GazetteConfig, RateLimiter};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

const NO_API_KEYS: &str = "No API keys available";
const NO_REPOSITORY: &str = "No content repository configured";

/// Sequences quota check, keyword selection, generation, image sourcing and
/// publication, and turns every outcome into a [`RunResult`].
///
/// Stages run strictly in order. The only waits are network calls and the
/// rate limiters.
pub struct Orchestrator {
    text: Arc<dyn TextGenerator>,
    images: Arc<dyn ImageSearch>,
    repository: Option<Arc<dyn ContentRepository>>,
    settings: GazetteConfig,
    text_limiter: RateLimiter,
    image_limiter: RateLimiter,
}

impl Orchestrator {
    /// Creates an orchestrator over the given backends.
    ///
    /// A `None` repository makes every run fail before any backend call.
    pub fn new(
        text: Arc<dyn TextGenerator>,
        images: Arc<dyn ImageSearch>,
        repository: Option<Arc<dyn ContentRepository>>,
        settings: GazetteConfig,
    ) -> Self {
        let text_limiter = RateLimiter::named("text", settings.limits.text);
        let image_limiter = RateLimiter::named("image", settings.limits.image);
        Self {
            text,
            images,
            repository,
            settings,
            text_limiter,
            image_limiter,
        }
    }

    /// Creates an orchestrator backed by Gemini, Unsplash and GitHub.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built. Unusable
    /// repository settings (empty token, malformed `GITHUB_REPO`) are not an
    /// error here; runs then fail with the missing-repository message.
    pub fn from_config(run: &RunConfig, settings: GazetteConfig) -> GazetteResult<Self> {
        let text = GeminiClient::new(run.api_keys().clone(), &settings.models, &settings.endpoints);
        let images = UnsplashClient::new(run.unsplash_access_key().clone(), &settings.endpoints)?;

        let repository: Option<Arc<dyn ContentRepository>> =
            match (run.github_token(), run.github_repo()) {
                (Some(token), Some(repo)) => {
                    let branch = run
                        .github_branch()
                        .clone()
                        .unwrap_or_else(|| settings.publishing.branch.clone());
                    match GitHubClient::new(
                        token.as_str(),
                        repo.as_str(),
                        branch,
                        &settings.endpoints,
                    ) {
                        Ok(client) => Some(Arc::new(client)),
                        // Reported by the run, after the key pool check.
                        Err(e) if is_not_configured(&e) => {
                            warn!(error = %e, "Ignoring unusable repository settings");
                            None
                        }
                        Err(e) => return Err(e),
                    }
                }
                _ => None,
            };

        Ok(Self::new(
            Arc::new(text),
            Arc::new(images),
            repository,
            settings,
        ))
    }

    /// Run once against `config`, returning the result and updated state.
    ///
    /// Never fails: every error becomes a failed [`RunResult`]. The returned
    /// state carries request counts even when the run failed.
    #[instrument(skip_all)]
    pub async fn run(&self, config: &RunConfig) -> RunOutcome {
        self.run_at(config, Utc::now()).await
    }

    /// [`Orchestrator::run`] with an explicit clock reading.
    pub async fn run_at(&self, config: &RunConfig, now: DateTime<Utc>) -> RunOutcome {
        info!("Starting publication run");
        let today = now.date_naive();
        let mut state = config.state().clone();

        let outcome = self.execute(config, &mut state, now).await;

        let stats = RunStats {
            api_calls: state.requests_on(today),
            articles_today: state.articles_on(today),
        };
        let result = match outcome {
            Ok(summary) => {
                info!(title = %summary.title, "Article generation completed");
                RunResult::published(summary, stats)
            }
            Err(e) => {
                let message = failure_message(&e);
                warn!(error = %e, message = %message, "Run failed");
                RunResult::failure(message, stats)
            }
        };

        RunOutcome { result, state }
    }

    async fn execute(
        &self,
        config: &RunConfig,
        state: &mut RunState,
        now: DateTime<Utc>,
    ) -> GazetteResult<gazette_core::ArticleSummary> {
        let today = now.date_naive();

        if config.api_keys().is_empty() {
            return Err(config_missing(NO_API_KEYS));
        }
        let Some(repository) = self.repository.as_deref() else {
            return Err(config_missing(NO_REPOSITORY));
        };

        QuotaStatus::on(state, config.blog(), today).check()?;

        let keyword = next_keyword(config.keywords(), &mut state.used_keywords)
            .ok_or_else(|| GazetteError::from(PipelineError::new(PipelineErrorKind::NoKeywords)))?;
        info!(keyword = %keyword, "Keyword selected");

        let generator =
            ContentGenerator::new(self.text.as_ref(), &self.text_limiter, &self.settings.models);
        let draft = generator.generate(&keyword).await;
        state.record_requests(today, generator.answered_calls());
        let draft = draft?;

        let sourcer = ImageSourcer::new(
            self.images.as_ref(),
            repository,
            &self.image_limiter,
            &self.settings.publishing,
        );
        let featured_image = sourcer.featured_image(&keyword, &draft.outline).await;

        let article = assemble_article(
            &keyword,
            draft,
            featured_image,
            config.blog(),
            &self.settings.publishing,
            now,
        )?;
        info!(
            title = %article.title(),
            words = *article.word_count(),
            "Article generated"
        );

        Publisher::new(repository, &self.settings.publishing)
            .publish(&article)
            .await?;

        let summary = article.summary();
        state.record_publication(article);
        Ok(summary)
    }
}

fn config_missing(message: &str) -> GazetteError {
    error!(reason = message, "Configuration missing");
    PipelineError::new(PipelineErrorKind::ConfigMissing(message.to_string())).into()
}

fn is_not_configured(err: &GazetteError) -> bool {
    matches!(
        err.kind(),
        GazetteErrorKind::Repository(e) if matches!(e.kind, RepositoryErrorKind::NotConfigured(_))
    )
}

/// Message reported to the caller for a failed run.
fn failure_message(err: &GazetteError) -> String {
    match err.kind() {
        GazetteErrorKind::Pipeline(e) => match &e.kind {
            PipelineErrorKind::ConfigMissing(message) => message.clone(),
            PipelineErrorKind::QuotaExceeded(_) => "Daily limits reached".to_string(),
            PipelineErrorKind::NoKeywords => "No keywords available".to_string(),
            PipelineErrorKind::GenerationFailed(_) | PipelineErrorKind::OutlineParseFailed(_) => {
                "Failed to generate article".to_string()
            }
            PipelineErrorKind::PublishFailed(_) => "Failed to save article to GitHub".to_string(),
            PipelineErrorKind::ImageSourcingFailed(detail) => format!("Execution error: {}", detail),
        },
        _ => format!("Execution error: {}", err),
    }
}
