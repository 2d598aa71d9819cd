//! Daily ceilings checked before a run starts.

use crate::BlogSettings;
use chrono::NaiveDate;
use gazette_core::RunState;
use gazette_error::{GazetteResult, PipelineError, PipelineErrorKind};
use serde::Serialize;
use tracing::info;

/// Today's counters against the configured ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaStatus {
    /// Articles logged today
    pub articles_today: usize,
    /// Article ceiling
    pub max_daily_articles: usize,
    /// Text backend calls counted today
    pub requests_today: u32,
    /// Request ceiling
    pub max_daily_requests: u32,
}

impl QuotaStatus {
    /// Counters for `today`.
    pub fn on(state: &RunState, blog: &BlogSettings, today: NaiveDate) -> Self {
        Self {
            articles_today: state.articles_on(today),
            max_daily_articles: *blog.max_daily_articles(),
            requests_today: state.requests_on(today),
            max_daily_requests: *blog.max_daily_requests(),
        }
    }

    /// True only if both counters are under their ceilings.
    pub fn allows(&self) -> bool {
        self.articles_today < self.max_daily_articles
            && self.requests_today < self.max_daily_requests
    }

    /// [`QuotaStatus::allows`] as a result.
    ///
    /// # Errors
    ///
    /// [`PipelineErrorKind::QuotaExceeded`] naming the exhausted ceiling.
    pub fn check(&self) -> GazetteResult<()> {
        if self.articles_today >= self.max_daily_articles {
            info!(
                articles = self.articles_today,
                max = self.max_daily_articles,
                "Daily article limit reached"
            );
            return Err(PipelineError::new(PipelineErrorKind::QuotaExceeded(format!(
                "articles {}/{}",
                self.articles_today, self.max_daily_articles
            )))
            .into());
        }
        if self.requests_today >= self.max_daily_requests {
            info!(
                requests = self.requests_today,
                max = self.max_daily_requests,
                "Daily request limit reached"
            );
            return Err(PipelineError::new(PipelineErrorKind::QuotaExceeded(format!(
                "requests {}/{}",
                self.requests_today, self.max_daily_requests
            )))
            .into());
        }
        Ok(())
    }
}

/// Whether a run may generate another article on `today`.
pub fn may_generate(state: &RunState, blog: &BlogSettings, today: NaiveDate) -> bool {
    QuotaStatus::on(state, blog, today).allows()
}
