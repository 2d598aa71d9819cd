//! State carried between runs.

use crate::Article;
use chrono::NaiveDate;
use gazette_error::{GazetteResult, JsonError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Counters, used keywords and the article log for one site.
///
/// Gazette never persists this itself. The caller hands the previous
/// snapshot in and receives the updated one back with the run result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunState {
    /// Every article published so far
    pub articles: Vec<Article>,
    /// Keywords already published
    pub used_keywords: BTreeSet<String>,
    /// Backend calls recorded on `requests_date`
    pub daily_requests: u32,
    /// Day the request counter belongs to (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_date: Option<NaiveDate>,
}

impl RunState {
    /// Parse a snapshot from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid snapshot.
    pub fn from_json(text: &str) -> GazetteResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| JsonError::new(format!("Failed to parse run state: {}", e)).into())
    }

    /// Serialize the snapshot as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> GazetteResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JsonError::new(format!("Failed to serialize run state: {}", e)).into())
    }

    /// Number of logged articles created on `date` (UTC).
    pub fn articles_on(&self, date: NaiveDate) -> usize {
        self.articles
            .iter()
            .filter(|a| a.created_at().date_naive() == date)
            .count()
    }

    /// Backend calls counted against `date`.
    ///
    /// A counter stamped with another day reads as zero. An unstamped counter
    /// is taken as belonging to `date`.
    pub fn requests_on(&self, date: NaiveDate) -> u32 {
        match self.requests_date {
            Some(stamped) if stamped != date => 0,
            _ => self.daily_requests,
        }
    }

    /// Add `count` backend calls to the counter for `date`, resetting it first
    /// if it belongs to another day.
    pub fn record_requests(&mut self, date: NaiveDate, count: u32) {
        self.daily_requests = self.requests_on(date).saturating_add(count);
        self.requests_date = Some(date);
    }

    /// Whether `keyword` has already been published.
    pub fn is_used(&self, keyword: &str) -> bool {
        self.used_keywords.contains(keyword)
    }

    /// Mark `keyword` as published.
    pub fn mark_used(&mut self, keyword: impl Into<String>) {
        self.used_keywords.insert(keyword.into());
    }

    /// Append a published article to the log and mark its keyword used.
    pub fn record_publication(&mut self, article: Article) {
        self.mark_used(article.keyword().clone());
        self.articles.push(article);
    }
}
