//! Structured outcome of a run.

use crate::{ArticleSummary, RunState};
use serde::{Deserialize, Serialize};

/// What a run reports to its caller.
///
/// Serializes to
/// `{success, message, article: {title, slug, keyword, word_count} | null, stats}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Whether an article was published
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// The published article, if any
    pub article: Option<ArticleSummary>,
    /// Counters after the run
    pub stats: RunStats,
}

impl RunResult {
    /// A failed run with the given message.
    pub fn failure(message: impl Into<String>, stats: RunStats) -> Self {
        Self {
            success: false,
            message: message.into(),
            article: None,
            stats,
        }
    }

    /// A successful run that published `article`.
    pub fn published(article: ArticleSummary, stats: RunStats) -> Self {
        Self {
            success: true,
            message: format!("Successfully created: {}", article.title),
            article: Some(article),
            stats,
        }
    }
}

/// Counters reported with every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Backend calls counted today
    pub api_calls: u32,
    /// Articles in the log created today
    pub articles_today: usize,
}

/// Result plus the state to carry into the next run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Reported result
    pub result: RunResult,
    /// Updated run state
    pub state: RunState,
}
