//! Per-run configuration read from the process environment.
//!
//! | variable | meaning |
//! |----------|---------|
//! | `GEMINI_API_KEYS` | comma-separated key pool; falls back to `apikey.txt` |
//! | `UNSPLASH_ACCESS_KEY` | image search key; images are skipped without it |
//! | `GITHUB_TOKEN`, `GITHUB_REPO`, `GITHUB_BRANCH` | content repository |
//! | `BLOG_CONFIG` | JSON [`BlogSettings`] |
//! | `ARTICLES_DATA` | JSON [`RunState`] from the previous run |
//! | `BLOG_KEYWORDS` | keyword list when `keyword.txt` is absent |

use crate::{parse_keyword_file, parse_keyword_list};
use gazette_core::RunState;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Key pool file, one key per line.
pub const API_KEY_FILE: &str = "apikey.txt";
/// Keyword file, one keyword per line.
pub const KEYWORD_FILE: &str = "keyword.txt";

/// Site defaults and daily ceilings from `BLOG_CONFIG`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct BlogSettings {
    /// Category written into every post
    category: String,
    /// Author written into every post
    author: String,
    /// Posts allowed per day
    max_daily_articles: usize,
    /// Text backend calls allowed per day
    max_daily_requests: u32,
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            category: "Interior Design".to_string(),
            author: "Admin".to_string(),
            max_daily_articles: 2,
            max_daily_requests: 50,
        }
    }
}

impl BlogSettings {
    /// Settings with the given ceilings and default category and author.
    pub fn with_limits(max_daily_articles: usize, max_daily_requests: u32) -> Self {
        Self {
            max_daily_articles,
            max_daily_requests,
            ..Self::default()
        }
    }
}

/// Immutable snapshot of everything one run needs from its environment.
#[derive(Debug, Clone, Default, derive_getters::Getters, derive_builder::Builder)]
#[builder(default, setter(into))]
pub struct RunConfig {
    /// Text backend key pool
    api_keys: Vec<String>,
    /// Image search key
    #[builder(setter(into, strip_option))]
    unsplash_access_key: Option<String>,
    /// Repository token
    #[builder(setter(into, strip_option))]
    github_token: Option<String>,
    /// Repository as `owner/name`
    #[builder(setter(into, strip_option))]
    github_repo: Option<String>,
    /// Branch override; settings decide when absent
    #[builder(setter(into, strip_option))]
    github_branch: Option<String>,
    /// Site defaults and ceilings
    blog: BlogSettings,
    /// Master keyword list
    keywords: Vec<String>,
    /// State from the previous run
    state: RunState,
}

impl RunConfig {
    /// Creates a new builder.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Read the process environment, looking for fallback files in the
    /// current directory.
    pub fn from_env() -> Self {
        Self::from_source(|name| std::env::var(name).ok(), Path::new("."))
    }

    /// Read configuration through `lookup`, looking for fallback files in
    /// `dir`.
    ///
    /// Malformed JSON values are logged and ignored.
    #[instrument(skip(lookup, dir), fields(dir = %dir.display()))]
    pub fn from_source<F>(lookup: F, dir: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_keys = load_api_keys(var("GEMINI_API_KEYS"), dir);
        let blog = var("BLOG_CONFIG")
            .and_then(|raw| parse_or_warn::<BlogSettings>("BLOG_CONFIG", &raw))
            .unwrap_or_default();
        let state = var("ARTICLES_DATA")
            .and_then(|raw| parse_or_warn::<RunState>("ARTICLES_DATA", &raw))
            .unwrap_or_default();
        let keywords = load_keywords(var("BLOG_KEYWORDS"), dir);

        let config = Self {
            api_keys,
            unsplash_access_key: var("UNSPLASH_ACCESS_KEY").map(|k| k.trim().to_string()),
            github_token: var("GITHUB_TOKEN").map(|t| t.trim().to_string()),
            github_repo: var("GITHUB_REPO").map(|r| r.trim().to_string()),
            github_branch: var("GITHUB_BRANCH").map(|b| b.trim().to_string()),
            blog,
            keywords,
            state,
        };

        info!(
            api_keys = config.api_keys.len(),
            keywords = config.keywords.len(),
            articles = config.state.articles.len(),
            "Environment loaded"
        );
        config
    }

    /// Whether both repository coordinates are present.
    pub fn has_repository(&self) -> bool {
        self.github_token.is_some() && self.github_repo.is_some()
    }
}

fn load_api_keys(from_env: Option<String>, dir: &Path) -> Vec<String> {
    let keys: Vec<String> = from_env
        .iter()
        .flat_map(|raw| raw.split(','))
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    if !keys.is_empty() {
        return keys;
    }

    let path = dir.join(API_KEY_FILE);
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            let keys: Vec<String> = text
                .lines()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect();
            info!(count = keys.len(), path = %path.display(), "Loaded API keys from file");
            keys
        }
        Err(_) => {
            debug!(path = %path.display(), "No API key file");
            Vec::new()
        }
    }
}

fn load_keywords(from_env: Option<String>, dir: &Path) -> Vec<String> {
    let path = dir.join(KEYWORD_FILE);
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            let keywords = parse_keyword_file(&text);
            if !keywords.is_empty() {
                info!(count = keywords.len(), path = %path.display(), "Loaded keywords from file");
                return keywords;
            }
        }
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
            warn!(error = %e, path = %path.display(), "Could not read keyword file");
        }
        Err(_) => {}
    }

    let keywords = from_env.map(|raw| parse_keyword_list(&raw)).unwrap_or_default();
    if keywords.is_empty() {
        warn!("No keywords found in keyword file or BLOG_KEYWORDS");
    }
    keywords
}

fn parse_or_warn<T: serde::de::DeserializeOwned>(name: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(variable = name, error = %e, "Ignoring malformed JSON");
            None
        }
    }
}
