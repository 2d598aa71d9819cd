//! Generated article and its log representation.

use crate::{FrontMatter, Outline};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A finished article, ready to publish or already in the run log.
///
/// The serialized form is also the article log entry carried between runs,
/// so every field defaults when absent.
///
/// # Examples
///
/// ```
/// use gazette_core::Article;
///
/// let article = Article::builder()
///     .title("Modern Living Room Design Ideas")
///     .slug("modern-living-room-design-ideas")
///     .keyword("modern living room design")
///     .content("## Start here\n\nA calm room starts with light.")
///     .build()
///     .unwrap();
///
/// assert_eq!(*article.word_count(), 9);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(default)]
#[builder(setter(into))]
pub struct Article {
    /// Post title
    title: String,
    /// URL-safe slug derived from the title
    slug: String,
    /// Keyword the article was generated for
    keyword: String,
    /// Markdown body
    content: String,
    /// Metadata block
    #[serde(rename = "frontmatter")]
    #[builder(default)]
    front_matter: FrontMatter,
    /// When the article was generated
    #[serde(deserialize_with = "deserialize_created_at")]
    #[builder(default = "Utc::now()")]
    created_at: DateTime<Utc>,
    /// Whitespace-separated word count of the body
    #[builder(setter(skip), default = "self.count_words()")]
    word_count: usize,
    /// Outline the body was written from
    #[serde(deserialize_with = "deserialize_logged_outline")]
    #[builder(default)]
    outline: Outline,
}

impl Article {
    /// Creates a new article builder.
    pub fn builder() -> ArticleBuilder {
        ArticleBuilder::default()
    }

    /// Title, slug, keyword and word count for the run result.
    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            title: self.title.clone(),
            slug: self.slug.clone(),
            keyword: self.keyword.clone(),
            word_count: self.word_count,
        }
    }
}

impl ArticleBuilder {
    fn count_words(&self) -> usize {
        self.content
            .as_deref()
            .map(|c| c.split_whitespace().count())
            .unwrap_or_default()
    }
}

/// Short description of a published article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Post title
    pub title: String,
    /// URL slug
    pub slug: String,
    /// Source keyword
    pub keyword: String,
    /// Body word count
    pub word_count: usize,
}

/// Accepts RFC 3339 timestamps and naive ISO timestamps (read as UTC), so
/// logs written by older tooling still load.
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

/// Outlines in the log are informational. One that no longer matches the
/// schema (older tooling stored partial outlines) reads as empty instead of
/// failing the whole log.
fn deserialize_logged_outline<'de, D>(deserializer: D) -> Result<Outline, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).unwrap_or_default())
}
