//! Article assembly and publication.

use crate::{BlogSettings, Draft};
use chrono::{DateTime, NaiveDate, Utc};
use gazette_core::{Article, FrontMatter, POST_DATE_FORMAT, SeoMeta, render_post};
use gazette_error::{GazetteResult, PipelineError, PipelineErrorKind};
use gazette_interface::ContentRepository;
use gazette_rate_limit::PublishingConfig;
use tracing::{error, info, instrument};

/// Lowercase ASCII slug. Non-ASCII text is transliterated first, then
/// letters and digits are kept, apostrophes dropped and every other run of
/// characters collapsed to one `-`.
///
/// Returns an empty string when nothing sluggable remains.
///
/// ```
/// use gazette_pipeline::slugify;
///
/// assert_eq!(slugify("Modern Living Room: 12 Ideas!"), "modern-living-room-12-ideas");
/// assert_eq!(slugify("Don't Panic"), "dont-panic");
/// assert_eq!(slugify("Café Décor Inspiration"), "cafe-decor-inspiration");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(&text.replace('\u{2019}', "'"));
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch != '\'' {
            pending_dash = true;
        }
    }
    slug
}

/// Repository path of a post: `{posts_dir}/{YYYY-MM-DD}-{slug}.md`.
pub fn post_path(posts_dir: &str, date: NaiveDate, slug: &str) -> String {
    format!(
        "{}/{}-{}.md",
        posts_dir.trim_matches('/'),
        date.format("%Y-%m-%d"),
        slug
    )
}

/// Build the article and its front matter from a draft.
///
/// Tags are the outline's SEO keywords (or the keyword itself when there
/// are none) followed by the first two words of the keyword.
///
/// # Errors
///
/// Returns an error if the article cannot be built.
pub fn assemble_article(
    keyword: &str,
    draft: Draft,
    featured_image: String,
    blog: &BlogSettings,
    publishing: &PublishingConfig,
    now: DateTime<Utc>,
) -> GazetteResult<Article> {
    let seo = &draft.outline.seo;
    let description = match seo.meta_description.trim() {
        "" => draft.title.clone(),
        meta => meta.to_string(),
    };
    let seo_keywords = if seo.keywords.is_empty() {
        vec![keyword.to_string()]
    } else {
        seo.keywords.clone()
    };

    let mut tags = seo_keywords.clone();
    tags.extend(keyword.split_whitespace().take(2).map(str::to_string));

    let front_matter = FrontMatter {
        layout: publishing.layout.clone(),
        title: draft.title.clone(),
        description: description.clone(),
        date: now.format(POST_DATE_FORMAT).to_string(),
        categories: vec![blog.category().clone()],
        tags,
        author: blog.author().clone(),
        featured_image,
        seo: SeoMeta {
            title: draft.title.clone(),
            description,
            keywords: seo_keywords.join(", "),
        },
    };

    let slug = match slugify(&draft.title) {
        slug if !slug.is_empty() => slug,
        _ => slugify(keyword),
    };
    if slug.is_empty() {
        error!(title = %draft.title, keyword, "Neither title nor keyword yields a slug");
        return Err(PipelineError::new(PipelineErrorKind::GenerationFailed(
            "slug".to_string(),
        ))
        .into());
    }

    Article::builder()
        .slug(slug)
        .title(draft.title)
        .keyword(keyword)
        .content(draft.body)
        .front_matter(front_matter)
        .created_at(now)
        .outline(draft.outline)
        .build()
        .map_err(|e| {
            PipelineError::new(PipelineErrorKind::GenerationFailed(format!(
                "article assembly: {}",
                e
            )))
            .into()
        })
}

/// Commits finished posts to the content repository.
pub struct Publisher<'a> {
    repository: &'a dyn ContentRepository,
    publishing: &'a PublishingConfig,
}

impl<'a> Publisher<'a> {
    /// Creates a publisher.
    pub fn new(repository: &'a dyn ContentRepository, publishing: &'a PublishingConfig) -> Self {
        Self {
            repository,
            publishing,
        }
    }

    /// Render and commit `article`. No retry.
    ///
    /// # Errors
    ///
    /// [`PipelineErrorKind::PublishFailed`] if rendering fails or the
    /// repository rejects the write.
    #[instrument(skip(self, article), fields(slug = %article.slug()))]
    pub async fn publish(&self, article: &Article) -> GazetteResult<String> {
        let path = post_path(
            &self.publishing.posts_dir,
            article.created_at().date_naive(),
            article.slug(),
        );
        let post = render_post(article.front_matter(), article.content()).map_err(|e| {
            PipelineError::new(PipelineErrorKind::PublishFailed(e.to_string()))
        })?;

        self.repository
            .put_file(
                &path,
                post.as_bytes(),
                &format!("Add new article: {}", article.title()),
            )
            .await
            .map_err(|e| {
                error!(path = %path, error = %e, "Failed to save article");
                PipelineError::new(PipelineErrorKind::PublishFailed(e.to_string()))
            })?;

        info!(path = %path, location = %self.repository.location(), "Article saved");
        Ok(path)
    }
}
