//! Post metadata block and the on-disk post format.
//!
//! A post is a YAML front matter block fenced by `---` lines, a blank line,
//! then the markdown body:
//!
//! ```text
//! ---
//! layout: post
//! title: Modern Living Room Design Ideas
//! ...
//! ---
//!
//! ## Body starts here
//! ```

use gazette_error::{GazetteResult, JsonError};
use serde::{Deserialize, Serialize};

/// `strftime` pattern for the `date` field (always UTC).
pub const POST_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S +0000";

const FENCE: &str = "---";

/// Metadata written above the body of every post.
///
/// Field order here is the order they appear in the published file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Site layout name
    pub layout: String,
    /// Post title
    pub title: String,
    /// Short description
    pub description: String,
    /// Publication date in [`POST_DATE_FORMAT`]
    pub date: String,
    /// Categories
    pub categories: Vec<String>,
    /// Tags
    pub tags: Vec<String>,
    /// Author display name
    pub author: String,
    /// Site-relative featured image path, empty when none
    pub featured_image: String,
    /// Search metadata
    pub seo: SeoMeta,
}

/// Nested SEO block of the front matter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeoMeta {
    /// SEO title
    pub title: String,
    /// SEO description
    pub description: String,
    /// Keywords joined with `", "`
    pub keywords: String,
}

/// Render a full post: fenced front matter, blank line, body.
///
/// # Errors
///
/// Returns an error if the front matter cannot be serialized.
pub fn render_post(front_matter: &FrontMatter, body: &str) -> GazetteResult<String> {
    let yaml = serde_yaml::to_string(front_matter)
        .map_err(|e| JsonError::new(format!("Failed to serialize front matter: {}", e)))?;
    Ok(format!(
        "{FENCE}\n{}\n{FENCE}\n\n{}\n",
        yaml.trim_end(),
        body.trim_end()
    ))
}

/// Split a rendered post back into its front matter and body.
///
/// # Errors
///
/// Returns an error if the text does not open with a fenced block or the
/// block is not valid front matter.
pub fn parse_post(text: &str) -> GazetteResult<(FrontMatter, String)> {
    let rest = text
        .strip_prefix(FENCE)
        .and_then(|r| r.strip_prefix('\n'))
        .ok_or_else(|| JsonError::new("Post does not start with a front matter fence"))?;

    let (yaml, body) = match rest.find("\n---\n") {
        Some(end) => (&rest[..end], &rest[end + 5..]),
        None => rest
            .strip_suffix("\n---")
            .map(|yaml| (yaml, ""))
            .ok_or_else(|| JsonError::new("Front matter block is not closed"))?,
    };

    let front_matter: FrontMatter = serde_yaml::from_str(yaml)
        .map_err(|e| JsonError::new(format!("Failed to parse front matter: {}", e)))?;

    Ok((front_matter, body.trim_start_matches('\n').to_string()))
}
