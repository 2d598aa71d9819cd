//! Article outline returned by the text backend.
//!
//! The outline is requested as JSON with a fixed schema. Every field is
//! required; a response missing any of them is rejected rather than patched.

use serde::{Deserialize, Serialize};

/// Structured plan for an article.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outline {
    /// Search intent and audience analysis
    pub keyword_analysis: KeywordAnalysis,
    /// Introduction, sections, conclusion
    pub structure: OutlineStructure,
    /// SEO metadata for the finished post
    pub seo: SeoPlan,
}

impl Outline {
    /// Sections the backend flagged as wanting an illustration.
    pub fn sections_needing_images(&self) -> impl Iterator<Item = &Section> {
        self.structure.sections.iter().filter(|s| s.needs_image)
    }

    /// Returns true if at least one section wants an image.
    pub fn wants_images(&self) -> bool {
        self.sections_needing_images().next().is_some()
    }
}

/// Who the article is for and why they are searching.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// informational / commercial / navigational
    pub search_intent: String,
    /// Description of the target readers
    pub target_audience: String,
    /// Topics the article should cover
    pub main_topics: Vec<String>,
}

/// Ordered body plan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutlineStructure {
    /// Opening block
    pub introduction: Introduction,
    /// Body sections in reading order
    pub sections: Vec<Section>,
    /// Closing block
    pub conclusion: Conclusion,
}

/// Opening block of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Introduction {
    /// Engaging opening
    pub hook: String,
    /// What the article covers
    pub overview: String,
    /// Reader benefit
    pub value: String,
}

/// One H2 section of the article.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub heading: String,
    /// Points the section should make
    pub content_points: Vec<String>,
    /// Whether the section calls for an image
    pub needs_image: bool,
}

/// Closing block of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Conclusion {
    /// Key takeaways
    pub summary: String,
    /// Suggested next step for the reader
    pub action: String,
}

/// SEO plan for the post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeoPlan {
    /// Meta description
    pub meta_description: String,
    /// Primary and secondary keywords
    pub keywords: Vec<String>,
    /// Target length in words
    pub estimated_length: u32,
}
