//! Core data types for the Gazette publishing pipeline.
//!
//! This crate provides the data model shared by every stage of a run: the
//! outline the text backend plans, the article that gets published, the
//! front matter block written above the body, and the run state and result
//! handed back to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod front_matter;
mod outline;
mod result;
mod state;
mod telemetry;

pub use article::{Article, ArticleBuilder, ArticleBuilderError, ArticleSummary};
pub use front_matter::{FrontMatter, POST_DATE_FORMAT, SeoMeta, parse_post, render_post};
pub use outline::{Conclusion, Introduction, KeywordAnalysis, Outline, OutlineStructure, Section, SeoPlan};
pub use result::{RunOutcome, RunResult, RunStats};
pub use state::RunState;
pub use telemetry::{init_telemetry, shutdown_telemetry};
