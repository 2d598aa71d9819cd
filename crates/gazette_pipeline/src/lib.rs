//! The Gazette publication pipeline.
//!
//! One run picks an unused keyword, asks the text backend for a title, an
//! outline and a body, optionally re-hosts a featured image, and commits the
//! finished post to the content repository:
//!
//! ```text
//! Init -> CheckQuota -> SelectKeyword -> Generate -> SourceImage? -> Publish -> Done
//! ```
//!
//! Run state (counters, used keywords, article log) is passed in through
//! [`RunConfig`] and handed back in [`gazette_core::RunOutcome`]; nothing is
//! persisted here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod extraction;
mod generator;
mod images;
mod keyword;
mod orchestrator;
mod publisher;
mod quota;

pub use config::{
    API_KEY_FILE, BlogSettings, KEYWORD_FILE, RunConfig, RunConfigBuilder, RunConfigBuilderError,
};
pub use extraction::{extract_json, parse_json};
pub use generator::{ContentGenerator, Draft};
pub use images::ImageSourcer;
pub use keyword::{next_keyword, next_keyword_with, parse_keyword_file, parse_keyword_list};
pub use orchestrator::Orchestrator;
pub use publisher::{Publisher, assemble_article, post_path, slugify};
pub use quota::{QuotaStatus, may_generate};
