//! Backend trait definitions for the Gazette publishing pipeline.
//!
//! The pipeline talks to three external systems: a generative-text backend,
//! an image-search backend and a remote content repository. Each one is a
//! trait here so the orchestrator can run against real HTTP clients or
//! in-memory doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ContentRepository, ImageSearch, TextGenerator};
pub use types::{GenerationStage, TextRequest, TextRequestBuilder, TextRequestBuilderError};
