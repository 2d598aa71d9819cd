//! Gazette - automated blog publishing.
//!
//! Gazette turns a keyword list into published blog posts. Each run picks an
//! unused keyword, has a generative-text backend write a title, outline and
//! body, optionally re-hosts a featured image, and commits the post to a
//! GitHub repository as a front-matter markdown file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gazette::{GazetteConfig, Orchestrator, RunConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = GazetteConfig::load()?;
//!     let run = RunConfig::from_env();
//!
//!     let orchestrator = Orchestrator::from_config(&run, settings)?;
//!     let outcome = orchestrator.run(&run).await;
//!
//!     println!("{}", serde_json::to_string_pretty(&outcome.result)?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `gazette_error` - Error types
//! - `gazette_core` - Outline, article, front matter, run state and result
//! - `gazette_interface` - Backend traits
//! - `gazette_rate_limit` - Sliding-window rate limiter and TOML settings
//! - `gazette_models` - Gemini and Unsplash clients
//! - `gazette_github` - GitHub contents API client
//! - `gazette_pipeline` - Keyword selection, generation, publishing, orchestration
//!
//! This crate re-exports everything for convenience.

pub use gazette_core::*;
pub use gazette_error::*;
pub use gazette_github::*;
pub use gazette_interface::*;
pub use gazette_models::*;
pub use gazette_pipeline::*;
pub use gazette_rate_limit::*;
