//! Error types for the Gazette publishing pipeline.
//!
//! This crate provides the foundation error types used throughout the Gazette workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use gazette_error::{GazetteResult, HttpError};
//!
//! fn fetch_data() -> GazetteResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! assert!(fetch_data().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod http;
mod image;
mod json;
mod pipeline;
mod repository;
mod text;

pub use backend::BackendError;
pub use config::ConfigError;
pub use error::{GazetteError, GazetteErrorKind, GazetteResult};
pub use http::HttpError;
pub use image::{ImageError, ImageErrorKind};
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use repository::{RepositoryError, RepositoryErrorKind};
pub use text::{TextBackendError, TextBackendErrorKind};
