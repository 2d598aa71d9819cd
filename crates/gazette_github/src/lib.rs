//! GitHub contents API client for the Gazette publishing pipeline.
//!
//! Posts and images are committed one file at a time with
//! `PUT /repos/{owner}/{repo}/contents/{path}`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod dto;

pub use client::GitHubClient;
pub use dto::PutContentsRequest;
