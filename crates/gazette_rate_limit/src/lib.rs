//! Rate limiting and settings for the Gazette publishing pipeline.
//!
//! Outbound calls to the text and image backends each go through their own
//! [`RateLimiter`], a sliding-window log that admits at most `calls` starts
//! in any `window_secs` span and parks callers until the window frees up.
//!
//! Limits, model names, endpoints and publishing paths come from
//! [`GazetteConfig`], loaded from TOML with user overrides layered on top of
//! the bundled defaults.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod limiter;

pub use config::{
    EndpointsConfig, GazetteConfig, LimitConfig, LimitsConfig, ModelsConfig, PublishingConfig,
};
pub use limiter::{RateLimiter, RateLimiterGuard};
