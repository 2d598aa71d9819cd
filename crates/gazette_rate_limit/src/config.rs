//! Layered TOML settings.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`gazette.toml` compiled into the library)
//! 2. `~/.config/gazette/gazette.toml`
//! 3. `./gazette.toml`

use gazette_error::{ConfigError, GazetteError, GazetteResult};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Calls allowed per sliding window.
///
/// ```toml
/// [limits.text]
/// calls = 8
/// window_secs = 60
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LimitConfig {
    /// Maximum call starts per window; zero disables the limit
    pub calls: u32,
    /// Window length in seconds
    pub window_secs: u64,
}

impl LimitConfig {
    /// Limit of `calls` per `window_secs` seconds.
    pub fn new(calls: u32, window_secs: u64) -> Self {
        Self { calls, window_secs }
    }

    /// Window length as a duration.
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

/// One limit per backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Generative-text backend
    pub text: LimitConfig,
    /// Image-search backend
    pub image: LimitConfig,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            text: LimitConfig::new(8, 60),
            image: LimitConfig::new(3, 60),
        }
    }
}

/// Model names and generation parameters for the three text calls.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelsConfig {
    /// Model used for the title
    pub title: String,
    /// Model used for the outline
    pub outline: String,
    /// Model used for the body
    pub body: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            title: "gemini-1.5-flash".to_string(),
            outline: "gemini-1.5-pro".to_string(),
            body: "gemini-1.5-pro".to_string(),
            temperature: 0.7,
            top_p: 0.8,
            max_output_tokens: 4000,
        }
    }
}

/// Base URLs of the external APIs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointsConfig {
    /// Gemini REST API
    pub gemini: String,
    /// Unsplash API
    pub unsplash: String,
    /// GitHub REST API
    pub github: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            gemini: "https://generativelanguage.googleapis.com".to_string(),
            unsplash: "https://api.unsplash.com".to_string(),
            github: "https://api.github.com".to_string(),
        }
    }
}

/// Where and how posts land in the content repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublishingConfig {
    /// Directory for posts
    pub posts_dir: String,
    /// Directory for featured images
    pub image_dir: String,
    /// Layout written into front matter
    pub layout: String,
    /// Appended to the keyword when searching for images
    pub image_query_qualifier: String,
    /// Branch used when `GITHUB_BRANCH` is unset
    pub branch: String,
}

impl Default for PublishingConfig {
    fn default() -> Self {
        Self {
            posts_dir: "_posts".to_string(),
            image_dir: "assets/images".to_string(),
            layout: "post".to_string(),
            image_query_qualifier: "interior design".to_string(),
            branch: "main".to_string(),
        }
    }
}

/// Top-level Gazette settings.
///
/// # Example
///
/// ```no_run
/// use gazette_rate_limit::GazetteConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GazetteConfig::load()?;
/// println!("text calls per window: {}", config.limits.text.calls);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GazetteConfig {
    /// Backend rate limits
    pub limits: LimitsConfig,
    /// Text models
    pub models: ModelsConfig,
    /// API base URLs
    pub endpoints: EndpointsConfig,
    /// Repository layout
    pub publishing: PublishingConfig,
}

const DEFAULT_CONFIG: &str = include_str!("../../../gazette.toml");

impl GazetteConfig {
    /// Load bundled defaults overridden by `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> GazetteResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::build(builder).map_err(|e| {
            GazetteError::from(ConfigError::new(format!(
                "Failed to read configuration from {}: {}",
                path.as_ref().display(),
                e
            )))
        })
    }

    /// Load with precedence: current dir > home dir > bundled defaults.
    ///
    /// Missing user files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> GazetteResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/gazette/gazette.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("gazette").required(false));

        Self::build(builder).map_err(|e| {
            GazetteError::from(ConfigError::new(format!(
                "Failed to load configuration: {}",
                e
            )))
        })
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}
