//! Request types shared by backend implementations.

use serde::{Deserialize, Serialize};

/// Which of the three text calls a request belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationStage {
    /// Short title for the keyword
    Title,
    /// JSON outline
    Outline,
    /// Full markdown body
    Body,
}

/// A single prompt sent to a text backend.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct TextRequest {
    /// Pipeline stage issuing the request
    stage: GenerationStage,
    /// Model identifier, e.g. `gemini-1.5-pro`
    model: String,
    /// Prompt text
    prompt: String,
}

impl TextRequest {
    /// Creates a new request builder.
    pub fn builder() -> TextRequestBuilder {
        TextRequestBuilder::default()
    }
}
