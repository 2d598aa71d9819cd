//! Gemini REST request and response bodies.

use derive_getters::Getters;
use gazette_rate_limit::ModelsConfig;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Content categories the backend filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum HarmCategory {
    /// Harassment
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    /// Hate speech
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    /// Sexually explicit content
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    /// Dangerous content
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

/// Blocking threshold for one harm category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    /// Category filtered
    pub category: HarmCategory,
    /// Threshold name, e.g. `BLOCK_MEDIUM_AND_ABOVE`
    pub threshold: String,
}

impl SafetySetting {
    /// Every category blocked at medium probability and above.
    pub fn block_medium_and_above() -> Vec<Self> {
        HarmCategory::iter()
            .map(|category| Self {
                category,
                threshold: "BLOCK_MEDIUM_AND_ABOVE".to_string(),
            })
            .collect()
    }
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling cutoff
    top_p: f32,
    /// Upper bound on generated tokens
    max_output_tokens: u32,
}

impl From<&ModelsConfig> for GenerationConfig {
    fn from(models: &ModelsConfig) -> Self {
        Self {
            temperature: models.temperature,
            top_p: models.top_p,
            max_output_tokens: models.max_output_tokens,
        }
    }
}

/// Text part of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Part {
    /// Text of the part
    #[serde(default)]
    pub text: String,
}

/// One turn of content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Content {
    /// Parts of the turn
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Prompt turns
    contents: Vec<Content>,
    /// Sampling parameters
    generation_config: GenerationConfig,
    /// Safety filters
    safety_settings: Vec<SafetySetting>,
}

impl GeminiRequest {
    /// Single-turn request for `prompt`.
    pub fn prompt(prompt: &str, generation_config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config,
            safety_settings: SafetySetting::block_medium_and_above(),
        }
    }
}

/// One candidate answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Candidate {
    /// Candidate content; absent when the answer was blocked
    #[serde(default)]
    pub content: Content,
}

/// `generateContent` response body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GeminiResponse {
    /// Candidate answers, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GeminiResponse {
    /// Text of the first candidate, parts concatenated and trimmed.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}
