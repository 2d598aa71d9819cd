//! Gemini generative-text backend.

mod client;
mod dto;
mod rotation;

pub use client::GeminiClient;
pub use dto::{GeminiRequest, GeminiResponse, GenerationConfig, HarmCategory, SafetySetting};
pub use rotation::rotate;
