//! Backend clients for the Gazette publishing pipeline.
//!
//! - [`GeminiClient`]: generative-text backend over the Gemini REST API,
//!   rotating through a pool of API keys on every call.
//! - [`UnsplashClient`]: image search and download over the Unsplash API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod unsplash;

pub use gemini::{
    GeminiClient, GeminiRequest, GeminiResponse, GenerationConfig, HarmCategory, SafetySetting, rotate,
};
pub use unsplash::UnsplashClient;
