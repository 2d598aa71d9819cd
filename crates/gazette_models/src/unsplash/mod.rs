//! Unsplash image search backend.

mod client;
mod dto;

pub use client::UnsplashClient;
