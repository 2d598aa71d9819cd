//! Contents API request body.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of `PUT /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PutContentsRequest {
    /// Commit message
    message: String,
    /// File content, base64 encoded
    content: String,
    /// Target branch
    branch: String,
}

impl PutContentsRequest {
    /// Encode `content` for a commit on `branch`.
    pub fn new(message: impl Into<String>, content: &[u8], branch: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            content: STANDARD.encode(content),
            branch: branch.into(),
        }
    }
}
