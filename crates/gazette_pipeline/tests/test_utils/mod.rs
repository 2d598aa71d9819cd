//! In-memory backends for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use gazette_error::{
    GazetteResult, ImageError, ImageErrorKind, RepositoryError, RepositoryErrorKind,
    TextBackendError, TextBackendErrorKind,
};
use gazette_interface::{
    ContentRepository, GenerationStage, ImageSearch, TextGenerator, TextRequest,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub const OUTLINE_JSON: &str = r#"{
  "keyword_analysis": {
    "search_intent": "informational",
    "target_audience": "homeowners refreshing a living room",
    "main_topics": ["layout", "lighting", "materials"]
  },
  "structure": {
    "introduction": {"hook": "A calm room", "overview": "What we cover", "value": "Practical ideas"},
    "sections": [
      {"heading": "Start with layout", "content_points": ["zones", "flow"], "needs_image": false},
      {"heading": "Layer the lighting", "content_points": ["ambient", "task"], "needs_image": true}
    ],
    "conclusion": {"summary": "Keep it simple", "action": "Pick one change this week"}
  },
  "seo": {
    "meta_description": "Fresh ideas for a calm, modern living room.",
    "keywords": ["modern living room", "living room decor"],
    "estimated_length": 1400
  }
}"#;

pub const BODY: &str = "## Start with layout\n\nA modern living room design starts with zones.\n\n## Layer the lighting\n\n- ambient\n- task";

/// Scripted response for one stage.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Fail,
}

/// Text backend that answers per stage and records every request.
pub struct MockTextGenerator {
    replies: HashMap<GenerationStage, Reply>,
    requests: Mutex<Vec<TextRequest>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Title, valid outline and body.
    pub fn happy(title: &str) -> Self {
        Self::new()
            .reply(GenerationStage::Title, Reply::Text(title.to_string()))
            .reply(GenerationStage::Outline, Reply::Text(OUTLINE_JSON.to_string()))
            .reply(GenerationStage::Body, Reply::Text(BODY.to_string()))
    }

    pub fn reply(mut self, stage: GenerationStage, reply: Reply) -> Self {
        self.replies.insert(stage, reply);
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn stages(&self) -> Vec<GenerationStage> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| *r.stage())
            .collect()
    }

    pub fn requests(&self) -> Vec<TextRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, req: &TextRequest) -> GazetteResult<String> {
        self.requests.lock().unwrap().push(req.clone());
        match self.replies.get(req.stage()) {
            Some(Reply::Text(text)) => Ok(text.clone()),
            Some(Reply::Fail) | None => Err(TextBackendError::new(TextBackendErrorKind::Http {
                status_code: 500,
                message: "mock failure".to_string(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Image backend returning fixed URLs and bytes.
pub struct MockImageSearch {
    configured: bool,
    urls: Vec<String>,
    fail_download: bool,
    queries: Mutex<Vec<String>>,
}

impl MockImageSearch {
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            urls: Vec::new(),
            fail_download: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_urls(urls: &[&str]) -> Self {
        Self {
            configured: true,
            urls: urls.iter().map(|u| u.to_string()).collect(),
            fail_download: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_download(mut self) -> Self {
        self.fail_download = true;
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSearch for MockImageSearch {
    async fn search(&self, query: &str, count: u32) -> GazetteResult<Vec<String>> {
        if !self.configured {
            return Err(ImageError::new(ImageErrorKind::NotConfigured).into());
        }
        self.queries.lock().unwrap().push(query.to_string());
        Ok(self.urls.iter().take(count as usize).cloned().collect())
    }

    async fn download(&self, _url: &str) -> GazetteResult<Vec<u8>> {
        if self.fail_download {
            return Err(ImageError::new(ImageErrorKind::Http {
                status_code: 404,
                message: "gone".to_string(),
            })
            .into());
        }
        Ok(vec![0xFF, 0xD8, 0xFF])
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

/// One recorded repository write.
#[derive(Debug, Clone)]
pub struct PutRecord {
    pub path: String,
    pub content: Vec<u8>,
    pub message: String,
}

impl PutRecord {
    pub fn text(&self) -> String {
        String::from_utf8(self.content.clone()).unwrap()
    }
}

/// Repository that accepts writes, or rejects those whose path matches.
pub struct MockRepository {
    reject: Option<(String, u16)>,
    puts: Mutex<Vec<PutRecord>>,
}

impl MockRepository {
    pub fn accepting() -> Self {
        Self {
            reject: None,
            puts: Mutex::new(Vec::new()),
        }
    }

    /// Reject writes whose path starts with `prefix` with `status`.
    pub fn rejecting(prefix: &str, status: u16) -> Self {
        Self {
            reject: Some((prefix.to_string(), status)),
            puts: Mutex::new(Vec::new()),
        }
    }

    pub fn puts(&self) -> Vec<PutRecord> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentRepository for MockRepository {
    async fn put_file(&self, path: &str, content: &[u8], message: &str) -> GazetteResult<()> {
        self.puts.lock().unwrap().push(PutRecord {
            path: path.to_string(),
            content: content.to_vec(),
            message: message.to_string(),
        });
        match &self.reject {
            Some((prefix, status)) if path.starts_with(prefix.as_str()) => {
                Err(RepositoryError::new(RepositoryErrorKind::Rejected {
                    status_code: *status,
                    message: "Invalid request".to_string(),
                })
                .into())
            }
            _ => Ok(()),
        }
    }

    fn location(&self) -> String {
        "mock/blog@main".to_string()
    }
}
