//! Gemini REST client.

use crate::gemini::{GeminiRequest, GeminiResponse, GenerationConfig, rotate};
use async_trait::async_trait;
use gazette_error::{GazetteResult, TextBackendError, TextBackendErrorKind};
use gazette_interface::{TextGenerator, TextRequest};
use gazette_rate_limit::{EndpointsConfig, ModelsConfig};
use reqwest::Client;
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument};

/// Text backend that sends each prompt to `models/{model}:generateContent`.
///
/// Every call takes the next key from the pool, round-robin. The rotation
/// counter advances whether or not the call succeeds and is shared between
/// clones.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_keys: Vec<String>,
    counter: Arc<Mutex<usize>>,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    /// Creates a client for the given key pool.
    pub fn new(api_keys: Vec<String>, models: &ModelsConfig, endpoints: &EndpointsConfig) -> Self {
        Self::with_base_url(api_keys, models, &endpoints.gemini)
    }

    /// Creates a client against a custom base URL (e.g. a mock server).
    pub fn with_base_url(
        api_keys: Vec<String>,
        models: &ModelsConfig,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_keys,
            counter: Arc::new(Mutex::new(0)),
            generation_config: GenerationConfig::from(models),
        }
    }

    /// Number of keys in the pool.
    pub fn key_count(&self) -> usize {
        self.api_keys.len()
    }

    /// Calls made so far, i.e. the rotation counter.
    pub fn calls_made(&self) -> usize {
        *self
            .counter
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn next_key(&self) -> GazetteResult<String> {
        let mut counter = self
            .counter
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let (key, next) = rotate(&self.api_keys, *counter)
            .ok_or_else(|| TextBackendError::new(TextBackendErrorKind::MissingCredentials))?;
        *counter = next;
        Ok(key.to_string())
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, req), fields(stage = %req.stage(), model = %req.model()))]
    async fn generate(&self, req: &TextRequest) -> GazetteResult<String> {
        let api_key = self.next_key()?;
        let body = GeminiRequest::prompt(req.prompt(), self.generation_config);

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            req.model()
        );
        debug!(url = %url, prompt_len = req.prompt().len(), "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                TextBackendError::new(TextBackendErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TextBackendError::new(TextBackendErrorKind::Http {
                status_code: status,
                message: error_text,
            })
            .into());
        }

        let parsed: GeminiResponse = response.json().await.map_err(|e| {
            TextBackendError::new(TextBackendErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let text = parsed.text();
        debug!(chars = text.len(), "Gemini response received");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
