//! Title, outline and body generation.

use crate::{extract_json, parse_json};
use gazette_core::Outline;
use gazette_error::{GazetteResult, PipelineError, PipelineErrorKind};
use gazette_interface::{GenerationStage, TextGenerator, TextRequest};
use gazette_rate_limit::{ModelsConfig, RateLimiter};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{error, info, instrument, warn};

/// Output of the three text calls for one keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    /// Post title
    pub title: String,
    /// Parsed outline
    pub outline: Outline,
    /// Markdown body
    pub body: String,
}

/// Drives a text backend through title, outline and body.
///
/// Each call waits on the text limiter first. Backend errors are logged and
/// treated as an empty answer; an empty answer fails the stage. There is no
/// retry.
pub struct ContentGenerator<'a> {
    backend: &'a dyn TextGenerator,
    limiter: &'a RateLimiter,
    models: &'a ModelsConfig,
    answered: AtomicU32,
}

impl<'a> ContentGenerator<'a> {
    /// Creates a generator over `backend`.
    pub fn new(
        backend: &'a dyn TextGenerator,
        limiter: &'a RateLimiter,
        models: &'a ModelsConfig,
    ) -> Self {
        Self {
            backend,
            limiter,
            models,
            answered: AtomicU32::new(0),
        }
    }

    /// Calls the backend answered, whatever the content. These are the calls
    /// counted against the daily request ceiling.
    pub fn answered_calls(&self) -> u32 {
        self.answered.load(Ordering::Relaxed)
    }

    /// Run all three stages for `keyword`.
    ///
    /// # Errors
    ///
    /// [`PipelineErrorKind::GenerationFailed`] if the title or body comes back
    /// empty, [`PipelineErrorKind::OutlineParseFailed`] if the outline is not
    /// valid outline JSON.
    #[instrument(skip(self))]
    pub async fn generate(&self, keyword: &str) -> GazetteResult<Draft> {
        info!("Starting article generation");

        let title = self.title(keyword).await?;
        info!(title = %title, "Generated title");

        let outline = self.outline(keyword, &title).await?;
        let body = self.body(&outline, keyword, &title).await?;

        Ok(Draft {
            title,
            outline,
            body,
        })
    }

    /// Generate a title for `keyword`.
    ///
    /// # Errors
    ///
    /// Fails if the backend returns nothing.
    pub async fn title(&self, keyword: &str) -> GazetteResult<String> {
        let text = self
            .ask(GenerationStage::Title, &self.models.title, title_prompt(keyword))
            .await;
        non_empty(GenerationStage::Title, text)
    }

    /// Generate and parse the outline.
    ///
    /// # Errors
    ///
    /// Fails if the answer is empty or does not parse as an outline.
    pub async fn outline(&self, keyword: &str, title: &str) -> GazetteResult<Outline> {
        let text = self
            .ask(
                GenerationStage::Outline,
                &self.models.outline,
                outline_prompt(keyword, title),
            )
            .await;
        let text = non_empty(GenerationStage::Outline, text)?;

        extract_json(&text)
            .and_then(|json| parse_json::<Outline>(&json))
            .map_err(|e| {
                error!(error = %e, "Failed to parse outline JSON");
                PipelineError::new(PipelineErrorKind::OutlineParseFailed(e.to_string())).into()
            })
    }

    /// Generate the markdown body from the outline.
    ///
    /// # Errors
    ///
    /// Fails if the backend returns nothing.
    pub async fn body(
        &self,
        outline: &Outline,
        keyword: &str,
        title: &str,
    ) -> GazetteResult<String> {
        let prompt = body_prompt(outline, keyword, title)?;
        let text = self
            .ask(GenerationStage::Body, &self.models.body, prompt)
            .await;
        non_empty(GenerationStage::Body, text)
    }

    async fn ask(&self, stage: GenerationStage, model: &str, prompt: String) -> String {
        let request = match TextRequest::builder()
            .stage(stage)
            .model(model)
            .prompt(prompt)
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                error!(%stage, error = %e, "Could not build text request");
                return String::new();
            }
        };

        let _guard = self.limiter.acquire().await;
        match self.backend.generate(&request).await {
            Ok(text) => {
                self.answered.fetch_add(1, Ordering::Relaxed);
                text.trim().to_string()
            }
            Err(e) => {
                warn!(
                    %stage,
                    provider = self.backend.provider_name(),
                    error = %e,
                    "Text backend call failed"
                );
                String::new()
            }
        }
    }
}

fn non_empty(stage: GenerationStage, text: String) -> GazetteResult<String> {
    if text.is_empty() {
        error!(%stage, "Empty response from text backend");
        return Err(
            PipelineError::new(PipelineErrorKind::GenerationFailed(stage.to_string())).into(),
        );
    }
    Ok(text)
}

fn title_prompt(keyword: &str) -> String {
    format!(
        "Create an SEO-optimized, engaging title for \"{keyword}\".\n\
         Requirements: Under 60 characters, includes keyword, professional, click-worthy.\n\
         Return only the title."
    )
}

fn outline_prompt(keyword: &str, title: &str) -> String {
    format!(
        r#"Create a comprehensive article outline for "{title}" targeting "{keyword}".

Return JSON format:
{{
    "keyword_analysis": {{
        "search_intent": "informational/commercial/navigational",
        "target_audience": "target readers description",
        "main_topics": ["topic1", "topic2", "topic3"]
    }},
    "structure": {{
        "introduction": {{
            "hook": "engaging opening",
            "overview": "article coverage",
            "value": "reader benefits"
        }},
        "sections": [
            {{
                "heading": "H2 heading",
                "content_points": ["point1", "point2"],
                "needs_image": true
            }}
        ],
        "conclusion": {{
            "summary": "key takeaways",
            "action": "next steps"
        }}
    }},
    "seo": {{
        "meta_description": "compelling description",
        "keywords": ["primary", "secondary"],
        "estimated_length": 1500
    }}
}}

Return only valid JSON."#
    )
}

fn body_prompt(outline: &Outline, keyword: &str, title: &str) -> GazetteResult<String> {
    let structure = serde_json::to_string_pretty(&outline.structure).map_err(|e| {
        PipelineError::new(PipelineErrorKind::GenerationFailed(format!(
            "body prompt: {}",
            e
        )))
    })?;
    let audience = match outline.keyword_analysis.target_audience.trim() {
        "" => "general readers",
        audience => audience,
    };

    Ok(format!(
        "Write a comprehensive article titled \"{title}\" for the keyword \"{keyword}\".\n\
         \n\
         Follow this structure: {structure}\n\
         Target audience: {audience}\n\
         \n\
         Requirements:\n\
         - 1200-1500 words total\n\
         - Professional, engaging tone\n\
         - Use proper markdown formatting\n\
         - Include practical examples\n\
         - Natural keyword integration (3-5 times)\n\
         - Add bullet points and lists where appropriate\n\
         - Include clear H2 and H3 headings\n\
         \n\
         Write the complete article in markdown format."
    ))
}
