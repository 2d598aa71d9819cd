//! Publication pipeline error taxonomy.

/// Conditions that end (or, for images, degrade) a publication run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Credentials or repository target are missing; nothing was attempted
    #[display("Configuration missing: {}", _0)]
    ConfigMissing(String),
    /// A daily ceiling was reached before the run started
    #[display("Daily quota exceeded: {}", _0)]
    QuotaExceeded(String),
    /// The keyword source is empty
    #[display("No keywords available")]
    NoKeywords,
    /// A text generation step returned nothing usable
    #[display("Generation failed at {}", _0)]
    GenerationFailed(String),
    /// The outline response was not valid outline JSON
    #[display("Outline parse failed: {}", _0)]
    OutlineParseFailed(String),
    /// Featured image could not be found or re-hosted (non-fatal)
    #[display("Image sourcing failed: {}", _0)]
    ImageSourcingFailed(String),
    /// The repository write was rejected or never reached the remote
    #[display("Publish failed: {}", _0)]
    PublishFailed(String),
}

/// Pipeline error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The kind of error that occurred
    pub kind: PipelineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
