//! Reading JSON out of model output.
//!
//! A reply must be one JSON object and nothing else. A markdown fence around
//! the whole reply is tolerated; any prose before or after the object is not.

use gazette_error::{BackendError, GazetteResult};
use serde::de::DeserializeOwned;

/// Return the JSON object that makes up the whole of `response`.
///
/// Surrounding whitespace is ignored, and so is a single ```` ```json ````
/// (or unlabeled) fence wrapping the entire reply.
///
/// # Errors
///
/// Returns an error if the reply is not a lone object, for example when the
/// model adds commentary around it.
///
/// # Examples
///
/// ```
/// use gazette_pipeline::extract_json;
///
/// let response = "```json\n{\"seo\": {}}\n```\n";
/// assert_eq!(extract_json(response).unwrap(), "{\"seo\": {}}");
///
/// assert!(extract_json("Here you go: {\"seo\": {}}").is_err());
/// ```
pub fn extract_json(response: &str) -> GazetteResult<String> {
    let trimmed = response.trim();
    let candidate = unfence(trimmed).unwrap_or(trimmed);

    if candidate.starts_with('{') && candidate.ends_with('}') {
        return Ok(candidate.to_string());
    }

    tracing::error!(
        response_length = response.len(),
        "Response is not a lone JSON object"
    );

    Err(BackendError::new(format!(
        "Response is not a lone JSON object (length: {})",
        response.len()
    ))
    .into())
}

/// Parse JSON into `T`, logging a short preview on failure.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON for `T`.
pub fn parse_json<T>(json_str: &str) -> GazetteResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();

        tracing::error!(error = %e, json_preview = %preview, "JSON parsing failed");

        BackendError::new(format!("Failed to parse JSON: {} (JSON: {}...)", e, preview)).into()
    })
}

/// Body of a fence that opens at the first byte and closes at the last.
fn unfence(response: &str) -> Option<&str> {
    let inner = response.strip_prefix("```")?.strip_suffix("```")?;
    // Skip the language tag, if any.
    let body = match inner.split_once('\n') {
        Some((_, body)) => body,
        None => inner,
    };
    Some(body.trim())
}
