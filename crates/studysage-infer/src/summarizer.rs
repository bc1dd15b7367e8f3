//! Summarizer backend trait and response decoding.

use serde_json::Value;
use studysage_core::Result;

/// Generation parameters sent to summarization models.
pub const MAX_SUMMARY_LENGTH: usize = 200;
pub const MIN_SUMMARY_LENGTH: usize = 40;

/// A learned summarization model.
///
/// Implementations report any failure (transport, bad output, empty text)
/// as `Error::ModelUnavailable`; callers treat that as "use the fallback".
pub trait SummarizerBackend: Send + Sync {
    /// Summarize already length-bounded text.
    fn summarize(&self, text: &str) -> Result<String>;

    /// Human-readable backend name for logs.
    fn name(&self) -> &str;
}

/// Pull the summary out of a model response.
///
/// Accepts `[{"summary_text": ..}]`, `[{"generated_text": ..}]` or the same
/// objects unwrapped. `summary_text` wins when both are present. Blank text
/// counts as no output.
pub fn summary_from_response(response: &Value) -> Option<String> {
    let first = match response {
        Value::Array(items) => items.first()?,
        other => other,
    };

    ["summary_text", "generated_text"]
        .iter()
        .find_map(|key| first.get(key).and_then(|v| v.as_str()))
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
