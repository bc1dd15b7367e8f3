//! Extractive summarization with an optional model-backed first tier.
//!
//! The fallback scores each sentence by the normalized frequency of its
//! words, keeps the top scorers, then emits them in document order.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use studysage_infer::SummarizerBackend;
use studysage_ingest::split_sentences;
use tracing::{debug, warn};

use crate::patterns::WORD;
use crate::prefix_chars;

/// Returned for empty or whitespace-only input.
pub const NO_CONTENT: &str = "No content to summarize.";

pub const DEFAULT_MAX_SENTENCES: usize = 5;

/// Model input is capped to bound inference latency.
pub const MODEL_INPUT_CHARS: usize = 4000;

/// Summarizer with an optional model backend and an always-available fallback.
#[derive(Clone)]
pub struct Summarizer {
    backend: Option<Arc<dyn SummarizerBackend>>,
}

impl Summarizer {
    pub fn new(backend: Option<Arc<dyn SummarizerBackend>>) -> Self {
        Self { backend }
    }

    /// A summarizer that only uses frequency scoring.
    pub fn fallback_only() -> Self {
        Self { backend: None }
    }

    pub fn has_model(&self) -> bool {
        self.backend.is_some()
    }

    pub fn summarize(&self, text: &str) -> String {
        self.summarize_with(text, DEFAULT_MAX_SENTENCES)
    }

    /// Summarize `text`, keeping at most `max_sentences` in the fallback path.
    ///
    /// Only the model sees the truncated input; the fallback scores the
    /// whole text.
    pub fn summarize_with(&self, text: &str, max_sentences: usize) -> String {
        let text = text.trim();
        if text.is_empty() {
            return NO_CONTENT.to_string();
        }

        if let Some(backend) = &self.backend {
            match backend.summarize(prefix_chars(text, MODEL_INPUT_CHARS)) {
                Ok(summary) if !summary.trim().is_empty() => return summary.trim().to_string(),
                Ok(_) => warn!("{} summarizer returned no text, using fallback", backend.name()),
                Err(e) => warn!("{} summarizer failed: {}. Using fallback.", backend.name(), e),
            }
        }

        frequency_summary(text, max_sentences)
    }
}

/// Frequency-scored extractive summary in document order.
pub fn frequency_summary(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return String::new();
    }

    let frequencies = word_frequencies(text);
    if frequencies.is_empty() {
        debug!("No scorable words, using leading sentences");
        return sentences[..max_sentences.min(sentences.len())].join(" ");
    }

    let mut ranked: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| (i, sentence_score(sentence, &frequencies)))
        .collect();
    // Stable: equal scores keep document order.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut chosen: Vec<usize> = ranked
        .into_iter()
        .take(max_sentences)
        .map(|(i, _)| i)
        .collect();
    chosen.sort_unstable();

    let selected: Vec<&str> = if chosen.is_empty() {
        sentences.iter().take(max_sentences).copied().collect()
    } else {
        chosen.into_iter().map(|i| sentences[i]).collect()
    };
    selected.join(" ")
}

/// Lowercased word counts for words longer than two characters, scaled so
/// the most frequent word scores 1.0.
fn word_frequencies(text: &str) -> HashMap<String, f64> {
    let lower = text.to_lowercase();
    let mut counts: HashMap<String, f64> = HashMap::new();
    for word in WORD.find_iter(&lower) {
        let word = word.as_str();
        if word.chars().count() <= 2 {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0.0) += 1.0;
    }

    let max = counts.values().copied().fold(0.0, f64::max);
    if max > 0.0 {
        for value in counts.values_mut() {
            *value /= max;
        }
    }
    counts
}

fn sentence_score(sentence: &str, frequencies: &HashMap<String, f64>) -> f64 {
    let lower = sentence.to_lowercase();
    WORD.find_iter(&lower)
        .filter_map(|w| frequencies.get(w.as_str()))
        .sum()
}
