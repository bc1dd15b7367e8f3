//! StudySage Generate — heuristic study aids derived from document text.
//!
//! Every generator is a stateless pass over a string and returns a
//! well-formed (possibly empty) value for empty input:
//! - `summary`: frequency-scored extractive summary, optionally model-backed
//! - `notes`: sectioned outline built from pattern matches
//! - `flashcards`: front/back pairs from definitional sentences
//! - `questions`: multiple-choice, short-answer and long-answer prompts

pub mod flashcards;
pub mod notes;
pub mod patterns;
pub mod questions;
pub mod summary;

pub use flashcards::{build_flashcards, build_flashcards_with, Flashcard};
pub use notes::build_notes;
pub use questions::{build_questions, build_questions_with_rng, MultipleChoice, QuestionSet};
pub use summary::{frequency_summary, Summarizer};

use serde::{Deserialize, Serialize};

/// Everything generated for one uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPack {
    pub summary: String,
    pub notes: String,
    pub flashcards: Vec<Flashcard>,
    pub questions: QuestionSet,
}

impl StudyPack {
    /// Run all four generators over the extracted text.
    pub fn build(text: &str, summarizer: &Summarizer) -> Self {
        let summary = summarizer.summarize(text);
        let notes = build_notes(text);
        let flashcards = build_flashcards(text);
        let questions = build_questions(text);

        tracing::debug!(
            "Study pack: summary={} chars, notes={} chars, flashcards={}, mcqs={}",
            summary.len(),
            notes.len(),
            flashcards.len(),
            questions.mcqs.len()
        );

        Self {
            summary,
            notes,
            flashcards,
            questions,
        }
    }
}

/// The first `max_chars` characters of `text`.
pub(crate) fn prefix_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
