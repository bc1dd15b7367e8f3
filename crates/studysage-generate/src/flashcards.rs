//! Flashcards from definitional sentences.

use serde::{Deserialize, Serialize};
use studysage_ingest::sentences_longer_than;

use crate::patterns::DEFINITION;
use crate::prefix_chars;

pub const DEFAULT_MAX_CARDS: usize = 8;

const MIN_SENTENCE_CHARS: usize = 15;
const PROMPT_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

pub fn build_flashcards(text: &str) -> Vec<Flashcard> {
    build_flashcards_with(text, DEFAULT_MAX_CARDS)
}

/// One card per qualifying sentence, for the first `max_cards` of them.
pub fn build_flashcards_with(text: &str, max_cards: usize) -> Vec<Flashcard> {
    sentences_longer_than(text, MIN_SENTENCE_CHARS)
        .into_iter()
        .take(max_cards)
        .map(card_for_sentence)
        .collect()
}

/// "X is a Y." becomes "What is X?" / "Y.", split at the first defining
/// phrase. Either side may be empty. Sentences without a defining phrase
/// become "Recall:" cards.
fn card_for_sentence(sentence: &str) -> Flashcard {
    let Some(phrase) = DEFINITION.find(sentence) else {
        return Flashcard {
            front: format!("Recall: {}...", prefix_chars(sentence, PROMPT_CHARS).trim()),
            back: sentence.to_string(),
        };
    };

    let term = sentence[..phrase.start()].trim();
    let meaning = sentence[phrase.end()..].trim();
    Flashcard {
        front: format!("What is {}?", term),
        back: meaning.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_card() {
        let cards = build_flashcards(
            "Photosynthesis is a process. Plants use sunlight to grow. It occurs in chloroplasts.",
        );
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].front, "What is Photosynthesis?");
        assert_eq!(cards[0].back, "process.");
        assert_eq!(cards[1].front, "Recall: Plants use sunlight to grow....");
        assert_eq!(cards[1].back, "Plants use sunlight to grow.");
    }

    #[test]
    fn test_splits_on_first_phrase_only() {
        let cards = build_flashcards("A byte is a unit that means eight bits.");
        assert_eq!(cards[0].front, "What is A byte?");
        assert_eq!(cards[0].back, "unit that means eight bits.");
    }

    #[test]
    fn test_leading_phrase_gives_empty_term() {
        let cards = build_flashcards("Is an odd way to open a sentence here.");
        assert_eq!(cards[0].front, "What is ?");
        assert_eq!(cards[0].back, "odd way to open a sentence here.");
    }

    #[test]
    fn test_trailing_phrase_gives_empty_meaning() {
        let cards = build_flashcards("Velocity is defined as");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "What is Velocity?");
        assert_eq!(cards[0].back, "");
    }

    #[test]
    fn test_recall_prompt_truncated() {
        let sentence = "Mitochondria generate most of the chemical energy needed to power biochemical reactions.";
        let cards = build_flashcards(sentence);
        assert_eq!(
            cards[0].front,
            "Recall: Mitochondria generate most of the chemical energy needed to..."
        );
        assert_eq!(cards[0].back, sentence);
    }

    #[test]
    fn test_short_sentences_skipped() {
        let cards = build_flashcards("Too short. Also short! This one is long enough to count.");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].back, "This one is long enough to count.");
    }

    #[test]
    fn test_card_count_bounds() {
        let text: String = (0..20)
            .map(|i| format!("Sentence number {} has enough characters.", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(build_flashcards(&text).len(), DEFAULT_MAX_CARDS);
        assert_eq!(build_flashcards_with(&text, 3).len(), 3);
        assert_eq!(build_flashcards_with(&text, 50).len(), 20);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_flashcards("").is_empty());
        assert!(build_flashcards("   ").is_empty());
    }
}
