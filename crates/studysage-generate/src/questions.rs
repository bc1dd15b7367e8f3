//! Question bank: fill-in-the-blank MCQs, short and long prompts.
//!
//! Keyword choice, distractor sampling and option order are random. Callers
//! that need reproducible output pass their own RNG.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use studysage_ingest::sentences_longer_than;

use crate::patterns::{LONG_WORD, WORD};
use crate::prefix_chars;

const MIN_SENTENCE_CHARS: usize = 25;
const MAX_CANDIDATES: usize = 6;
const MIN_KEYWORD_CHARS: usize = 5;
const DISTRACTOR_COUNT: usize = 3;
const SHORT_PROMPT_CHARS: usize = 120;
const MIN_PARAGRAPH_CHARS: usize = 80;
const MAX_LONG_QUESTIONS: usize = 3;
const LONG_PROMPT_CHARS: usize = 250;

const BLANK: &str = "_____";
const PLACEHOLDER_OPTIONS: [&str; 4] = ["A", "B", "C", "D"];

/// Pads the option list when the document is too small for three
/// distractors. Each contains a space, so none can collide with a word.
const FILLER_OPTIONS: [&str; 3] = ["None of the above", "All of the above", "Not stated in the text"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoice {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub mcqs: Vec<MultipleChoice>,
    pub short_questions: Vec<String>,
    pub long_questions: Vec<String>,
}

pub fn build_questions(text: &str) -> QuestionSet {
    build_questions_with_rng(text, &mut rand::thread_rng())
}

pub fn build_questions_with_rng<R: Rng + ?Sized>(text: &str, rng: &mut R) -> QuestionSet {
    let candidates: Vec<&str> = sentences_longer_than(text, MIN_SENTENCE_CHARS)
        .into_iter()
        .take(MAX_CANDIDATES)
        .collect();
    let vocabulary = document_vocabulary(text);

    let mcqs = candidates
        .iter()
        .map(|sentence| multiple_choice(sentence, &vocabulary, rng))
        .collect();

    let short_questions = candidates
        .iter()
        .map(|sentence| format!("Explain: {}", prefix_chars(sentence, SHORT_PROMPT_CHARS).trim()))
        .collect();

    let long_questions = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| p.chars().count() > MIN_PARAGRAPH_CHARS)
        .take(MAX_LONG_QUESTIONS)
        .map(|p| format!("Discuss in detail: {}", prefix_chars(p, LONG_PROMPT_CHARS).trim()))
        .collect();

    QuestionSet {
        mcqs,
        short_questions,
        long_questions,
    }
}

/// Distinct words of four or more characters, in first-seen order.
fn document_vocabulary(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    LONG_WORD
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| seen.insert(*w))
        .collect()
}

/// Prefer words of five or more characters; any word if none qualify.
fn choose_keyword<'a, R: Rng + ?Sized>(sentence: &'a str, rng: &mut R) -> Option<&'a str> {
    let words: Vec<&str> = WORD.find_iter(sentence).map(|m| m.as_str()).collect();
    let long: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| w.chars().count() >= MIN_KEYWORD_CHARS)
        .collect();

    let pool = if long.is_empty() { &words } else { &long };
    pool.choose(rng).copied()
}

fn multiple_choice<R: Rng + ?Sized>(sentence: &str, vocabulary: &[&str], rng: &mut R) -> MultipleChoice {
    let Some(keyword) = choose_keyword(sentence, rng) else {
        return MultipleChoice {
            question: format!("{} ?", prefix_chars(sentence, SHORT_PROMPT_CHARS)),
            options: PLACEHOLDER_OPTIONS.iter().map(|o| o.to_string()).collect(),
            answer: PLACEHOLDER_OPTIONS[0].to_string(),
        };
    };

    let keyword_lower = keyword.to_lowercase();
    let mut distractors: Vec<&str> = vocabulary
        .iter()
        .copied()
        .filter(|w| w.to_lowercase() != keyword_lower)
        .collect();
    distractors.shuffle(rng);

    let mut options = Vec::with_capacity(DISTRACTOR_COUNT + 1);
    options.push(keyword.to_string());
    options.extend(distractors.into_iter().take(DISTRACTOR_COUNT).map(String::from));
    let missing = DISTRACTOR_COUNT + 1 - options.len();
    options.extend(FILLER_OPTIONS.iter().take(missing).map(|f| f.to_string()));
    options.shuffle(rng);

    MultipleChoice {
        question: sentence.replace(keyword, BLANK),
        options,
        answer: keyword.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BIOLOGY: &str = "Photosynthesis is a process. Plants use sunlight to grow. \
                           It occurs in chloroplasts. Chlorophyll absorbs light energy efficiently. \
                           Glucose stores chemical energy for later.";

    fn assert_well_formed(mcq: &MultipleChoice) {
        assert_eq!(mcq.options.len(), 4);
        assert!(mcq.options.contains(&mcq.answer));
        let distinct: HashSet<&String> = mcq.options.iter().collect();
        assert_eq!(distinct.len(), 4, "duplicate options: {:?}", mcq.options);
    }

    #[test]
    fn test_mcq_invariants_across_seeds() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = build_questions_with_rng(BIOLOGY, &mut rng);
            assert_eq!(set.mcqs.len(), 5);
            for mcq in &set.mcqs {
                assert_well_formed(mcq);
                assert!(mcq.question.contains(BLANK));
                assert!(!mcq.question.contains(mcq.answer.as_str()));
                assert!(mcq.answer.chars().count() >= MIN_KEYWORD_CHARS);
            }
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = build_questions_with_rng(BIOLOGY, &mut StdRng::seed_from_u64(42));
        let b = build_questions_with_rng(BIOLOGY, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_occurrences_blanked() {
        let sentence = "Entropy rises; entropy never falls and Entropy wins.";
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let mcq = multiple_choice(sentence, &["Entropy", "rises", "never"], &mut rng);
            if mcq.answer == "Entropy" {
                assert_eq!(mcq.question, "_____ rises; entropy never falls and _____ wins.");
                return;
            }
        }
        panic!("keyword Entropy was never chosen");
    }

    #[test]
    fn test_distractors_exclude_keyword_case_insensitively() {
        let mut rng = StdRng::seed_from_u64(3);
        let vocabulary = ["Quantum", "quantum", "QUANTUM", "field", "theory", "waves"];
        let mcq = multiple_choice("Quantum quantum quantum quantum.", &vocabulary, &mut rng);
        assert_eq!(mcq.answer.to_lowercase(), "quantum");
        assert_well_formed(&mcq);
        let quantum_like = mcq
            .options
            .iter()
            .filter(|o| o.to_lowercase() == "quantum")
            .count();
        assert_eq!(quantum_like, 1);
    }

    #[test]
    fn test_small_vocabulary_is_padded() {
        let text = "Aaaaaaaaaaaa bbb ccc ddd eee fff ggg.";
        let set = build_questions_with_rng(text, &mut StdRng::seed_from_u64(9));
        assert_eq!(set.mcqs.len(), 1);
        let mcq = &set.mcqs[0];
        assert_eq!(mcq.answer, "Aaaaaaaaaaaa");
        assert_well_formed(mcq);
        for filler in FILLER_OPTIONS {
            assert!(mcq.options.iter().any(|o| o == filler));
        }
    }

    #[test]
    fn test_short_keyword_fallback() {
        let text = "abc def ghi jkl mno pqr stu vwx.";
        let set = build_questions_with_rng(text, &mut StdRng::seed_from_u64(5));
        let mcq = &set.mcqs[0];
        assert_eq!(mcq.answer.chars().count(), 3);
        assert_well_formed(mcq);
    }

    #[test]
    fn test_wordless_sentence_placeholder() {
        let sentence = "-- -- -- -- -- -- -- -- -- --.";
        let set = build_questions_with_rng(sentence, &mut StdRng::seed_from_u64(0));
        assert_eq!(set.mcqs.len(), 1);
        assert_eq!(set.mcqs[0].question, format!("{} ?", sentence));
        assert_eq!(set.mcqs[0].options, vec!["A", "B", "C", "D"]);
        assert_eq!(set.mcqs[0].answer, "A");
    }

    #[test]
    fn test_short_questions() {
        let set = build_questions(BIOLOGY);
        assert_eq!(set.short_questions[0], "Explain: Photosynthesis is a process.");
        // "It occurs in chloroplasts." is 26 chars and still qualifies.
        assert_eq!(set.short_questions[2], "Explain: It occurs in chloroplasts.");

        let long_sentence = format!("{}.", "x".repeat(200));
        let set = build_questions(&long_sentence);
        assert_eq!(set.short_questions[0], format!("Explain: {}", "x".repeat(120)));
    }

    #[test]
    fn test_candidates_capped_at_six() {
        let text: String = (0..10)
            .map(|i| format!("Candidate sentence number {} is long enough.", i))
            .collect::<Vec<_>>()
            .join(" ");
        let set = build_questions(&text);
        assert_eq!(set.mcqs.len(), 6);
        assert_eq!(set.short_questions.len(), 6);
    }

    #[test]
    fn test_long_questions_from_paragraphs() {
        let para = |n: usize| format!("Paragraph {} {}", n, "lorem ipsum dolor ".repeat(6));
        let text = format!(
            "{}\n\nshort paragraph\n\n{}\n\n{}\n\n{}\n\n{}",
            para(1),
            para(2),
            "z".repeat(300),
            para(3),
            para(4)
        );
        let set = build_questions(&text);
        assert_eq!(set.long_questions.len(), 3);
        assert!(set.long_questions[0].starts_with("Discuss in detail: Paragraph 1 "));
        assert!(set.long_questions[1].starts_with("Discuss in detail: Paragraph 2 "));
        assert_eq!(
            set.long_questions[2],
            format!("Discuss in detail: {}", "z".repeat(250))
        );
    }

    #[test]
    fn test_empty_input() {
        let set = build_questions("");
        assert_eq!(set, QuestionSet::default());
    }
}
