//! Regex patterns shared by the generators.
//!
//! These sets are part of the observable behavior: changing a phrase
//! changes which sentences become definitions, steps or flashcards.

use once_cell::sync::Lazy;
use regex::Regex;

/// A defining clause: "X is a ...", "X refers to ...".
pub static DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(is a|is an|refers to|means|defined as)\b").expect("definition regex")
});

/// A sentence describing a use or application.
pub static APPLICATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(use|apply|application|used in)\b").expect("application regex")
});

/// A numbered list item ("3. Mix") or a line opening with "Step"/"Procedure".
pub static STEP_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:\d+\.|step|procedure)").expect("step regex"));

/// Any run of word characters.
pub static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word regex"));

/// Word-character runs of at least four characters.
pub static LONG_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w{4,}").expect("long word regex"));
