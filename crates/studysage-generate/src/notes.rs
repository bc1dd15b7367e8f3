//! Structured study notes.
//!
//! Sections appear in a fixed order. Topic Overview, Key Concepts and Key
//! Takeaways are always present for non-empty text; the rest only when
//! their pattern matched something.

use once_cell::sync::Lazy;
use regex::Regex;
use studysage_ingest::split_sentences;

use crate::patterns::{APPLICATION, DEFINITION, STEP_LINE};

/// Returned when the text is empty after cleanup.
pub const NO_CONTENT: &str = "No content for notes.";

const MAX_TOPIC_CHARS: usize = 200;
const MAX_KEY_CONCEPTS: usize = 8;
const MAX_DEFINITIONS: usize = 6;
const MAX_STEPS: usize = 8;
const MAX_APPLICATIONS: usize = 6;
const MAX_TAKEAWAYS: usize = 3;

static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s+\n").expect("blank line regex"));
static HORIZONTAL_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("space regex"));

/// Normalize line endings, collapse blank-line runs and horizontal whitespace.
fn clean_text(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = BLANK_LINE_RUN.replace_all(&text, "\n\n");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Line boundaries: `\n` and `\r` plus vertical tab, form feed, the file,
/// group and record separators, NEL and the Unicode line and paragraph
/// separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split into lines on every line boundary. `\r\n` yields an extra empty
/// piece, which callers filter out with the other blank lines.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_break)
}

/// Build a multi-section outline of the text.
pub fn build_notes(text: &str) -> String {
    let text = clean_text(text);
    if text.is_empty() {
        return NO_CONTENT.to_string();
    }

    let lines: Vec<&str> = split_lines(&text)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let sentences = split_sentences(&text);

    let mut topic = lines.first().copied().unwrap_or_default();
    if topic.chars().count() > MAX_TOPIC_CHARS {
        topic = sentences.first().copied().unwrap_or(topic);
    }

    let definitions: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|s| DEFINITION.is_match(s))
        .take(MAX_DEFINITIONS)
        .collect();

    let steps: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| STEP_LINE.is_match(l))
        .take(MAX_STEPS)
        .collect();

    let applications: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|s| APPLICATION.is_match(s))
        .take(MAX_APPLICATIONS)
        .collect();

    let takeaways = &sentences[sentences.len().saturating_sub(MAX_TAKEAWAYS)..];

    let mut out = Vec::new();
    out.push(format!("Topic Overview:\n{}\n", topic));

    out.push("Key Concepts:".to_string());
    push_numbered(&mut out, sentences.iter().take(MAX_KEY_CONCEPTS).copied());
    out.push(String::new());

    push_bulleted_section(&mut out, "Important Definitions:", &definitions);
    push_bulleted_section(&mut out, "Procedures / Steps:", &steps);
    push_bulleted_section(&mut out, "Applications / Use Cases:", &applications);

    out.push("Key Takeaways:".to_string());
    push_numbered(&mut out, takeaways.iter().copied());

    out.join("\n")
}

fn push_numbered<'a>(out: &mut Vec<String>, items: impl Iterator<Item = &'a str>) {
    for (i, item) in items.enumerate() {
        out.push(format!("{}. {}", i + 1, item));
    }
}

fn push_bulleted_section(out: &mut Vec<String>, header: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    out.push(header.to_string());
    for item in items {
        out.push(format!("- {}", item));
    }
    out.push(String::new());
}
