//! Sentence segmentation shared by every generator.
//!
//! A sentence ends at `.`, `!` or `?` when the next character is whitespace;
//! the punctuation stays with the sentence and the whitespace run is dropped.
//! Abbreviations, decimals and quoted punctuation are not special-cased, so
//! "e.g. this" splits after "e.g.".

/// Split text into trimmed, non-empty sentences in document order.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let Some(&(boundary, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }

        push_trimmed(&mut sentences, &text[start..boundary]);

        while let Some(&(_, w)) = chars.peek() {
            if !w.is_whitespace() {
                break;
            }
            chars.next();
        }
        start = chars.peek().map(|&(i, _)| i).unwrap_or(text.len());
    }

    // Remainder
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Sentences strictly longer than `min_chars` characters.
pub fn sentences_longer_than(text: &str, min_chars: usize) -> Vec<&str> {
    split_sentences(text)
        .into_iter()
        .filter(|s| s.chars().count() > min_chars)
        .collect()
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece);
    }
}
