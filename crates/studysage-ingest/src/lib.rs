//! StudySage Ingest — uploaded bytes to plain text, and text to sentences.

pub mod file;
pub mod sentences;

pub use file::{extract_document, extract_text, FileType};
pub use sentences::{sentences_longer_than, split_sentences};
