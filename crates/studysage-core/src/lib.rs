//! StudySage Core — error taxonomy and process configuration.

pub mod config;
pub mod error;

pub use config::{StudySageConfig, SummarizerSettings};
pub use error::{Error, Result};
