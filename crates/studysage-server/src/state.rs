//! Shared application state.

use studysage_core::StudySageConfig;
use studysage_generate::Summarizer;

/// State shared by all route handlers. Read-only after start-up.
pub struct AppState {
    pub config: StudySageConfig,
    pub summarizer: Summarizer,
}

impl AppState {
    pub fn new(config: StudySageConfig, summarizer: Summarizer) -> Self {
        Self { config, summarizer }
    }

    /// State with the summarizer backend loaded from `config`.
    pub fn from_config(config: StudySageConfig) -> Self {
        let backend = studysage_infer::load_summarizer(&config.summarizer);
        Self::new(config, Summarizer::new(backend))
    }
}
