//! StudySage Infer — optional model-backed summarization.
//!
//! Provides the `SummarizerBackend` trait. When the `remote` feature is
//! enabled and an endpoint is configured, `RemoteSummarizer` calls a hosted
//! summarization model. Without one, `load_summarizer` returns `None` and
//! callers use the frequency-based fallback.

pub mod remote;
pub mod summarizer;

pub use summarizer::{summary_from_response, SummarizerBackend};

#[cfg(feature = "remote")]
pub use remote::RemoteSummarizer;

use std::sync::Arc;

use studysage_core::SummarizerSettings;

/// Load the configured summarizer backend, if any.
///
/// Never fails: a missing or unusable backend yields `None`.
pub fn load_summarizer(settings: &SummarizerSettings) -> Option<Arc<dyn SummarizerBackend>> {
    let Some(endpoint) = settings.endpoint.as_deref() else {
        tracing::info!("No summarizer model configured. Using frequency-based summaries.");
        return None;
    };

    #[cfg(feature = "remote")]
    {
        match RemoteSummarizer::new(endpoint, settings.api_token.clone(), settings.timeout()) {
            Ok(summarizer) => {
                tracing::info!("Using remote summarizer at {}", endpoint);
                Some(Arc::new(summarizer))
            }
            Err(e) => {
                tracing::warn!(
                    "Remote summarizer unavailable: {}. Falling back to frequency-based summaries.",
                    e
                );
                None
            }
        }
    }

    #[cfg(not(feature = "remote"))]
    {
        tracing::warn!(
            "Summarizer endpoint {} configured but the remote feature is disabled.",
            endpoint
        );
        None
    }
}
