//! HTTP summarization backend.
//!
//! Talks to an inference endpoint that follows the Hugging Face pipeline
//! contract: `{"inputs": .., "parameters": {..}}` in, a list of
//! `summary_text` / `generated_text` objects out. Requires the `remote` feature.

#[cfg(feature = "remote")]
mod inner {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use serde_json::{json, Value};
    use studysage_core::{Error, Result};
    use tracing::debug;

    use crate::summarizer::{
        summary_from_response, SummarizerBackend, MAX_SUMMARY_LENGTH, MIN_SUMMARY_LENGTH,
    };

    /// Summarizer backed by a hosted model.
    pub struct RemoteSummarizer {
        client: Client,
        endpoint: String,
        api_token: Option<String>,
    }

    impl RemoteSummarizer {
        /// Build the HTTP client. Does not contact the endpoint.
        pub fn new(endpoint: &str, api_token: Option<String>, timeout: Duration) -> Result<Self> {
            let client = Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

            Ok(Self {
                client,
                endpoint: endpoint.to_string(),
                api_token,
            })
        }
    }

    impl SummarizerBackend for RemoteSummarizer {
        fn summarize(&self, text: &str) -> Result<String> {
            let body = json!({
                "inputs": text,
                "parameters": {
                    "max_length": MAX_SUMMARY_LENGTH,
                    "min_length": MIN_SUMMARY_LENGTH,
                    "do_sample": false,
                },
            });

            let mut request = self.client.post(&self.endpoint).json(&body);
            if let Some(token) = &self.api_token {
                request = request.bearer_auth(token);
            }

            let response = request
                .send()
                .map_err(|e| Error::ModelUnavailable(format!("Request failed: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::ModelUnavailable(format!("Endpoint returned {}", status)));
            }

            let value: Value = response
                .json()
                .map_err(|e| Error::ModelUnavailable(format!("Invalid response body: {}", e)))?;

            debug!("Summarizer response received from {}", self.endpoint);

            summary_from_response(&value)
                .ok_or_else(|| Error::ModelUnavailable("Response had no summary text".into()))
        }

        fn name(&self) -> &str {
            "remote"
        }
    }

}

#[cfg(feature = "remote")]
pub use inner::RemoteSummarizer;
