//! Configuration read from the environment.

use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 10000;
const DEFAULT_SUMMARIZER_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_UPLOAD_MB: usize = 25;

/// Settings for the optional model-backed summarizer.
#[derive(Debug, Clone)]
pub struct SummarizerSettings {
    /// Inference endpoint. `None` disables the model path entirely.
    pub endpoint: Option<String>,
    /// Bearer token sent with each request, if set.
    pub api_token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl SummarizerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level StudySage configuration.
#[derive(Debug, Clone)]
pub struct StudySageConfig {
    /// Bind address.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
    /// Upper bound on an uploaded request body, in bytes.
    pub max_upload_bytes: usize,
    pub summarizer: SummarizerSettings,
}

impl Default for StudySageConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            summarizer: SummarizerSettings {
                endpoint: None,
                api_token: None,
                timeout_secs: DEFAULT_SUMMARIZER_TIMEOUT_SECS,
            },
        }
    }
}

impl StudySageConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = non_empty("HOST").unwrap_or(defaults.host);
        let port = non_empty("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let max_upload_bytes = non_empty("STUDYSAGE_MAX_UPLOAD_MB")
            .and_then(|mb| mb.parse::<usize>().ok())
            .map(|mb| mb * 1024 * 1024)
            .unwrap_or(defaults.max_upload_bytes);

        let timeout_secs = non_empty("STUDYSAGE_SUMMARIZER_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.summarizer.timeout_secs);

        Self {
            host,
            port,
            max_upload_bytes,
            summarizer: SummarizerSettings {
                endpoint: non_empty("STUDYSAGE_SUMMARIZER_URL"),
                api_token: non_empty("STUDYSAGE_SUMMARIZER_TOKEN"),
                timeout_secs,
            },
        }
    }

    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
