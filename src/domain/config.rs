//! Client configuration domain models.

use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration loaded from `config.toml`, with defaults for anything omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
}

/// Connection settings for the store server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Root URL of the web application.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum attempts for retryable failures.
    pub max_retries: u32,
    /// Base delay of the exponential backoff.
    pub retry_delay_ms: u64,
    /// Value of an existing login session cookie, forwarded as-is.
    pub session_cookie: Option<String>,
}

/// Live dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub poll_interval_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout_secs: 30,
            max_retries: 3,
            retry_delay_ms: 500,
            session_cookie: None,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { poll_interval_ms: 2000 }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { server: ServerConfig::default(), dashboard: DashboardConfig::default() }
    }
}
