//! Client configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::config::DEFAULT_BASE_URL;
use crate::domain::{AppError, ClientConfig, DashboardConfig, ServerConfig};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "STORECTL_CONFIG";

/// `~/.config/storectl/config.toml`, when `$HOME` is known.
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(".config").join("storectl").join("config.toml"))
}

/// Load the client configuration.
///
/// An explicit path or `$STORECTL_CONFIG` must point at an existing file.
/// The per-user default location is optional; without it defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<ClientConfig, AppError> {
    let required = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let path = match required {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path
        }
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => path,
            None => {
                tracing::debug!("no config file found, using defaults");
                return Ok(ClientConfig::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Parse TOML config content into the domain model.
pub fn parse_config_content(content: &str) -> Result<ClientConfig, AppError> {
    let dto: ClientConfigDto = toml::from_str(content)?;
    dto.try_into()
}

// --- DTOs for TOML deserialization ---

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClientConfigDto {
    #[serde(default)]
    server: ServerConfigDto,
    #[serde(default)]
    dashboard: DashboardConfigDto,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerConfigDto {
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_timeout")]
    timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    retry_delay_ms: u64,
    #[serde(default)]
    session_cookie: Option<String>,
}

impl Default for ServerConfigDto {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            session_cookie: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DashboardConfigDto {
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,
}

impl Default for DashboardConfigDto {
    fn default() -> Self {
        Self { poll_interval_ms: default_poll_interval_ms() }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_poll_interval_ms() -> u64 {
    2000
}

impl TryFrom<ClientConfigDto> for ClientConfig {
    type Error = AppError;

    fn try_from(dto: ClientConfigDto) -> Result<Self, Self::Error> {
        if dto.dashboard.poll_interval_ms == 0 {
            return Err(AppError::ConfigInvalid("dashboard.poll_interval_ms must be positive".into()));
        }
        if dto.server.timeout_secs == 0 {
            return Err(AppError::ConfigInvalid("server.timeout_secs must be positive".into()));
        }

        Ok(ClientConfig {
            server: ServerConfig {
                base_url: parse_base_url(&dto.server.base_url)?,
                timeout_secs: dto.server.timeout_secs,
                max_retries: dto.server.max_retries,
                retry_delay_ms: dto.server.retry_delay_ms,
                session_cookie: dto.server.session_cookie.filter(|c| !c.trim().is_empty()),
            },
            dashboard: DashboardConfig { poll_interval_ms: dto.dashboard.poll_interval_ms },
        })
    }
}

// --- End DTOs ---

/// Validate a base URL given in config or on the command line.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::ConfigInvalid(format!("Invalid base URL '{}': {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::ConfigInvalid(format!(
            "Invalid base URL '{}': scheme must be http or https",
            raw
        )));
    }
    Ok(url)
}
