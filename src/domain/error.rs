use std::io;

use thiserror::Error;

/// Library-wide error type for storectl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file exists but holds invalid values.
    #[error("Invalid config: {0}")]
    ConfigInvalid(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// User-entered octal permission code is malformed.
    #[error("Invalid permission code '{0}': expected three digits between 0 and 7")]
    InvalidPermissionCode(String),

    /// Size string could not be parsed.
    #[error("Invalid size format: {0}")]
    InvalidSize(String),

    /// File is larger than the allowed upload size.
    #[error("File is {size}, over the {limit} limit")]
    TooLarge { size: String, limit: String },

    /// A required user input was left empty.
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    /// No listing entry has the given id or name.
    #[error("No entry '{entry}' in {path}")]
    EntryNotFound { entry: String, path: String },

    /// No archive matches the requested selection.
    #[error("Archive not found: {0}")]
    ArchiveNotFound(String),

    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status.
    #[error("Server rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    /// Server asked us to slow down.
    #[error("Rate limited (429)")]
    RateLimited,

    /// Server failed internally.
    #[error("Server error ({0})")]
    Server(u16),

    /// Response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
}

impl AppError {
    /// Whether the failed request is worth sending again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::RateLimited | AppError::Server(_))
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ConfigInvalid(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidPermissionCode(_)
            | AppError::InvalidSize(_)
            | AppError::TooLarge { .. }
            | AppError::MissingInput(_) => io::ErrorKind::InvalidInput,
            AppError::Api { status: 404, .. }
            | AppError::ArchiveNotFound(_)
            | AppError::EntryNotFound { .. } => io::ErrorKind::NotFound,
            AppError::Api { status: 300..=399 | 401 | 403, .. } => io::ErrorKind::PermissionDenied,
            AppError::Api { .. } | AppError::InvalidResponse(_) => io::ErrorKind::InvalidData,
            AppError::Http(_) => io::ErrorKind::ConnectionRefused,
            AppError::RateLimited | AppError::Server(_) => io::ErrorKind::Other,
        }
    }
}
