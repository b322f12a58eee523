//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! context creation and command execution.

use std::path::Path;

use crate::app::AppContext;
use crate::app::config::{load_config, parse_base_url};
use crate::services::HttpStoreClient;

pub use crate::app::commands::archive::ArchiveTarget;
pub use crate::app::commands::perms::PermissionFlags;
pub use crate::app::commands::upload::UploadOptions;
pub use crate::domain::AppError;

/// Build a context talking to the configured server.
///
/// `base_url` overrides the value from the config file.
pub fn connect(
    config_path: Option<&Path>,
    base_url: Option<&str>,
) -> Result<AppContext<HttpStoreClient>, AppError> {
    let mut config = load_config(config_path)?;
    if let Some(url) = base_url {
        config.server.base_url = parse_base_url(url)?;
    }

    let client = HttpStoreClient::new(&config.server)?;
    tracing::debug!(base_url = %client.base_url(), "connected context");
    Ok(AppContext::new(client, config))
}
