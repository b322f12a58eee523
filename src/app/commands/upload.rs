use std::fs;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, ByteSize, CheckboxPermissionSet, StorePath, checkboxes_to_octal};
use crate::ports::{StoreClient, UploadRequest, UploadResponse};

/// Inputs of the upload form.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Local file to send.
    pub file: PathBuf,
    /// Target group; may be empty.
    pub group: String,
    /// Permission checkboxes.
    pub permissions: CheckboxPermissionSet,
    /// Destination directory in the store.
    pub path: String,
    /// Refuse files above this size instead of sending them.
    pub max_size: Option<ByteSize>,
}

/// Execute the upload command.
pub fn execute<C: StoreClient>(
    ctx: &AppContext<C>,
    options: &UploadOptions,
) -> Result<UploadResponse, AppError> {
    let file_name = options
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .ok_or(AppError::MissingInput("file to upload"))?;

    let contents = fs::read(&options.file)?;
    let size = ByteSize::from_bytes(contents.len() as u64);
    if let Some(limit) = options.max_size.filter(|limit| size > *limit) {
        return Err(AppError::TooLarge { size: size.to_string(), limit: limit.to_string() });
    }

    let request = UploadRequest {
        file_name,
        contents,
        group: options.group.trim().to_string(),
        permissions: checkboxes_to_octal(&options.permissions),
        path: StorePath::sanitize(&options.path),
    };

    ctx.client().upload(&request)
}
