//! Directory listing and entry lookup.

use crate::app::AppContext;
use crate::domain::{AppError, EntryContext, FileEntry, StorePath};
use crate::ports::StoreClient;

/// List the entries of a directory.
pub fn execute<C: StoreClient>(ctx: &AppContext<C>, path: &str) -> Result<Vec<FileEntry>, AppError> {
    ctx.client().list_files(&StorePath::sanitize(path))
}

/// Find the entry named by `key` (an id or a name) in `path` and build the
/// context a rename or permission change starts from.
///
/// An id match wins over a name match.
pub fn resolve<C: StoreClient>(
    ctx: &AppContext<C>,
    path: &str,
    key: &str,
) -> Result<EntryContext, AppError> {
    let path = StorePath::sanitize(path);
    let key = key.trim();
    let entries = ctx.client().list_files(&path)?;

    entries
        .iter()
        .find(|entry| entry.id == key)
        .or_else(|| entries.iter().find(|entry| entry.matches(key)))
        .map(FileEntry::to_context)
        .ok_or_else(|| AppError::EntryNotFound { entry: key.to_string(), path: path.to_string() })
}
