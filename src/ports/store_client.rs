//! Store server port definition.

use crate::domain::{
    AppError, Archive, DiffOutcome, FileEntry, OctalPermissionCode, PermissionUpdate, RenameRequest,
    StorePath, SystemStats,
};

/// File to add to the store through the upload form.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Name sent as the multipart file name.
    pub file_name: String,
    /// Raw file contents.
    pub contents: Vec<u8>,
    /// Group the file is assigned to (may be empty).
    pub group: String,
    /// Octal code computed from the permission checkboxes.
    pub permissions: OctalPermissionCode,
    /// Destination directory.
    pub path: StorePath,
}

/// Server acknowledgement of an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    /// Name the server stored the file under.
    pub filename: String,
    pub message: Option<String>,
    pub owner: Option<String>,
    pub size: Option<u64>,
}

/// Bulk deletion of entries in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub files: Vec<String>,
    pub path: StorePath,
}

/// New directory inside the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFolderRequest {
    pub name: String,
    pub permissions: OctalPermissionCode,
    pub path: StorePath,
}

/// Port for the store's HTTP endpoints.
pub trait StoreClient {
    /// Entries of one directory, newest upload first.
    fn list_files(&self, path: &StorePath) -> Result<Vec<FileEntry>, AppError>;

    /// Upload a file with its group and permission code.
    fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, AppError>;

    /// Change permissions (and group) of an existing entry.
    fn update_permissions(&self, update: &PermissionUpdate) -> Result<(), AppError>;

    /// Rename an existing entry.
    fn rename(&self, request: &RenameRequest) -> Result<(), AppError>;

    /// Delete several entries of one directory.
    fn delete_multiple(&self, request: &DeleteRequest) -> Result<(), AppError>;

    /// Create a directory.
    fn create_folder(&self, request: &CreateFolderRequest) -> Result<(), AppError>;

    /// Create a group.
    fn add_group(&self, group: &str) -> Result<(), AppError>;

    /// Delete a group.
    fn remove_group(&self, group: &str) -> Result<(), AppError>;

    /// List archives, oldest first.
    fn list_archives(&self) -> Result<Vec<Archive>, AppError>;

    /// Compare an archive with the current tree.
    fn diff(&self, archive_id: &str) -> Result<DiffOutcome, AppError>;

    /// Restore the tree to an archive. Returns the server's message.
    fn restore(&self, archive_id: &str) -> Result<String, AppError>;

    /// Fetch the raw contents of a file.
    fn download(&self, file_id: &str) -> Result<Vec<u8>, AppError>;

    /// Current dashboard figures.
    fn system_stats(&self) -> Result<SystemStats, AppError>;
}
