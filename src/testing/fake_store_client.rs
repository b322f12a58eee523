use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::{
    AppError, Archive, DiffOutcome, FileEntry, PermissionUpdate, RenameRequest, ServerLogs,
    StatValue, StorePath, SystemStats,
};
use crate::ports::{CreateFolderRequest, DeleteRequest, StoreClient, UploadRequest, UploadResponse};

/// A request observed by [`FakeStoreClient`].
#[derive(Debug, Clone)]
pub enum RecordedCall {
    ListFiles(String),
    Upload(UploadRequest),
    UpdatePermissions(PermissionUpdate),
    Rename(RenameRequest),
    Delete(DeleteRequest),
    CreateFolder(CreateFolderRequest),
    AddGroup(String),
    RemoveGroup(String),
    Diff(String),
    Restore(String),
    Download(String),
}

/// In-memory store client recording every mutating call.
#[derive(Clone, Default)]
pub struct FakeStoreClient {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub archives: Vec<Archive>,
    pub diffs: Vec<(String, String)>,
    pub files: Vec<(String, Vec<u8>)>,
    pub entries: Vec<FileEntry>,
    stats_requests: Arc<AtomicUsize>,
    fail_stats: bool,
}

impl FakeStoreClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_archives(mut self, ids: &[&str]) -> Self {
        self.archives = ids
            .iter()
            .map(|id| Archive { id: id.to_string(), archive: format!("archive-{id}"), time: None })
            .collect();
        self
    }

    pub fn with_diff(mut self, archive_id: &str, diff: &str) -> Self {
        self.diffs.push((archive_id.to_string(), diff.to_string()));
        self
    }

    pub fn with_file(mut self, file_id: &str, contents: &[u8]) -> Self {
        self.files.push((file_id.to_string(), contents.to_vec()));
        self
    }

    /// Add a listing row owned by `tester` in group `staff`.
    pub fn with_entry(mut self, id: &str, name: &str, permissions: &str) -> Self {
        self.entries.push(FileEntry {
            id: id.to_string(),
            name: name.to_string(),
            owner: Some("tester".into()),
            group: Some("staff".into()),
            size: Some(0),
            is_directory: false,
            permissions: permissions.to_string(),
        });
        self
    }

    pub fn failing_stats(mut self) -> Self {
        self.fail_stats = true;
        self
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stats_requests(&self) -> usize {
        self.stats_requests.load(Ordering::SeqCst)
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl StoreClient for FakeStoreClient {
    fn list_files(&self, path: &StorePath) -> Result<Vec<FileEntry>, AppError> {
        self.record(RecordedCall::ListFiles(path.as_str().to_string()));
        Ok(self.entries.clone())
    }

    fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, AppError> {
        self.record(RecordedCall::Upload(request.clone()));
        Ok(UploadResponse {
            filename: request.file_name.clone(),
            message: Some("File uploaded successfully".into()),
            owner: Some("tester".into()),
            size: Some(request.contents.len() as u64),
        })
    }

    fn update_permissions(&self, update: &PermissionUpdate) -> Result<(), AppError> {
        self.record(RecordedCall::UpdatePermissions(update.clone()));
        Ok(())
    }

    fn rename(&self, request: &RenameRequest) -> Result<(), AppError> {
        self.record(RecordedCall::Rename(request.clone()));
        Ok(())
    }

    fn delete_multiple(&self, request: &DeleteRequest) -> Result<(), AppError> {
        self.record(RecordedCall::Delete(request.clone()));
        Ok(())
    }

    fn create_folder(&self, request: &CreateFolderRequest) -> Result<(), AppError> {
        self.record(RecordedCall::CreateFolder(request.clone()));
        Ok(())
    }

    fn add_group(&self, group: &str) -> Result<(), AppError> {
        self.record(RecordedCall::AddGroup(group.to_string()));
        Ok(())
    }

    fn remove_group(&self, group: &str) -> Result<(), AppError> {
        self.record(RecordedCall::RemoveGroup(group.to_string()));
        Ok(())
    }

    fn list_archives(&self) -> Result<Vec<Archive>, AppError> {
        Ok(self.archives.clone())
    }

    fn diff(&self, archive_id: &str) -> Result<DiffOutcome, AppError> {
        self.record(RecordedCall::Diff(archive_id.to_string()));
        let diff = self.diffs.iter().find(|(id, _)| id == archive_id).map(|(_, d)| d.clone());
        Ok(DiffOutcome::from_diff(diff))
    }

    fn restore(&self, archive_id: &str) -> Result<String, AppError> {
        self.record(RecordedCall::Restore(archive_id.to_string()));
        Ok("Archive restored successfully".into())
    }

    fn download(&self, file_id: &str) -> Result<Vec<u8>, AppError> {
        self.record(RecordedCall::Download(file_id.to_string()));
        self.files
            .iter()
            .find(|(id, _)| id == file_id)
            .map(|(_, contents)| contents.clone())
            .ok_or_else(|| AppError::Api { status: 404, message: "File not found".into() })
    }

    fn system_stats(&self) -> Result<SystemStats, AppError> {
        self.stats_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_stats {
            return Err(AppError::Server(503));
        }
        Ok(SystemStats {
            cpu: StatValue::Number(10.0),
            total: StatValue::Text("100G".into()),
            used: StatValue::Text("25G".into()),
            free: StatValue::Text("75G".into()),
            percent: StatValue::Number(25.0),
            logs: ServerLogs { auth: vec!["::INFO::login".into()], store: Vec::new() },
        })
    }
}
