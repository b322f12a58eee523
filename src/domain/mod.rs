pub mod archive;
pub mod config;
pub mod entry_context;
pub mod error;
pub mod file_entry;
pub mod log_line;
pub mod permissions;
pub mod selection;
pub mod size;
pub mod store_path;
pub mod system_stats;

pub use archive::{Archive, ArchiveSelector, DiffOutcome};
pub use config::{ClientConfig, DashboardConfig, ServerConfig};
pub use entry_context::{EntryContext, PermissionUpdate, RenameRequest};
pub use error::AppError;
pub use file_entry::FileEntry;
pub use log_line::{LogLine, LogSeverity};
pub use permissions::{
    CheckboxPermissionSet, OctalPermissionCode, Permission, PermissionTriplet, Principal,
    checkboxes_to_octal, symbolic_to_octal,
};
pub use selection::DeleteSelection;
pub use size::ByteSize;
pub use store_path::StorePath;
pub use system_stats::{ServerLogs, StatValue, SystemStats};
