//! storectl: client and permission-bits toolkit for a self-hosted file store.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{ArchiveTarget, PermissionFlags, UploadOptions, connect};
pub use domain::{
    AppError, CheckboxPermissionSet, EntryContext, FileEntry, OctalPermissionCode,
    PermissionTriplet, checkboxes_to_octal, symbolic_to_octal,
};
pub use ports::StoreClient;
pub use services::{HttpStoreClient, PollerHandle, spawn_stats_poller};
