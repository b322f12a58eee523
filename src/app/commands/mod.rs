pub mod archive;
pub mod chmod;
pub mod delete;
pub mod download;
pub mod folder;
pub mod group;
pub mod list;
pub mod perms;
pub mod rename;
pub mod stats;
pub mod upload;
