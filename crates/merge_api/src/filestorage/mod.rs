//! File storage category (`filestorage/v1`).

mod client;
mod types;

pub use client::FileStorageClient;

pub use types::{
    Drive, File, FileExpand, FileRequest, Folder, FolderExpand, FolderRequest, Group,
    GroupExpand, Permission, PermissionType, Role, User,
};
