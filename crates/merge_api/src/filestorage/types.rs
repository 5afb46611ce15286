//! File storage common models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{Downloadable, Expandable, Writable, nullable_vec};

string_enum! {
    /// Who a permission is granted to.
    pub enum PermissionType {
        User => "USER",
        Group => "GROUP",
        Company => "COMPANY",
        Anyone => "ANYONE",
    }
}

string_enum! {
    pub enum Role {
        Read => "READ",
        Write => "WRITE",
        Owner => "OWNER",
    }
}

string_enum! {
    pub enum FileExpand {
        Drive => "drive",
        Folder => "folder",
        Permissions => "permissions",
    }
}

string_enum! {
    pub enum FolderExpand {
        Drive => "drive",
        ParentFolder => "parent_folder",
        Permissions => "permissions",
    }
}

string_enum! {
    pub enum GroupExpand {
        Users => "users",
    }
}

/// Access granted on a file or folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub user: Option<String>,
    pub group: Option<String>,
    #[serde(rename = "type")]
    pub permission_type: Option<PermissionType>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub roles: Vec<Role>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

common_model! {
    pub struct Drive {
        pub name: Option<String>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub drive_url: Option<String>,
    }
}

common_model! {
    pub struct File {
        pub name: Option<String>,
        pub file_url: Option<String>,
        pub file_thumbnail_url: Option<String>,
        /// Size in bytes.
        pub size: Option<u64>,
        pub mime_type: Option<String>,
        pub description: Option<String>,
        pub folder: Option<Expandable<Folder>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub permissions: Vec<Permission>,
        pub drive: Option<Expandable<Drive>>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub remote_updated_at: Option<DateTime<Utc>>,
    }
}

common_model! {
    pub struct Folder {
        pub name: Option<String>,
        pub folder_url: Option<String>,
        pub size: Option<u64>,
        pub description: Option<String>,
        pub parent_folder: Option<Expandable<Folder>>,
        pub drive: Option<Expandable<Drive>>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub permissions: Vec<Permission>,
        pub remote_created_at: Option<DateTime<Utc>>,
        pub remote_updated_at: Option<DateTime<Utc>>,
    }
}

common_model! {
    pub struct Group {
        pub name: Option<String>,
        #[serde(default, deserialize_with = "nullable_vec")]
        pub users: Vec<String>,
    }
}

common_model! {
    pub struct User {
        pub name: Option<String>,
        pub email_address: Option<String>,
        /// Whether this user owns the linked account's credentials.
        pub is_me: Option<bool>,
    }
}

impl_model!(Drive, File, Folder, Group, User);

request_model! {
    pub struct FileRequest {
        pub name: Option<String>,
        pub file_url: Option<String>,
        pub file_thumbnail_url: Option<String>,
        pub size: Option<u64>,
        pub mime_type: Option<String>,
        pub description: Option<String>,
        pub folder: Option<String>,
        pub drive: Option<String>,
        pub permissions: Option<Vec<Permission>>,
    }
}

request_model! {
    pub struct FolderRequest {
        pub name: Option<String>,
        pub folder_url: Option<String>,
        pub size: Option<u64>,
        pub description: Option<String>,
        pub parent_folder: Option<String>,
        pub drive: Option<String>,
        pub permissions: Option<Vec<Permission>>,
    }
}

impl Writable for File {
    type Request = FileRequest;
}

impl Downloadable for File {}

impl Writable for Folder {
    type Request = FolderRequest;
}
