pub mod drives;
pub mod files;
pub mod folders;

use crate::domain::ports::Executor;
use crate::resources::{Vertical, VerticalClient, VerticalKind};
use serde::{Deserialize, Serialize};

pub struct FileStorage;

impl VerticalKind for FileStorage {
    const VERTICAL: Vertical = Vertical::FileStorage;
}

pub type FileStorageClient<'a, E> = VerticalClient<'a, E, FileStorage>;

impl<'a, E: Executor> VerticalClient<'a, E, FileStorage> {
    pub fn drives(&self) -> drives::DrivesClient<'a, E> {
        self.resource()
    }

    pub fn files(&self) -> files::FilesClient<'a, E> {
        self.resource()
    }

    pub fn folders(&self) -> folders::FoldersClient<'a, E> {
        self.resource()
    }
}

/// 檔案與資料夾共用的存取權限
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub user: Option<String>,
    pub group: Option<String>,
    #[serde(rename = "type")]
    pub permission_type: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub roles: Vec<String>,
}
