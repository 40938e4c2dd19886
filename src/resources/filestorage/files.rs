use crate::domain::model::{Endpoint, HttpMethod};
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::endpoints;
use crate::resources::filestorage::drives::Drive;
use crate::resources::filestorage::folders::Folder;
use crate::resources::filestorage::Permission;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/filestorage/v1/files";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub file_url: Option<String>,
    pub file_thumbnail_url: Option<String>,
    pub size: Option<i64>,
    pub mime_type: Option<String>,
    pub description: Option<String>,
    pub folder: Option<Expandable<Folder>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub permissions: Vec<Permission>,
    pub drive: Option<Expandable<Drive>>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileExpand {
    Drive,
    Folder,
    Permissions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<FileExpand>,
    pub drive_id: Option<String>,
    pub folder_id: Option<String>,
    pub mime_type: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<FileExpand>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DownloadParams {
    pub mime_type: Option<String>,
}

pub fn list(params: &FileListParams) -> Result<Endpoint<Paginated<File>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &FileRetrieveParams) -> Result<Endpoint<File>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(model: &FileRequest, params: &WriteParams) -> Result<Endpoint<ModelResponse<File>>> {
    endpoints::create(PATH, model, params)
}

/// 下載檔案內容，回應不是 JSON，直接回傳原始位元組
pub fn download(id: &str, params: &DownloadParams) -> Result<Endpoint<Vec<u8>>> {
    Endpoint::bytes(
        HttpMethod::Get,
        format!("{}/download", endpoints::item_path(PATH, id)),
    )
    .with_query(params)
}

pub struct Files;

pub type FilesClient<'a, E> = ResourceClient<'a, E, Files>;

impl<'a, E: Executor> ResourceClient<'a, E, Files> {
    pub fn list(&self, params: &FileListParams) -> E::Output<'a, Paginated<File>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &FileRetrieveParams) -> E::Output<'a, File> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &FileRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<File>> {
        self.call(create(model, params))
    }

    pub fn download(&self, id: &str, params: &DownloadParams) -> E::Output<'a, Vec<u8>> {
        self.call(download(id, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ApiResponse;

    #[test]
    fn test_download_returns_raw_bytes() {
        let endpoint = download("file-1", &DownloadParams::default()).unwrap();
        assert_eq!(endpoint.request().path, "/api/filestorage/v1/files/file-1/download");
        assert!(endpoint.request().query.is_empty());

        let response = ApiResponse {
            status: 200,
            headers: Default::default(),
            body: vec![0x25, 0x50, 0x44, 0x46],
        };
        assert_eq!(endpoint.decode(&response).unwrap(), b"%PDF".to_vec());
    }
}
