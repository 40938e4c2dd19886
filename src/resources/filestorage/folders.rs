use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::endpoints;
use crate::resources::filestorage::drives::Drive;
use crate::resources::filestorage::Permission;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/filestorage/v1/folders";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub folder_url: Option<String>,
    pub size: Option<i64>,
    pub description: Option<String>,
    pub parent_folder: Option<Expandable<Folder>>,
    pub drive: Option<Expandable<Drive>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub permissions: Vec<Permission>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FolderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderExpand {
    Drive,
    ParentFolder,
    Permissions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FolderListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<FolderExpand>,
    pub drive_id: Option<String>,
    pub name: Option<String>,
    pub parent_folder_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FolderRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<FolderExpand>,
}

pub fn list(params: &FolderListParams) -> Result<Endpoint<Paginated<Folder>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &FolderRetrieveParams) -> Result<Endpoint<Folder>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &FolderRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Folder>>> {
    endpoints::create(PATH, model, params)
}

pub struct Folders;

pub type FoldersClient<'a, E> = ResourceClient<'a, E, Folders>;

impl<'a, E: Executor> ResourceClient<'a, E, Folders> {
    pub fn list(&self, params: &FolderListParams) -> E::Output<'a, Paginated<Folder>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &FolderRetrieveParams) -> E::Output<'a, Folder> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &FolderRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Folder>> {
        self.call(create(model, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}
