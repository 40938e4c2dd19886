use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{ListParams, Paginated, RemoteData, RetrieveParams};
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/filestorage/v1/drives";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub drive_url: Option<String>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DriveListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub name: Option<String>,
}

pub fn list(params: &DriveListParams) -> Result<Endpoint<Paginated<Drive>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &RetrieveParams) -> Result<Endpoint<Drive>> {
    endpoints::retrieve(PATH, id, params)
}

pub struct Drives;

pub type DrivesClient<'a, E> = ResourceClient<'a, E, Drives>;

impl<'a, E: Executor> ResourceClient<'a, E, Drives> {
    pub fn list(&self, params: &DriveListParams) -> E::Output<'a, Paginated<Drive>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &RetrieveParams) -> E::Output<'a, Drive> {
        self.call(retrieve(id, params))
    }
}
