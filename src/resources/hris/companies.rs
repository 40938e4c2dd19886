use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{ListParams, Paginated, RemoteData, RetrieveParams};
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/hris/v1/companies";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub legal_name: Option<String>,
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub eins: Vec<String>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

pub fn list(params: &ListParams) -> Result<Endpoint<Paginated<Company>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &RetrieveParams) -> Result<Endpoint<Company>> {
    endpoints::retrieve(PATH, id, params)
}

pub struct Companies;

pub type CompaniesClient<'a, E> = ResourceClient<'a, E, Companies>;

impl<'a, E: Executor> ResourceClient<'a, E, Companies> {
    pub fn list(&self, params: &ListParams) -> E::Output<'a, Paginated<Company>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &RetrieveParams) -> E::Output<'a, Company> {
        self.call(retrieve(id, params))
    }
}
