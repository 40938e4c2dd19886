use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{ListParams, Paginated, RemoteData, RetrieveParams, SubListParams};
use crate::resources::endpoints;
use crate::resources::ticketing::users::{User, UserExpand};
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/ticketing/v1/projects";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectUsersParams {
    #[serde(flatten)]
    pub common: SubListParams,
    pub expand: Vec<UserExpand>,
}

pub fn list(params: &ListParams) -> Result<Endpoint<Paginated<Project>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &RetrieveParams) -> Result<Endpoint<Project>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn users(project_id: &str, params: &ProjectUsersParams) -> Result<Endpoint<Paginated<User>>> {
    endpoints::list(
        &format!("{}/users", endpoints::item_path(PATH, project_id)),
        params,
    )
}

pub struct Projects;

pub type ProjectsClient<'a, E> = ResourceClient<'a, E, Projects>;

impl<'a, E: Executor> ResourceClient<'a, E, Projects> {
    pub fn list(&self, params: &ListParams) -> E::Output<'a, Paginated<Project>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &RetrieveParams) -> E::Output<'a, Project> {
        self.call(retrieve(id, params))
    }

    pub fn users(
        &self,
        project_id: &str,
        params: &ProjectUsersParams,
    ) -> E::Output<'a, Paginated<User>> {
        self.call(users(project_id, params))
    }
}
