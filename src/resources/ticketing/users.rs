use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{Expandable, ListParams, Paginated, RemoteData, RetrieveParams};
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/ticketing/v1/users";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub email_address: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub teams: Vec<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub roles: Vec<Expandable<serde_json::Value>>,
    pub avatar: Option<String>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserExpand {
    Roles,
    Teams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<UserExpand>,
    pub email_address: Option<String>,
    pub team: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<UserExpand>,
}

pub fn list(params: &UserListParams) -> Result<Endpoint<Paginated<User>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &UserRetrieveParams) -> Result<Endpoint<User>> {
    endpoints::retrieve(PATH, id, params)
}

pub struct Users;

pub type UsersClient<'a, E> = ResourceClient<'a, E, Users>;

impl<'a, E: Executor> ResourceClient<'a, E, Users> {
    pub fn list(&self, params: &UserListParams) -> E::Output<'a, Paginated<User>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &UserRetrieveParams) -> E::Output<'a, User> {
        self.call(retrieve(id, params))
    }
}
