use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::endpoints;
use crate::resources::ticketing::tickets::Ticket;
use crate::resources::ticketing::users::User;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/ticketing/v1/comments";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub user: Option<Expandable<User>>,
    pub contact: Option<Expandable<serde_json::Value>>,
    pub body: Option<String>,
    pub html_body: Option<String>,
    pub ticket: Option<Expandable<Ticket>>,
    pub is_private: Option<bool>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentExpand {
    Contact,
    Ticket,
    User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<CommentExpand>,
    pub ticket_id: Option<String>,
    pub remote_created_after: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<CommentExpand>,
}

pub fn list(params: &CommentListParams) -> Result<Endpoint<Paginated<Comment>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &CommentRetrieveParams) -> Result<Endpoint<Comment>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &CommentRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Comment>>> {
    endpoints::create(PATH, model, params)
}

pub struct Comments;

pub type CommentsClient<'a, E> = ResourceClient<'a, E, Comments>;

impl<'a, E: Executor> ResourceClient<'a, E, Comments> {
    pub fn list(&self, params: &CommentListParams) -> E::Output<'a, Paginated<Comment>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &CommentRetrieveParams) -> E::Output<'a, Comment> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &CommentRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Comment>> {
        self.call(create(model, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}
