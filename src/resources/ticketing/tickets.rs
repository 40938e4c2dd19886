use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    SubListParams, WriteParams,
};
use crate::resources::endpoints;
use crate::resources::ticketing::users::{User, UserExpand};
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/ticketing/v1/tickets";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    Closed,
    InProgress,
    OnHold,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Urgent,
    High,
    Normal,
    Low,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    Company,
    Public,
    Private,
    Collection,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub assignees: Vec<Expandable<User>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub assigned_teams: Vec<Expandable<serde_json::Value>>,
    pub creator: Option<Expandable<User>>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<TicketStatus>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub collections: Vec<Expandable<serde_json::Value>>,
    pub ticket_type: Option<String>,
    pub account: Option<Expandable<serde_json::Value>>,
    pub contact: Option<Expandable<serde_json::Value>>,
    pub parent_ticket: Option<Expandable<Ticket>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub attachments: Vec<Expandable<serde_json::Value>>,
    pub access_level: Option<AccessLevel>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub tags: Vec<String>,
    pub ticket_url: Option<String>,
    pub priority: Option<Priority>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

/// 建立或更新工單的內容，未設定的欄位不會送出
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_teams: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_ticket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_fields: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketExpand {
    Account,
    Assignees,
    AssignedTeams,
    Attachments,
    Collections,
    Contact,
    Creator,
    ParentTicket,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<TicketExpand>,
    pub account_id: Option<String>,
    pub assignee_ids: Vec<String>,
    pub collection_ids: Vec<String>,
    pub contact_id: Option<String>,
    pub creator_id: Option<String>,
    pub parent_ticket_id: Option<String>,
    pub completed_after: Option<DateTime<Utc>>,
    pub completed_before: Option<DateTime<Utc>>,
    pub due_after: Option<DateTime<Utc>>,
    pub due_before: Option<DateTime<Utc>>,
    pub remote_created_after: Option<DateTime<Utc>>,
    pub remote_created_before: Option<DateTime<Utc>>,
    pub priority: Option<Priority>,
    pub status: Option<TicketStatus>,
    pub tags: Vec<String>,
    pub ticket_type: Option<String>,
    pub ticket_url: Option<String>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<TicketExpand>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollaboratorsParams {
    #[serde(flatten)]
    pub common: SubListParams,
    pub expand: Vec<UserExpand>,
}

pub fn list(params: &TicketListParams) -> Result<Endpoint<Paginated<Ticket>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &TicketRetrieveParams) -> Result<Endpoint<Ticket>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(model: &TicketRequest, params: &WriteParams) -> Result<Endpoint<ModelResponse<Ticket>>> {
    endpoints::create(PATH, model, params)
}

pub fn partial_update(
    id: &str,
    model: &TicketRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Ticket>>> {
    endpoints::partial_update(PATH, id, model, params)
}

pub fn collaborators(
    id: &str,
    params: &CollaboratorsParams,
) -> Result<Endpoint<Paginated<User>>> {
    endpoints::list(
        &format!("{}/collaborators", endpoints::item_path(PATH, id)),
        params,
    )
}

pub struct Tickets;

pub type TicketsClient<'a, E> = ResourceClient<'a, E, Tickets>;

impl<'a, E: Executor> ResourceClient<'a, E, Tickets> {
    pub fn list(&self, params: &TicketListParams) -> E::Output<'a, Paginated<Ticket>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &TicketRetrieveParams) -> E::Output<'a, Ticket> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &TicketRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Ticket>> {
        self.call(create(model, params))
    }

    pub fn partial_update(
        &self,
        id: &str,
        model: &TicketRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Ticket>> {
        self.call(partial_update(id, model, params))
    }

    pub fn collaborators(
        &self,
        id: &str,
        params: &CollaboratorsParams,
    ) -> E::Output<'a, Paginated<User>> {
        self.call(collaborators(id, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }

    pub fn meta_patch(&self, id: &str) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_patch(PATH, id))
    }
}
