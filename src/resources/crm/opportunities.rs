use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::crm::accounts::Account;
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/crm/v1/opportunities";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpportunityStatus {
    Open,
    Won,
    Lost,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub amount: Option<i64>,
    pub owner: Option<Expandable<serde_json::Value>>,
    pub account: Option<Expandable<Account>>,
    pub stage: Option<Expandable<serde_json::Value>>,
    pub status: Option<OpportunityStatus>,
    pub last_activity_at: Option<DateTime<Utc>>,
    pub close_date: Option<DateTime<Utc>>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub remote_fields: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpportunityRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OpportunityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_fields: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityExpand {
    Account,
    Owner,
    Stage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpportunityListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<OpportunityExpand>,
    pub account_id: Option<String>,
    pub owner_id: Option<String>,
    pub stage_id: Option<String>,
    pub status: Option<OpportunityStatus>,
    pub remote_created_after: Option<DateTime<Utc>>,
    pub include_remote_fields: Option<bool>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpportunityRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<OpportunityExpand>,
    pub include_remote_fields: Option<bool>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

pub fn list(params: &OpportunityListParams) -> Result<Endpoint<Paginated<Opportunity>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &OpportunityRetrieveParams) -> Result<Endpoint<Opportunity>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &OpportunityRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Opportunity>>> {
    endpoints::create(PATH, model, params)
}

pub fn partial_update(
    id: &str,
    model: &OpportunityRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Opportunity>>> {
    endpoints::partial_update(PATH, id, model, params)
}

pub struct Opportunities;

pub type OpportunitiesClient<'a, E> = ResourceClient<'a, E, Opportunities>;

impl<'a, E: Executor> ResourceClient<'a, E, Opportunities> {
    pub fn list(&self, params: &OpportunityListParams) -> E::Output<'a, Paginated<Opportunity>> {
        self.call(list(params))
    }

    pub fn retrieve(
        &self,
        id: &str,
        params: &OpportunityRetrieveParams,
    ) -> E::Output<'a, Opportunity> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &OpportunityRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Opportunity>> {
        self.call(create(model, params))
    }

    pub fn partial_update(
        &self,
        id: &str,
        model: &OpportunityRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Opportunity>> {
        self.call(partial_update(id, model, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }

    pub fn meta_patch(&self, id: &str) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_patch(PATH, id))
    }
}
