use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams, WriteParams,
};
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/accounting/v1/accounts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Asset,
    Equity,
    Expense,
    Liability,
    Revenue,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Pending,
    Inactive,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub classification: Option<Classification>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub status: Option<AccountStatus>,
    pub current_balance: Option<f64>,
    pub currency: Option<String>,
    pub account_number: Option<String>,
    pub parent_account: Option<String>,
    pub company: Option<String>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub company_id: Option<String>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

pub fn list(params: &AccountListParams) -> Result<Endpoint<Paginated<Account>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &AccountRetrieveParams) -> Result<Endpoint<Account>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &AccountRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Account>>> {
    endpoints::create(PATH, model, params)
}

pub struct Accounts;

pub type AccountsClient<'a, E> = ResourceClient<'a, E, Accounts>;

impl<'a, E: Executor> ResourceClient<'a, E, Accounts> {
    pub fn list(&self, params: &AccountListParams) -> E::Output<'a, Paginated<Account>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &AccountRetrieveParams) -> E::Output<'a, Account> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &AccountRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Account>> {
        self.call(create(model, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}
