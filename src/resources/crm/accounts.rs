use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::crm::Address;
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/crm/v1/accounts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub owner: Option<Expandable<serde_json::Value>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub number_of_employees: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub addresses: Vec<Address>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub phone_numbers: Vec<serde_json::Value>,
    pub last_activity_at: Option<DateTime<Utc>>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub remote_fields: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_employees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_fields: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountExpand {
    Owner,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<AccountExpand>,
    pub include_remote_fields: Option<bool>,
    pub name: Option<String>,
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<AccountExpand>,
    pub include_remote_fields: Option<bool>,
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

pub fn partial_update(
    id: &str,
    model: &AccountRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Account>>> {
    endpoints::partial_update(PATH, id, model, params)
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

    pub fn partial_update(
        &self,
        id: &str,
        model: &AccountRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Account>> {
        self.call(partial_update(id, model, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }

    pub fn meta_patch(&self, id: &str) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_patch(PATH, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_address_skips_unset_fields() {
        let model = AccountRequest {
            name: Some("Merge".to_string()),
            addresses: Some(vec![Address {
                city: Some("San Francisco".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let endpoint = create(&model, &WriteParams::default()).unwrap();
        assert_eq!(
            endpoint.request().body,
            Some(serde_json::json!({
                "model": {"name": "Merge", "addresses": [{"city": "San Francisco"}]}
            }))
        );
    }
}
