use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, IgnoreCommonModelRequest, ListParams, MetaResponse, ModelResponse, Paginated,
    RemoteData, RetrieveParams, WriteParams,
};
use crate::resources::crm::accounts::Account;
use crate::resources::crm::{Address, EmailAddress, PhoneNumber};
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/crm/v1/contacts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub account: Option<Expandable<Account>>,
    pub owner: Option<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub addresses: Vec<Address>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub email_addresses: Vec<EmailAddress>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub phone_numbers: Vec<PhoneNumber>,
    pub last_activity_at: Option<DateTime<Utc>>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub remote_fields: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addresses: Option<Vec<EmailAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<PhoneNumber>>,
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
pub enum ContactExpand {
    Account,
    Owner,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<ContactExpand>,
    pub account_id: Option<String>,
    pub email_addresses: Option<String>,
    pub phone_numbers: Option<String>,
    pub include_remote_fields: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<ContactExpand>,
    pub include_remote_fields: Option<bool>,
}

pub fn list(params: &ContactListParams) -> Result<Endpoint<Paginated<Contact>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &ContactRetrieveParams) -> Result<Endpoint<Contact>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &ContactRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Contact>>> {
    endpoints::create(PATH, model, params)
}

pub fn partial_update(
    id: &str,
    model: &ContactRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Contact>>> {
    endpoints::partial_update(PATH, id, model, params)
}

pub struct Contacts;

pub type ContactsClient<'a, E> = ResourceClient<'a, E, Contacts>;

impl<'a, E: Executor> ResourceClient<'a, E, Contacts> {
    pub fn list(&self, params: &ContactListParams) -> E::Output<'a, Paginated<Contact>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &ContactRetrieveParams) -> E::Output<'a, Contact> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &ContactRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Contact>> {
        self.call(create(model, params))
    }

    pub fn partial_update(
        &self,
        id: &str,
        model: &ContactRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Contact>> {
        self.call(partial_update(id, model, params))
    }

    pub fn ignore(&self, id: &str, request: &IgnoreCommonModelRequest) -> E::Output<'a, ()> {
        self.call(endpoints::ignore(PATH, id, request))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}
