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

pub const PATH: &str = "/api/accounting/v1/contacts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    Active,
    Archived,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountingAddress {
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub address_type: Option<String>,
    pub street_1: Option<String>,
    pub street_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country_subdivision: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountingPhoneNumber {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub phone_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub is_supplier: Option<bool>,
    pub is_customer: Option<bool>,
    pub email_address: Option<String>,
    pub tax_number: Option<String>,
    pub status: Option<ContactStatus>,
    pub currency: Option<String>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub company: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub addresses: Vec<AccountingAddress>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub phone_numbers: Vec<AccountingPhoneNumber>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_supplier: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactExpand {
    Addresses,
    Company,
    PhoneNumbers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<ContactExpand>,
    pub company_id: Option<String>,
    pub email_address: Option<String>,
    pub is_customer: Option<String>,
    pub is_supplier: Option<String>,
    pub name: Option<String>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<ContactExpand>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
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

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}
