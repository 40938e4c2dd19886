use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::crm::accounts::Account;
use crate::resources::crm::contacts::Contact;
use crate::resources::crm::{Address, EmailAddress, PhoneNumber};
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/crm/v1/leads";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub owner: Option<Expandable<serde_json::Value>>,
    pub lead_source: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub addresses: Vec<Address>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub email_addresses: Vec<EmailAddress>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub phone_numbers: Vec<PhoneNumber>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub converted_date: Option<DateTime<Utc>>,
    pub converted_contact: Option<Expandable<Contact>>,
    pub converted_account: Option<Expandable<Account>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub remote_fields: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addresses: Option<Vec<EmailAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_fields: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadExpand {
    ConvertedAccount,
    ConvertedContact,
    Owner,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<LeadExpand>,
    pub converted_account_id: Option<String>,
    pub converted_contact_id: Option<String>,
    pub email_addresses: Option<String>,
    pub owner_id: Option<String>,
    pub phone_numbers: Option<String>,
    pub include_remote_fields: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<LeadExpand>,
    pub include_remote_fields: Option<bool>,
}

pub fn list(params: &LeadListParams) -> Result<Endpoint<Paginated<Lead>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &LeadRetrieveParams) -> Result<Endpoint<Lead>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(model: &LeadRequest, params: &WriteParams) -> Result<Endpoint<ModelResponse<Lead>>> {
    endpoints::create(PATH, model, params)
}

pub struct Leads;

pub type LeadsClient<'a, E> = ResourceClient<'a, E, Leads>;

impl<'a, E: Executor> ResourceClient<'a, E, Leads> {
    pub fn list(&self, params: &LeadListParams) -> E::Output<'a, Paginated<Lead>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &LeadRetrieveParams) -> E::Output<'a, Lead> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &LeadRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Lead>> {
        self.call(create(model, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}
