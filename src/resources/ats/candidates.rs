use crate::domain::model::{Endpoint, HttpMethod};
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, IgnoreCommonModelRequest, ListParams, MetaResponse, ModelResponse, Paginated,
    RemoteData, RetrieveParams, WriteParams,
};
use crate::resources::ats;
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/ats/v1/candidates";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub value: Option<String>,
    pub phone_number_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub value: Option<String>,
    pub email_address_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Url {
    pub value: Option<String>,
    pub url_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub last_interaction_at: Option<DateTime<Utc>>,
    pub is_private: Option<bool>,
    pub can_email: Option<bool>,
    pub locations: Option<Vec<String>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub email_addresses: Vec<EmailAddress>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub urls: Vec<Url>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub applications: Vec<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub attachments: Vec<Expandable<serde_json::Value>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

impl Candidate {
    /// 名字與姓氏以空白串接，兩者皆缺時回傳 `None`
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_interaction_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addresses: Option<Vec<EmailAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<Url>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateExpand {
    Applications,
    Attachments,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<CandidateExpand>,
    pub email_addresses: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<CandidateExpand>,
}

pub fn list(params: &CandidateListParams) -> Result<Endpoint<Paginated<Candidate>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &CandidateRetrieveParams) -> Result<Endpoint<Candidate>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &CandidateRequest,
    remote_user_id: &str,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Candidate>>> {
    ats::write(HttpMethod::Post, PATH, model, remote_user_id, params)
}

pub fn partial_update(
    id: &str,
    model: &CandidateRequest,
    remote_user_id: &str,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Candidate>>> {
    ats::write(
        HttpMethod::Patch,
        endpoints::item_path(PATH, id),
        model,
        remote_user_id,
        params,
    )
}

pub struct Candidates;

pub type CandidatesClient<'a, E> = ResourceClient<'a, E, Candidates>;

impl<'a, E: Executor> ResourceClient<'a, E, Candidates> {
    pub fn list(&self, params: &CandidateListParams) -> E::Output<'a, Paginated<Candidate>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &CandidateRetrieveParams) -> E::Output<'a, Candidate> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &CandidateRequest,
        remote_user_id: &str,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Candidate>> {
        self.call(create(model, remote_user_id, params))
    }

    pub fn partial_update(
        &self,
        id: &str,
        model: &CandidateRequest,
        remote_user_id: &str,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Candidate>> {
        self.call(partial_update(id, model, remote_user_id, params))
    }

    /// 之後的同步會略過這筆 candidate
    pub fn ignore(&self, id: &str, request: &IgnoreCommonModelRequest) -> E::Output<'a, ()> {
        self.call(endpoints::ignore(PATH, id, request))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }

    pub fn meta_patch(&self, id: &str) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_patch(PATH, id))
    }
}
