use crate::domain::model::{Endpoint, HttpMethod};
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::ats;
use crate::resources::ats::applications::Application;
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/ats/v1/interviews";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    Scheduled,
    AwaitingFeedback,
    Complete,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledInterview {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub application: Option<Expandable<Application>>,
    pub job_interview_stage: Option<Expandable<serde_json::Value>>,
    pub organizer: Option<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub interviewers: Vec<Expandable<serde_json::Value>>,
    pub location: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub status: Option<InterviewStatus>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduledInterviewRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_interview_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InterviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewExpand {
    Application,
    Interviewers,
    JobInterviewStage,
    Organizer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterviewListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<InterviewExpand>,
    pub application_id: Option<String>,
    pub job_id: Option<String>,
    pub job_interview_stage_id: Option<String>,
    pub organizer_id: Option<String>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterviewRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<InterviewExpand>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

pub fn list(params: &InterviewListParams) -> Result<Endpoint<Paginated<ScheduledInterview>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(
    id: &str,
    params: &InterviewRetrieveParams,
) -> Result<Endpoint<ScheduledInterview>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &ScheduledInterviewRequest,
    remote_user_id: &str,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<ScheduledInterview>>> {
    ats::write(HttpMethod::Post, PATH, model, remote_user_id, params)
}

pub struct Interviews;

pub type InterviewsClient<'a, E> = ResourceClient<'a, E, Interviews>;

impl<'a, E: Executor> ResourceClient<'a, E, Interviews> {
    pub fn list(
        &self,
        params: &InterviewListParams,
    ) -> E::Output<'a, Paginated<ScheduledInterview>> {
        self.call(list(params))
    }

    pub fn retrieve(
        &self,
        id: &str,
        params: &InterviewRetrieveParams,
    ) -> E::Output<'a, ScheduledInterview> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &ScheduledInterviewRequest,
        remote_user_id: &str,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<ScheduledInterview>> {
        self.call(create(model, remote_user_id, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}
