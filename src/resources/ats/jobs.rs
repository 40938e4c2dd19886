use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, Paginated, RemoteData, RetrieveParams, SubListParams,
};
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/ats/v1/jobs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Open,
    Closed,
    Draft,
    Archived,
    Pending,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Posting,
    Requisition,
    Profile,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingUrl {
    pub value: Option<String>,
    pub url_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub status: Option<JobStatus>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub job_postings: Vec<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub job_posting_urls: Vec<JobPostingUrl>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub confidential: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub departments: Vec<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub offices: Vec<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub hiring_managers: Vec<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub recruiters: Vec<Expandable<serde_json::Value>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreeningQuestionType {
    Date,
    File,
    SingleSelect,
    MultiSelect,
    SingleLineText,
    MultiLineText,
    Numeric,
    Boolean,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningQuestionOption {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningQuestion {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub job: Option<String>,
    pub description: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub question_type: Option<ScreeningQuestionType>,
    pub required: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub options: Vec<ScreeningQuestionOption>,
    pub remote_was_deleted: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobExpand {
    Departments,
    HiringManagers,
    JobPostings,
    Offices,
    Recruiters,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<JobExpand>,
    pub code: Option<String>,
    pub offices: Option<String>,
    pub status: Option<JobStatus>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<JobExpand>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningQuestionExpand {
    Job,
    Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreeningQuestionsParams {
    #[serde(flatten)]
    pub common: SubListParams,
    pub expand: Vec<ScreeningQuestionExpand>,
}

pub fn list(params: &JobListParams) -> Result<Endpoint<Paginated<Job>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &JobRetrieveParams) -> Result<Endpoint<Job>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn screening_questions(
    job_id: &str,
    params: &ScreeningQuestionsParams,
) -> Result<Endpoint<Paginated<ScreeningQuestion>>> {
    endpoints::list(
        &format!("{}/screening-questions", endpoints::item_path(PATH, job_id)),
        params,
    )
}

pub struct Jobs;

pub type JobsClient<'a, E> = ResourceClient<'a, E, Jobs>;

impl<'a, E: Executor> ResourceClient<'a, E, Jobs> {
    pub fn list(&self, params: &JobListParams) -> E::Output<'a, Paginated<Job>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &JobRetrieveParams) -> E::Output<'a, Job> {
        self.call(retrieve(id, params))
    }

    pub fn screening_questions(
        &self,
        job_id: &str,
        params: &ScreeningQuestionsParams,
    ) -> E::Output<'a, Paginated<ScreeningQuestion>> {
        self.call(screening_questions(job_id, params))
    }
}
