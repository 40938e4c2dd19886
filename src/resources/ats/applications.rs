use crate::domain::model::{Endpoint, HttpMethod};
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::ats;
use crate::resources::ats::candidates::Candidate;
use crate::resources::ats::jobs::Job;
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/ats/v1/applications";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub candidate: Option<Expandable<Candidate>>,
    pub job: Option<Expandable<Job>>,
    pub applied_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub offers: Vec<Expandable<serde_json::Value>>,
    pub source: Option<String>,
    pub credited_to: Option<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub screening_question_answers: Vec<serde_json::Value>,
    pub current_stage: Option<Expandable<serde_json::Value>>,
    pub reject_reason: Option<Expandable<serde_json::Value>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApplicationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credited_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screening_question_answers: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

/// `change-stage` 的 body，不包在 `model` 裡
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateApplicationStageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_interview_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_user_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationExpand {
    Candidate,
    CreditedTo,
    CurrentStage,
    Job,
    Offers,
    RejectReason,
    ScreeningQuestionAnswers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApplicationListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<ApplicationExpand>,
    pub candidate_id: Option<String>,
    pub credited_to_id: Option<String>,
    pub current_stage_id: Option<String>,
    pub job_id: Option<String>,
    pub reject_reason_id: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApplicationRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<ApplicationExpand>,
}

pub fn list(params: &ApplicationListParams) -> Result<Endpoint<Paginated<Application>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &ApplicationRetrieveParams) -> Result<Endpoint<Application>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &ApplicationRequest,
    remote_user_id: &str,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Application>>> {
    ats::write(HttpMethod::Post, PATH, model, remote_user_id, params)
}

pub fn change_stage(
    id: &str,
    request: &UpdateApplicationStageRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Application>>> {
    Endpoint::json(
        HttpMethod::Post,
        format!("{}/change-stage", endpoints::item_path(PATH, id)),
    )
    .with_query(params)?
    .with_body(request)
}

pub struct Applications;

pub type ApplicationsClient<'a, E> = ResourceClient<'a, E, Applications>;

impl<'a, E: Executor> ResourceClient<'a, E, Applications> {
    pub fn list(&self, params: &ApplicationListParams) -> E::Output<'a, Paginated<Application>> {
        self.call(list(params))
    }

    pub fn retrieve(
        &self,
        id: &str,
        params: &ApplicationRetrieveParams,
    ) -> E::Output<'a, Application> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &ApplicationRequest,
        remote_user_id: &str,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Application>> {
        self.call(create(model, remote_user_id, params))
    }

    /// 將 application 移到另一個面試階段
    pub fn change_stage(
        &self,
        id: &str,
        request: &UpdateApplicationStageRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Application>> {
        self.call(change_stage(id, request, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_stage_body_is_not_wrapped() {
        let request = UpdateApplicationStageRequest {
            job_interview_stage: Some("stage-2".to_string()),
            remote_user_id: None,
        };
        let endpoint = change_stage("app-1", &request, &WriteParams::default()).unwrap();
        let request = endpoint.request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/api/ats/v1/applications/app-1/change-stage");
        assert_eq!(
            request.body,
            Some(serde_json::json!({"job_interview_stage": "stage-2"}))
        );
    }

    #[test]
    fn test_application_with_expanded_candidate() {
        let application: Application = serde_json::from_value(serde_json::json!({
            "id": "app-1",
            "candidate": {"id": "cand-1", "first_name": "Gil"},
            "job": "job-1",
            "offers": ["offer-1"]
        }))
        .unwrap();
        let candidate = application.candidate.as_ref().and_then(|c| c.model()).unwrap();
        assert_eq!(candidate.first_name.as_deref(), Some("Gil"));
        assert_eq!(application.job.as_ref().and_then(|j| j.id()), Some("job-1"));
        assert_eq!(application.offers.len(), 1);
    }
}
