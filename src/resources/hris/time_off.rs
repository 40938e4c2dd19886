use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::endpoints;
use crate::resources::hris::employees::Employee;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/hris/v1/time-off";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeOffStatus {
    Requested,
    Approved,
    Declined,
    Cancelled,
    Deleted,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Units {
    Hours,
    Days,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    Vacation,
    Sick,
    Personal,
    JuryDuty,
    Volunteer,
    Bereavement,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOff {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub employee: Option<Expandable<Employee>>,
    pub approver: Option<Expandable<Employee>>,
    pub status: Option<TimeOffStatus>,
    pub employee_note: Option<String>,
    pub units: Option<Units>,
    pub amount: Option<f64>,
    pub request_type: Option<RequestType>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeOffRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TimeOffStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffExpand {
    Approver,
    Employee,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeOffListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<TimeOffExpand>,
    pub approver_id: Option<String>,
    pub employee_id: Option<String>,
    pub ended_after: Option<DateTime<Utc>>,
    pub ended_before: Option<DateTime<Utc>>,
    pub request_type: Option<RequestType>,
    pub started_after: Option<DateTime<Utc>>,
    pub started_before: Option<DateTime<Utc>>,
    pub status: Option<TimeOffStatus>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeOffRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<TimeOffExpand>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

pub fn list(params: &TimeOffListParams) -> Result<Endpoint<Paginated<TimeOff>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &TimeOffRetrieveParams) -> Result<Endpoint<TimeOff>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &TimeOffRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<TimeOff>>> {
    endpoints::create(PATH, model, params)
}

pub struct TimeOffs;

pub type TimeOffClient<'a, E> = ResourceClient<'a, E, TimeOffs>;

impl<'a, E: Executor> ResourceClient<'a, E, TimeOffs> {
    pub fn list(&self, params: &TimeOffListParams) -> E::Output<'a, Paginated<TimeOff>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &TimeOffRetrieveParams) -> E::Output<'a, TimeOff> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &TimeOffRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<TimeOff>> {
        self.call(create(model, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_uses_hyphen() {
        let endpoint = list(&TimeOffListParams::default()).unwrap();
        assert_eq!(endpoint.request().path, "/api/hris/v1/time-off");
        assert!(endpoint.request().query.is_empty());
    }

    #[test]
    fn test_request_type_filter() {
        let params = TimeOffListParams {
            request_type: Some(RequestType::JuryDuty),
            status: Some(TimeOffStatus::Approved),
            ..Default::default()
        };
        let endpoint = list(&params).unwrap();
        assert_eq!(endpoint.request().query_value("request_type"), Some("JURY_DUTY"));
        assert_eq!(endpoint.request().query_value("status"), Some("APPROVED"));
    }
}
