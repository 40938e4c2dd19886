use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{Expandable, ListParams, Paginated, RemoteData, RetrieveParams};
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/hris/v1/employments";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayPeriod {
    Hour,
    Day,
    Week,
    EveryTwoWeeks,
    Semimonthly,
    Month,
    Quarter,
    EverySixMonths,
    Year,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Intern,
    Contractor,
    Freelance,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub employee: Option<Expandable<serde_json::Value>>,
    pub job_title: Option<String>,
    pub pay_rate: Option<f64>,
    pub pay_period: Option<PayPeriod>,
    pub pay_frequency: Option<String>,
    pub pay_currency: Option<String>,
    pub pay_group: Option<Expandable<serde_json::Value>>,
    pub flsa_status: Option<String>,
    pub effective_date: Option<DateTime<Utc>>,
    pub employment_type: Option<EmploymentType>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentExpand {
    Employee,
    PayGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmploymentListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<EmploymentExpand>,
    pub employee_id: Option<String>,
    /// 例如 `effective_date` 或 `-effective_date`
    pub order_by: Option<String>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmploymentRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<EmploymentExpand>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

pub fn list(params: &EmploymentListParams) -> Result<Endpoint<Paginated<Employment>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &EmploymentRetrieveParams) -> Result<Endpoint<Employment>> {
    endpoints::retrieve(PATH, id, params)
}

pub struct Employments;

pub type EmploymentsClient<'a, E> = ResourceClient<'a, E, Employments>;

impl<'a, E: Executor> ResourceClient<'a, E, Employments> {
    pub fn list(&self, params: &EmploymentListParams) -> E::Output<'a, Paginated<Employment>> {
        self.call(list(params))
    }

    pub fn retrieve(
        &self,
        id: &str,
        params: &EmploymentRetrieveParams,
    ) -> E::Output<'a, Employment> {
        self.call(retrieve(id, params))
    }
}
