use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, IgnoreCommonModelRequest, ListParams, MetaResponse, ModelResponse, Paginated,
    RemoteData, RetrieveParams, WriteParams,
};
use crate::resources::endpoints;
use crate::resources::hris::companies::Company;
use crate::resources::hris::employments::Employment;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/hris/v1/employees";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Active,
    Pending,
    Inactive,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub employee_number: Option<String>,
    pub company: Option<Expandable<Company>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub preferred_name: Option<String>,
    pub display_full_name: Option<String>,
    pub username: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub groups: Vec<Expandable<serde_json::Value>>,
    pub work_email: Option<String>,
    pub personal_email: Option<String>,
    pub mobile_phone_number: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub employments: Vec<Expandable<Employment>>,
    pub home_location: Option<Expandable<serde_json::Value>>,
    pub work_location: Option<Expandable<serde_json::Value>>,
    pub manager: Option<Expandable<Employee>>,
    pub team: Option<Expandable<serde_json::Value>>,
    pub pay_group: Option<Expandable<serde_json::Value>>,
    pub ssn: Option<String>,
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    pub marital_status: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub hire_date: Option<DateTime<Utc>>,
    pub start_date: Option<DateTime<Utc>>,
    pub remote_created_at: Option<DateTime<Utc>>,
    pub employment_status: Option<EmploymentStatus>,
    pub termination_date: Option<DateTime<Utc>>,
    pub avatar: Option<String>,
    pub custom_fields: Option<serde_json::Value>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<EmploymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeExpand {
    Company,
    Employments,
    Groups,
    HomeLocation,
    Manager,
    PayGroup,
    Team,
    WorkLocation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<EmployeeExpand>,
    pub company_id: Option<String>,
    pub display_full_name: Option<String>,
    pub employment_status: Option<EmploymentStatus>,
    pub employment_type: Option<String>,
    pub first_name: Option<String>,
    pub groups: Option<String>,
    pub home_location_id: Option<String>,
    pub include_sensitive_fields: Option<bool>,
    pub job_title: Option<String>,
    pub last_name: Option<String>,
    pub manager_id: Option<String>,
    pub pay_group_id: Option<String>,
    pub personal_email: Option<String>,
    pub started_after: Option<DateTime<Utc>>,
    pub started_before: Option<DateTime<Utc>>,
    pub team_id: Option<String>,
    pub terminated_after: Option<DateTime<Utc>>,
    pub terminated_before: Option<DateTime<Utc>>,
    pub work_email: Option<String>,
    pub work_location_id: Option<String>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<EmployeeExpand>,
    pub include_sensitive_fields: Option<bool>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

pub fn list(params: &EmployeeListParams) -> Result<Endpoint<Paginated<Employee>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &EmployeeRetrieveParams) -> Result<Endpoint<Employee>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &EmployeeRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Employee>>> {
    endpoints::create(PATH, model, params)
}

pub struct Employees;

pub type EmployeesClient<'a, E> = ResourceClient<'a, E, Employees>;

impl<'a, E: Executor> ResourceClient<'a, E, Employees> {
    pub fn list(&self, params: &EmployeeListParams) -> E::Output<'a, Paginated<Employee>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &EmployeeRetrieveParams) -> E::Output<'a, Employee> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &EmployeeRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Employee>> {
        self.call(create(model, params))
    }

    pub fn ignore(&self, id: &str, request: &IgnoreCommonModelRequest) -> E::Output<'a, ()> {
        self.call(endpoints::ignore(PATH, id, request))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_fields_flag() {
        let params = EmployeeRetrieveParams {
            include_sensitive_fields: Some(true),
            expand: vec![EmployeeExpand::Manager, EmployeeExpand::Team],
            ..Default::default()
        };
        let endpoint = retrieve("emp-1", &params).unwrap();
        assert_eq!(endpoint.request().path, "/api/hris/v1/employees/emp-1");
        assert_eq!(
            endpoint.request().query_value("include_sensitive_fields"),
            Some("true")
        );
        assert_eq!(endpoint.request().query_value("expand"), Some("manager,team"));
        assert_eq!(endpoint.request().query_value("remote_fields"), None);
    }

    #[test]
    fn test_manager_expands_recursively() {
        let employee: Employee = serde_json::from_value(serde_json::json!({
            "id": "emp-1",
            "manager": {"id": "emp-0", "first_name": "Ada", "manager": "emp-root"},
            "employment_status": "ACTIVE"
        }))
        .unwrap();
        let manager = employee.manager.as_ref().and_then(|m| m.model()).unwrap();
        assert_eq!(manager.first_name.as_deref(), Some("Ada"));
        assert_eq!(manager.manager.as_ref().and_then(|m| m.id()), Some("emp-root"));
        assert_eq!(employee.employment_status, Some(EmploymentStatus::Active));
    }
}
