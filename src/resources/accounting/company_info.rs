use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{ListParams, Paginated, RemoteData, RetrieveParams};
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/accounting/v1/company-info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub tax_number: Option<String>,
    pub fiscal_year_end_month: Option<u8>,
    pub fiscal_year_end_day: Option<u8>,
    pub currency: Option<String>,
    pub remote_created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub urls: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub addresses: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub phone_numbers: Vec<serde_json::Value>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyInfoExpand {
    Addresses,
    PhoneNumbers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyInfoListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<CompanyInfoExpand>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyInfoRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<CompanyInfoExpand>,
}

pub fn list(params: &CompanyInfoListParams) -> Result<Endpoint<Paginated<CompanyInfo>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &CompanyInfoRetrieveParams) -> Result<Endpoint<CompanyInfo>> {
    endpoints::retrieve(PATH, id, params)
}

pub struct CompanyInfos;

pub type CompanyInfoClient<'a, E> = ResourceClient<'a, E, CompanyInfos>;

impl<'a, E: Executor> ResourceClient<'a, E, CompanyInfos> {
    pub fn list(&self, params: &CompanyInfoListParams) -> E::Output<'a, Paginated<CompanyInfo>> {
        self.call(list(params))
    }

    pub fn retrieve(
        &self,
        id: &str,
        params: &CompanyInfoRetrieveParams,
    ) -> E::Output<'a, CompanyInfo> {
        self.call(retrieve(id, params))
    }
}
