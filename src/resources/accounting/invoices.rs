use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::accounting::contacts::Contact;
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/accounting/v1/invoices";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceType {
    AccountsReceivable,
    AccountsPayable,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Paid,
    Draft,
    Submitted,
    PartiallyPaid,
    Open,
    Void,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    pub total_amount: Option<f64>,
    pub currency: Option<String>,
    pub exchange_rate: Option<String>,
    pub item: Option<String>,
    pub account: Option<String>,
    pub tracking_category: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub tracking_categories: Vec<String>,
    pub company: Option<String>,
    pub remote_was_deleted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub invoice_type: Option<InvoiceType>,
    pub contact: Option<Expandable<Contact>>,
    pub number: Option<String>,
    pub issue_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub paid_on_date: Option<DateTime<Utc>>,
    pub memo: Option<String>,
    pub company: Option<Expandable<serde_json::Value>>,
    pub currency: Option<String>,
    pub exchange_rate: Option<String>,
    pub total_discount: Option<f64>,
    pub sub_total: Option<f64>,
    pub status: Option<InvoiceStatus>,
    pub total_tax_amount: Option<f64>,
    pub total_amount: Option<f64>,
    pub balance: Option<f64>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub tracking_categories: Vec<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub payments: Vec<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub applied_payments: Vec<Expandable<serde_json::Value>>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub line_items: Vec<InvoiceLineItem>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceLineItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceRequest {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub invoice_type: Option<InvoiceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_on_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<InvoiceLineItemRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceExpand {
    AppliedPayments,
    Company,
    Contact,
    LineItems,
    Payments,
    TrackingCategories,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<InvoiceExpand>,
    pub company_id: Option<String>,
    pub contact_id: Option<String>,
    pub issue_date_after: Option<DateTime<Utc>>,
    pub issue_date_before: Option<DateTime<Utc>>,
    pub number: Option<String>,
    pub status: Option<InvoiceStatus>,
    #[serde(rename = "type")]
    pub invoice_type: Option<InvoiceType>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<InvoiceExpand>,
    pub remote_fields: Option<String>,
    pub show_enum_origins: Option<String>,
}

pub fn list(params: &InvoiceListParams) -> Result<Endpoint<Paginated<Invoice>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &InvoiceRetrieveParams) -> Result<Endpoint<Invoice>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &InvoiceRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Invoice>>> {
    endpoints::create(PATH, model, params)
}

pub fn partial_update(
    id: &str,
    model: &InvoiceRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Invoice>>> {
    endpoints::partial_update(PATH, id, model, params)
}

pub struct Invoices;

pub type InvoicesClient<'a, E> = ResourceClient<'a, E, Invoices>;

impl<'a, E: Executor> ResourceClient<'a, E, Invoices> {
    pub fn list(&self, params: &InvoiceListParams) -> E::Output<'a, Paginated<Invoice>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &InvoiceRetrieveParams) -> E::Output<'a, Invoice> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &InvoiceRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Invoice>> {
        self.call(create(model, params))
    }

    pub fn partial_update(
        &self,
        id: &str,
        model: &InvoiceRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Invoice>> {
        self.call(partial_update(id, model, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }

    pub fn meta_patch(&self, id: &str) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_patch(PATH, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_type_rename() {
        let params = InvoiceListParams {
            invoice_type: Some(InvoiceType::AccountsPayable),
            expand: vec![InvoiceExpand::LineItems],
            ..Default::default()
        };
        let endpoint = list(&params).unwrap();
        assert_eq!(endpoint.request().query_value("type"), Some("ACCOUNTS_PAYABLE"));
        assert_eq!(endpoint.request().query_value("expand"), Some("line_items"));
    }

    #[test]
    fn test_create_with_line_items() {
        let model = InvoiceRequest {
            number: Some("INV-001".to_string()),
            line_items: Some(vec![InvoiceLineItemRequest {
                description: Some("Consulting".to_string()),
                quantity: Some(2.0),
                unit_price: Some(150.0),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let endpoint = create(&model, &WriteParams::default()).unwrap();
        assert_eq!(
            endpoint.request().body,
            Some(serde_json::json!({
                "model": {
                    "number": "INV-001",
                    "line_items": [{"description": "Consulting", "unit_price": 150.0, "quantity": 2.0}]
                }
            }))
        );
    }
}
