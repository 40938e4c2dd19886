use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::models::common::{
    Expandable, ListParams, MetaResponse, ModelResponse, Paginated, RemoteData, RetrieveParams,
    WriteParams,
};
use crate::resources::accounting::accounts::Account;
use crate::resources::accounting::contacts::Contact;
use crate::resources::endpoints;
use crate::resources::ResourceClient;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/api/accounting/v1/payments";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    AccountsPayable,
    AccountsReceivable,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub transaction_date: Option<DateTime<Utc>>,
    pub contact: Option<Expandable<Contact>>,
    pub account: Option<Expandable<Account>>,
    pub currency: Option<String>,
    pub exchange_rate: Option<String>,
    pub company: Option<String>,
    pub total_amount: Option<f64>,
    #[serde(rename = "type")]
    pub payment_type: Option<PaymentType>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub tracking_categories: Vec<Expandable<serde_json::Value>>,
    pub accounting_period: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub applied_to_lines: Vec<serde_json::Value>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub remote_was_deleted: Option<bool>,
    pub field_mappings: Option<serde_json::Value>,
    pub remote_data: Option<Vec<RemoteData>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_to_lines: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_params: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_account_params: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentExpand {
    Account,
    AccountingPeriod,
    AppliedToLines,
    Company,
    Contact,
    TrackingCategories,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentListParams {
    #[serde(flatten)]
    pub common: ListParams,
    pub expand: Vec<PaymentExpand>,
    pub account_id: Option<String>,
    pub company_id: Option<String>,
    pub contact_id: Option<String>,
    pub transaction_date_after: Option<DateTime<Utc>>,
    pub transaction_date_before: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentRetrieveParams {
    #[serde(flatten)]
    pub common: RetrieveParams,
    pub expand: Vec<PaymentExpand>,
}

pub fn list(params: &PaymentListParams) -> Result<Endpoint<Paginated<Payment>>> {
    endpoints::list(PATH, params)
}

pub fn retrieve(id: &str, params: &PaymentRetrieveParams) -> Result<Endpoint<Payment>> {
    endpoints::retrieve(PATH, id, params)
}

pub fn create(
    model: &PaymentRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Payment>>> {
    endpoints::create(PATH, model, params)
}

pub fn partial_update(
    id: &str,
    model: &PaymentRequest,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<Payment>>> {
    endpoints::partial_update(PATH, id, model, params)
}

pub struct Payments;

pub type PaymentsClient<'a, E> = ResourceClient<'a, E, Payments>;

impl<'a, E: Executor> ResourceClient<'a, E, Payments> {
    pub fn list(&self, params: &PaymentListParams) -> E::Output<'a, Paginated<Payment>> {
        self.call(list(params))
    }

    pub fn retrieve(&self, id: &str, params: &PaymentRetrieveParams) -> E::Output<'a, Payment> {
        self.call(retrieve(id, params))
    }

    pub fn create(
        &self,
        model: &PaymentRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Payment>> {
        self.call(create(model, params))
    }

    pub fn partial_update(
        &self,
        id: &str,
        model: &PaymentRequest,
        params: &WriteParams,
    ) -> E::Output<'a, ModelResponse<Payment>> {
        self.call(partial_update(id, model, params))
    }

    pub fn meta_post(&self) -> E::Output<'a, MetaResponse> {
        self.call(endpoints::meta_post(PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HttpMethod;

    #[test]
    fn test_partial_update_is_patch() {
        let model = PaymentRequest {
            total_amount: Some(42.5),
            ..Default::default()
        };
        let params = WriteParams {
            run_async: Some(false),
            ..Default::default()
        };
        let endpoint = partial_update("pay-1", &model, &params).unwrap();
        let request = endpoint.request();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.path, "/api/accounting/v1/payments/pay-1");
        assert_eq!(request.query_value("run_async"), Some("false"));
        assert_eq!(
            request.body,
            Some(serde_json::json!({"model": {"total_amount": 42.5}}))
        );
    }

    #[test]
    fn test_payment_decodes_expanded_contact() {
        let payment: Payment = serde_json::from_value(serde_json::json!({
            "id": "pay-1",
            "contact": {"id": "c-1", "name": "Gil Feig"},
            "account": "acc-1",
            "type": "ACCOUNTS_RECEIVABLE"
        }))
        .unwrap();
        assert_eq!(payment.account.as_ref().and_then(|a| a.id()), Some("acc-1"));
        let contact = payment.contact.as_ref().and_then(|c| c.model()).unwrap();
        assert_eq!(contact.name.as_deref(), Some("Gil Feig"));
        assert_eq!(payment.payment_type, Some(PaymentType::AccountsReceivable));
    }
}
