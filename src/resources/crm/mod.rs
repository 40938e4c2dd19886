pub mod accounts;
pub mod contacts;
pub mod leads;
pub mod opportunities;

use crate::domain::ports::Executor;
use crate::resources::{Vertical, VerticalClient, VerticalKind};
use serde::{Deserialize, Serialize};

pub struct Crm;

impl VerticalKind for Crm {
    const VERTICAL: Vertical = Vertical::Crm;
}

pub type CrmClient<'a, E> = VerticalClient<'a, E, Crm>;

impl<'a, E: Executor> VerticalClient<'a, E, Crm> {
    pub fn accounts(&self) -> accounts::AccountsClient<'a, E> {
        self.resource()
    }

    pub fn contacts(&self) -> contacts::ContactsClient<'a, E> {
        self.resource()
    }

    pub fn leads(&self) -> leads::LeadsClient<'a, E> {
        self.resource()
    }

    pub fn opportunities(&self) -> opportunities::OpportunitiesClient<'a, E> {
        self.resource()
    }
}

// CRM 各 resource 共用的地址、電話與 email 結構

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_type: Option<String>,
}
