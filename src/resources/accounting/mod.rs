pub mod accounts;
pub mod company_info;
pub mod contacts;
pub mod invoices;
pub mod payments;

use crate::domain::ports::Executor;
use crate::resources::{Vertical, VerticalClient, VerticalKind};

pub struct Accounting;

impl VerticalKind for Accounting {
    const VERTICAL: Vertical = Vertical::Accounting;
}

pub type AccountingClient<'a, E> = VerticalClient<'a, E, Accounting>;

impl<'a, E: Executor> VerticalClient<'a, E, Accounting> {
    pub fn accounts(&self) -> accounts::AccountsClient<'a, E> {
        self.resource()
    }

    pub fn company_info(&self) -> company_info::CompanyInfoClient<'a, E> {
        self.resource()
    }

    pub fn contacts(&self) -> contacts::ContactsClient<'a, E> {
        self.resource()
    }

    pub fn invoices(&self) -> invoices::InvoicesClient<'a, E> {
        self.resource()
    }

    pub fn payments(&self) -> payments::PaymentsClient<'a, E> {
        self.resource()
    }
}
