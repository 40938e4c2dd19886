pub mod companies;
pub mod employees;
pub mod employments;
pub mod time_off;

use crate::domain::ports::Executor;
use crate::resources::{Vertical, VerticalClient, VerticalKind};

pub struct Hris;

impl VerticalKind for Hris {
    const VERTICAL: Vertical = Vertical::Hris;
}

pub type HrisClient<'a, E> = VerticalClient<'a, E, Hris>;

impl<'a, E: Executor> VerticalClient<'a, E, Hris> {
    pub fn companies(&self) -> companies::CompaniesClient<'a, E> {
        self.resource()
    }

    pub fn employees(&self) -> employees::EmployeesClient<'a, E> {
        self.resource()
    }

    pub fn employments(&self) -> employments::EmploymentsClient<'a, E> {
        self.resource()
    }

    pub fn time_off(&self) -> time_off::TimeOffClient<'a, E> {
        self.resource()
    }
}
