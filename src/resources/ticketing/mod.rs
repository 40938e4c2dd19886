pub mod comments;
pub mod projects;
pub mod tickets;
pub mod users;

use crate::domain::ports::Executor;
use crate::resources::{Vertical, VerticalClient, VerticalKind};

pub struct Ticketing;

impl VerticalKind for Ticketing {
    const VERTICAL: Vertical = Vertical::Ticketing;
}

pub type TicketingClient<'a, E> = VerticalClient<'a, E, Ticketing>;

impl<'a, E: Executor> VerticalClient<'a, E, Ticketing> {
    pub fn tickets(&self) -> tickets::TicketsClient<'a, E> {
        self.resource()
    }

    pub fn comments(&self) -> comments::CommentsClient<'a, E> {
        self.resource()
    }

    pub fn users(&self) -> users::UsersClient<'a, E> {
        self.resource()
    }

    pub fn projects(&self) -> projects::ProjectsClient<'a, E> {
        self.resource()
    }
}
