pub mod client;
pub mod query;

pub use crate::domain::model::{ApiRequest, ApiResponse, Endpoint, HttpMethod};
pub use crate::domain::ports::{BlockingTransport, Executor, Transport};
pub use crate::utils::error::Result;
