//! Typed client for the Merge unified API.
//!
//! ```no_run
//! use merge_client::{ClientConfig, MergeClient};
//! use merge_client::resources::ticketing::tickets::TicketListParams;
//!
//! # async fn demo() -> merge_client::Result<()> {
//! let client = MergeClient::new(ClientConfig::new("api-key").with_account_token("token"))?;
//! let page = client.ticketing().tickets().list(&TicketListParams::default()).await?;
//! println!("{} tickets", page.results.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod models;
pub mod resources;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{BlockingHttpTransport, HttpTransport};
pub use config::{ClientConfig, Environment, RequestOptions, TomlConfig};
pub use core::client::{BlockingMergeClient, MergeClient};
pub use domain::model::{ApiRequest, ApiResponse, Endpoint, HttpMethod};
pub use domain::ports::{BlockingTransport, Executor, Transport};
pub use models::common::{Expandable, MetaResponse, ModelResponse, Paginated};
pub use resources::Vertical;
pub use utils::error::{MergeError, Result};
