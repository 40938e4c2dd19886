pub mod applications;
pub mod candidates;
pub mod interviews;
pub mod jobs;

use crate::domain::model::{Endpoint, HttpMethod};
use crate::domain::ports::Executor;
use crate::models::common::{ModelResponse, WriteParams};
use crate::resources::{Vertical, VerticalClient, VerticalKind};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct Ats;

impl VerticalKind for Ats {
    const VERTICAL: Vertical = Vertical::Ats;
}

pub type AtsClient<'a, E> = VerticalClient<'a, E, Ats>;

impl<'a, E: Executor> VerticalClient<'a, E, Ats> {
    pub fn applications(&self) -> applications::ApplicationsClient<'a, E> {
        self.resource()
    }

    pub fn candidates(&self) -> candidates::CandidatesClient<'a, E> {
        self.resource()
    }

    pub fn interviews(&self) -> interviews::InterviewsClient<'a, E> {
        self.resource()
    }

    pub fn jobs(&self) -> jobs::JobsClient<'a, E> {
        self.resource()
    }
}

/// ATS 的寫入端點除了 `model` 之外還要帶上執行動作的 `remote_user_id`
#[derive(Debug, Serialize)]
struct AtsEnvelope<'a, B: Serialize> {
    model: &'a B,
    remote_user_id: &'a str,
}

pub(crate) fn write<T, B>(
    method: HttpMethod,
    path: impl Into<String>,
    model: &B,
    remote_user_id: &str,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<T>>>
where
    T: DeserializeOwned,
    B: Serialize,
{
    Endpoint::json(method, path)
        .with_query(params)?
        .with_body(&AtsEnvelope {
            model,
            remote_user_id,
        })
}
