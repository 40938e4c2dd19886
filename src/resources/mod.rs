//! Resource clients for every Merge vertical.
//!
//! A resource client is defined once and is generic over [`Executor`], so
//! the same definition serves both `MergeClient` (methods return futures)
//! and `BlockingMergeClient` (methods return results directly).

pub mod accounting;
pub mod ats;
pub mod crm;
pub mod endpoints;
pub mod filestorage;
pub mod hris;
pub mod shared;
pub mod ticketing;

use crate::config::RequestOptions;
use crate::domain::model::Endpoint;
use crate::domain::ports::Executor;
use crate::utils::error::{MergeError, Result};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Vertical {
    Accounting,
    Ats,
    Crm,
    #[cfg_attr(feature = "cli", value(name = "filestorage"))]
    FileStorage,
    Hris,
    Ticketing,
}

impl Vertical {
    pub const ALL: [Vertical; 6] = [
        Vertical::Accounting,
        Vertical::Ats,
        Vertical::Crm,
        Vertical::FileStorage,
        Vertical::Hris,
        Vertical::Ticketing,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Vertical::Accounting => "accounting",
            Vertical::Ats => "ats",
            Vertical::Crm => "crm",
            Vertical::FileStorage => "filestorage",
            Vertical::Hris => "hris",
            Vertical::Ticketing => "ticketing",
        }
    }

    pub fn base_path(&self) -> String {
        format!("/api/{}/v1", self.slug())
    }

    /// 例如 `Vertical::Hris.path("employees")` -> `/api/hris/v1/employees`
    pub fn path(&self, resource: &str) -> String {
        format!("{}/{}", self.base_path(), resource.trim_start_matches('/'))
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Vertical {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        Vertical::ALL
            .into_iter()
            .find(|v| v.slug() == normalized)
            .ok_or_else(|| MergeError::InvalidConfigValueError {
                field: "vertical".to_string(),
                value: s.to_string(),
                reason: "Expected one of: accounting, ats, crm, filestorage, hris, ticketing"
                    .to_string(),
            })
    }
}

/// 編譯期的 vertical 標記
pub trait VerticalKind {
    const VERTICAL: Vertical;
}

/// 某個 vertical 底下的入口，持有本次呼叫鏈的 `RequestOptions`
pub struct VerticalClient<'a, E, V> {
    executor: &'a E,
    options: RequestOptions,
    _vertical: PhantomData<V>,
}

impl<'a, E: Executor, V: VerticalKind> VerticalClient<'a, E, V> {
    pub(crate) fn new(executor: &'a E, options: RequestOptions) -> Self {
        Self {
            executor,
            options,
            _vertical: PhantomData,
        }
    }

    /// 覆寫後續所有呼叫的選項（例如切換 account token）
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn vertical(&self) -> Vertical {
        V::VERTICAL
    }

    pub(crate) fn resource<M>(&self) -> ResourceClient<'a, E, M> {
        ResourceClient {
            executor: self.executor,
            options: self.options.clone(),
            vertical: V::VERTICAL,
            _resource: PhantomData,
        }
    }
}

/// 單一 resource 的 client，`M` 是 resource 標記型別
pub struct ResourceClient<'a, E, M> {
    executor: &'a E,
    options: RequestOptions,
    vertical: Vertical,
    _resource: PhantomData<M>,
}

impl<'a, E: Executor, M> ResourceClient<'a, E, M> {
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    pub(crate) fn vertical(&self) -> Vertical {
        self.vertical
    }

    pub(crate) fn call<R: Send + 'a>(&self, endpoint: Result<Endpoint<R>>) -> E::Output<'a, R> {
        self.executor.execute(endpoint, self.options.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_paths() {
        assert_eq!(Vertical::Ticketing.base_path(), "/api/ticketing/v1");
        assert_eq!(Vertical::FileStorage.path("files"), "/api/filestorage/v1/files");
        assert_eq!(Vertical::Hris.path("/employees"), "/api/hris/v1/employees");
    }

    #[test]
    fn test_vertical_from_str() {
        assert_eq!("file-storage".parse::<Vertical>().unwrap(), Vertical::FileStorage);
        assert_eq!("ATS".parse::<Vertical>().unwrap(), Vertical::Ats);
        assert!("payroll".parse::<Vertical>().is_err());
    }
}
