use crate::config::RequestOptions;
use crate::domain::model::{ApiRequest, ApiResponse, Endpoint};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// 共用連線層（非同步），負責連線池、認證標頭與逾時
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest, options: &RequestOptions) -> Result<ApiResponse>;
}

/// 共用連線層（同步）
pub trait BlockingTransport: Send + Sync {
    fn send(&self, request: &ApiRequest, options: &RequestOptions) -> Result<ApiResponse>;
}

/// 同步與非同步客戶端的共同介面。
///
/// Resource client 只寫一次並對 `Executor` 泛型化：非同步版本的
/// `Output` 是 future，同步版本直接是 `Result`。
pub trait Executor {
    type Output<'a, R>
    where
        Self: 'a,
        R: 'a;

    fn execute<'a, R>(
        &'a self,
        endpoint: Result<Endpoint<R>>,
        options: RequestOptions,
    ) -> Self::Output<'a, R>
    where
        R: Send + 'a;
}
