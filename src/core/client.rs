use crate::adapters::http::{BlockingHttpTransport, HttpTransport};
use crate::config::{ClientConfig, RequestOptions};
use crate::domain::model::{ApiResponse, Endpoint};
use crate::domain::ports::{BlockingTransport, BoxFuture, Executor, Transport};
use crate::resources::accounting::AccountingClient;
use crate::resources::ats::AtsClient;
use crate::resources::crm::CrmClient;
use crate::resources::filestorage::FileStorageClient;
use crate::resources::hris::HrisClient;
use crate::resources::ticketing::TicketingClient;
use crate::resources::VerticalClient;
use crate::utils::error::{MergeError, Result};

/// 非同步客戶端，所有 resource 方法回傳 future
#[derive(Debug, Clone)]
pub struct MergeClient<T = HttpTransport> {
    transport: T,
    options: RequestOptions,
}

impl MergeClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> MergeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            options: RequestOptions::default(),
        }
    }

    /// 所有呼叫預設帶入的選項
    pub fn with_default_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 送出一個端點並解碼回應
    pub async fn send<R>(&self, endpoint: Endpoint<R>, options: &RequestOptions) -> Result<R> {
        let response = self.transport.send(endpoint.request(), options).await?;
        check_status(&response)?;
        endpoint.decode(&response)
    }

    pub fn accounting(&self) -> AccountingClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }

    pub fn ats(&self) -> AtsClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }

    pub fn crm(&self) -> CrmClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }

    pub fn filestorage(&self) -> FileStorageClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }

    pub fn hris(&self) -> HrisClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }

    pub fn ticketing(&self) -> TicketingClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }
}

impl<T: Transport> Executor for MergeClient<T> {
    type Output<'a, R> = BoxFuture<'a, Result<R>>
    where
        Self: 'a,
        R: 'a;

    fn execute<'a, R>(
        &'a self,
        endpoint: Result<Endpoint<R>>,
        options: RequestOptions,
    ) -> Self::Output<'a, R>
    where
        R: Send + 'a,
    {
        Box::pin(async move { self.send(endpoint?, &options).await })
    }
}

/// 同步客戶端，所有 resource 方法直接回傳 `Result`。
///
/// 底層使用 `reqwest::blocking`，不可在 tokio runtime 內呼叫。
#[derive(Debug, Clone)]
pub struct BlockingMergeClient<B = BlockingHttpTransport> {
    transport: B,
    options: RequestOptions,
}

impl BlockingMergeClient<BlockingHttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(BlockingHttpTransport::new(config)?))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<B: BlockingTransport> BlockingMergeClient<B> {
    pub fn with_transport(transport: B) -> Self {
        Self {
            transport,
            options: RequestOptions::default(),
        }
    }

    pub fn with_default_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn transport(&self) -> &B {
        &self.transport
    }

    pub fn send<R>(&self, endpoint: Endpoint<R>, options: &RequestOptions) -> Result<R> {
        let response = self.transport.send(endpoint.request(), options)?;
        check_status(&response)?;
        endpoint.decode(&response)
    }

    pub fn accounting(&self) -> AccountingClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }

    pub fn ats(&self) -> AtsClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }

    pub fn crm(&self) -> CrmClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }

    pub fn filestorage(&self) -> FileStorageClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }

    pub fn hris(&self) -> HrisClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }

    pub fn ticketing(&self) -> TicketingClient<'_, Self> {
        VerticalClient::new(self, self.options.clone())
    }
}

impl<B: BlockingTransport> Executor for BlockingMergeClient<B> {
    type Output<'a, R> = Result<R>
    where
        Self: 'a,
        R: 'a;

    fn execute<'a, R>(
        &'a self,
        endpoint: Result<Endpoint<R>>,
        options: RequestOptions,
    ) -> Self::Output<'a, R>
    where
        R: Send + 'a,
    {
        self.send(endpoint?, &options)
    }
}

/// 非 2xx 原樣轉成 `ApiError`，不重試也不轉譯
fn check_status(response: &ApiResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    tracing::warn!("❌ Merge API returned status {}", response.status);
    Err(MergeError::ApiError {
        status: response.status,
        body: response.text(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ApiRequest, HttpMethod};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticTransport {
        status: u16,
        body: &'static str,
        seen: Mutex<Vec<ApiRequest>>,
    }

    impl StaticTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn respond(&self, request: &ApiRequest) -> ApiResponse {
            self.seen.lock().unwrap().push(request.clone());
            ApiResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.as_bytes().to_vec(),
            }
        }
    }

    #[async_trait]
    impl Transport for StaticTransport {
        async fn send(&self, request: &ApiRequest, _options: &RequestOptions) -> Result<ApiResponse> {
            Ok(self.respond(request))
        }
    }

    impl BlockingTransport for StaticTransport {
        fn send(&self, request: &ApiRequest, _options: &RequestOptions) -> Result<ApiResponse> {
            Ok(self.respond(request))
        }
    }

    #[tokio::test]
    async fn test_async_send_decodes() {
        let client = MergeClient::with_transport(StaticTransport::new(200, r#"{"id":"1"}"#));
        let endpoint: Endpoint<serde_json::Value> = Endpoint::json(HttpMethod::Get, "/x");
        let value = client.send(endpoint, &RequestOptions::default()).await.unwrap();
        assert_eq!(value["id"], "1");
    }

    #[test]
    fn test_blocking_non_success_is_api_error() {
        let client =
            BlockingMergeClient::with_transport(StaticTransport::new(404, r#"{"detail":"Not found."}"#));
        let endpoint: Endpoint<serde_json::Value> = Endpoint::json(HttpMethod::Get, "/x");
        let err = client.send(endpoint, &RequestOptions::default()).unwrap_err();
        match err {
            MergeError::ApiError { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, r#"{"detail":"Not found."}"#);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builder_error_skips_transport() {
        let transport = StaticTransport::new(200, "{}");
        let client = BlockingMergeClient::with_transport(transport);
        let result: Result<serde_json::Value> = client.execute(
            Err(MergeError::QueryError {
                message: "bad".to_string(),
            }),
            RequestOptions::default(),
        );
        assert!(matches!(result, Err(MergeError::QueryError { .. })));
        assert!(client.transport().seen.lock().unwrap().is_empty());
    }
}
