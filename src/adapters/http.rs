use crate::config::{ClientConfig, RequestOptions, ACCOUNT_TOKEN_HEADER, USER_AGENT};
use crate::domain::model::{ApiRequest, ApiResponse, HttpMethod};
use crate::domain::ports::{BlockingTransport, Transport};
use crate::utils::error::{MergeError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Method;
use url::Url;

/// 每次請求都會帶的標頭與查詢參數，同步與非同步共用
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub timeout: std::time::Duration,
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// HTTP 標頭名稱不分大小寫，已存在就取代
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value));
}

/// 合併設定與單次選項：認證、account token、額外標頭、逾時
pub fn prepare(
    config: &ClientConfig,
    request: &ApiRequest,
    options: &RequestOptions,
) -> Result<PreparedRequest> {
    let api_key = options
        .api_key
        .as_deref()
        .unwrap_or(config.api_key.as_str());
    if api_key.trim().is_empty() {
        return Err(MergeError::MissingConfigError {
            field: "api_key".to_string(),
        });
    }

    let mut headers = Vec::new();
    set_header(&mut headers, AUTHORIZATION.as_str(), format!("Bearer {}", api_key));
    set_header(&mut headers, ACCEPT.as_str(), request.accept.to_string());

    if let Some(token) = options
        .account_token
        .as_deref()
        .or(config.account_token.as_deref())
    {
        set_header(&mut headers, ACCOUNT_TOKEN_HEADER, token.to_string());
    }

    // 同名標頭以後設定的為準，單次選項最後套用
    for (name, value) in config.headers.iter().chain(
        options
            .additional_headers
            .iter()
            .map(|(name, value)| (name, value)),
    ) {
        set_header(&mut headers, name, value.clone());
    }

    let mut query = request.query.clone();
    query.extend(options.additional_query.iter().cloned());

    Ok(PreparedRequest {
        method: to_reqwest_method(request.method),
        url: Url::parse(&format!("{}{}", config.base_url(), request.path))?.into(),
        headers,
        query,
        body: request.body.clone(),
        timeout: options.timeout.unwrap_or_else(|| config.timeout()),
    })
}

fn collect_headers(headers: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

/// 以 `reqwest::Client` 實作的共用連線層
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest, options: &RequestOptions) -> Result<ApiResponse> {
        let prepared = prepare(&self.config, request, options)?;
        tracing::debug!("📡 {} {}", prepared.method, prepared.url);

        let mut builder = self
            .client
            .request(prepared.method, &prepared.url)
            .timeout(prepared.timeout);
        for (name, value) in &prepared.headers {
            builder = builder.header(name, value);
        }
        if !prepared.query.is_empty() {
            builder = builder.query(&prepared.query);
        }
        if let Some(body) = &prepared.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        tracing::debug!("📡 Response status: {}", status);

        let headers = collect_headers(response.headers());
        let body = response.bytes().await?.to_vec();

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

/// 以 `reqwest::blocking::Client` 實作的同步連線層
#[derive(Debug, Clone)]
pub struct BlockingHttpTransport {
    config: ClientConfig,
    client: reqwest::blocking::Client,
}

impl BlockingHttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl BlockingTransport for BlockingHttpTransport {
    fn send(&self, request: &ApiRequest, options: &RequestOptions) -> Result<ApiResponse> {
        let prepared = prepare(&self.config, request, options)?;
        tracing::debug!("📡 {} {} (blocking)", prepared.method, prepared.url);

        let mut builder = self
            .client
            .request(prepared.method, &prepared.url)
            .timeout(prepared.timeout);
        for (name, value) in &prepared.headers {
            builder = builder.header(name, value);
        }
        if !prepared.query.is_empty() {
            builder = builder.query(&prepared.query);
        }
        if let Some(body) = &prepared.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        tracing::debug!("📡 Response status: {}", status);

        let headers = collect_headers(response.headers());
        let body = response.bytes()?.to_vec();

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
