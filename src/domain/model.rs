use crate::core::query;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一次 API 呼叫的純資料描述，`path` 相對於環境的 base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// `Accept` 標頭，下載端點不要求 JSON
    pub accept: &'static str,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            accept: "application/json",
        }
    }

    /// 取得查詢參數值（測試與除錯用）
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

type Decoder<R> = fn(&ApiResponse) -> Result<R>;

/// 請求描述加上回應解碼方式。
///
/// 建構時不做任何 I/O，交給 `Executor` 決定同步或非同步送出。
pub struct Endpoint<R> {
    request: ApiRequest,
    decode: Decoder<R>,
}

impl<R: DeserializeOwned> Endpoint<R> {
    /// JSON 回應，空內容視為 `null`，所以 `()` 也能解碼
    pub fn json(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            request: ApiRequest::new(method, path),
            decode: decode_json::<R>,
        }
    }
}

impl Endpoint<Vec<u8>> {
    /// 原始位元組回應（檔案下載）
    pub fn bytes(method: HttpMethod, path: impl Into<String>) -> Self {
        let mut request = ApiRequest::new(method, path);
        request.accept = "*/*";
        Self {
            request,
            decode: decode_bytes,
        }
    }
}

impl<R> Endpoint<R> {
    pub fn with_query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self> {
        self.request.query = query::to_pairs(params)?;
        Ok(self)
    }

    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.request.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    pub fn decode(&self, response: &ApiResponse) -> Result<R> {
        (self.decode)(response)
    }
}

impl<R> fmt::Debug for Endpoint<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

fn decode_json<R: DeserializeOwned>(response: &ApiResponse) -> Result<R> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &response.body
    };
    Ok(serde_json::from_slice(body)?)
}

fn decode_bytes(response: &ApiResponse) -> Result<Vec<u8>> {
    Ok(response.body.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MergeError;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_json_endpoint_decodes_body() {
        let endpoint: Endpoint<Item> = Endpoint::json(HttpMethod::Get, "/items/1");
        let item = endpoint.decode(&response(200, r#"{"id":"1"}"#)).unwrap();
        assert_eq!(item, Item { id: "1".to_string() });
    }

    #[test]
    fn test_empty_body_decodes_as_unit() {
        let endpoint: Endpoint<()> = Endpoint::json(HttpMethod::Post, "/delete-account");
        assert!(endpoint.decode(&response(200, "")).is_ok());
        assert!(endpoint.decode(&response(204, "  \n")).is_ok());
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let endpoint: Endpoint<Item> = Endpoint::json(HttpMethod::Get, "/items/1");
        let err = endpoint.decode(&response(200, "not json")).unwrap_err();
        assert!(matches!(err, MergeError::SerializationError(_)));
    }

    #[test]
    fn test_bytes_endpoint_returns_raw_body() {
        let endpoint = Endpoint::bytes(HttpMethod::Get, "/files/1/download");
        let bytes = endpoint.decode(&response(200, "%PDF-1.4")).unwrap();
        assert_eq!(bytes, b"%PDF-1.4".to_vec());
    }

    #[test]
    fn test_with_body_sets_json() {
        let endpoint: Endpoint<Item> = Endpoint::json(HttpMethod::Post, "/items")
            .with_body(&serde_json::json!({"model": {"name": "x"}}))
            .unwrap();
        assert_eq!(
            endpoint.request().body,
            Some(serde_json::json!({"model": {"name": "x"}}))
        );
    }
}
