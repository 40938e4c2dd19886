//! 各 resource 共用的端點樣板。
//!
//! 每個 Merge resource 都遵循同一組 CRUD 路徑慣例，這裡只負責組出
//! `Endpoint`，不做任何 I/O。

use crate::core::query::encode_path_segment;
use crate::domain::model::{Endpoint, HttpMethod};
use crate::models::common::{
    IgnoreCommonModelRequest, MetaResponse, ModelEnvelope, ModelResponse, Paginated, WriteParams,
};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn item_path(base: &str, id: &str) -> String {
    format!("{}/{}", base, encode_path_segment(id))
}

pub fn list<T, Q>(base: &str, params: &Q) -> Result<Endpoint<Paginated<T>>>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    Endpoint::json(HttpMethod::Get, base).with_query(params)
}

pub fn retrieve<T, Q>(base: &str, id: &str, params: &Q) -> Result<Endpoint<T>>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    Endpoint::json(HttpMethod::Get, item_path(base, id)).with_query(params)
}

pub fn create<T, B>(base: &str, model: &B, params: &WriteParams) -> Result<Endpoint<ModelResponse<T>>>
where
    T: DeserializeOwned,
    B: Serialize,
{
    Endpoint::json(HttpMethod::Post, base)
        .with_query(params)?
        .with_body(&ModelEnvelope { model })
}

pub fn partial_update<T, B>(
    base: &str,
    id: &str,
    model: &B,
    params: &WriteParams,
) -> Result<Endpoint<ModelResponse<T>>>
where
    T: DeserializeOwned,
    B: Serialize,
{
    Endpoint::json(HttpMethod::Patch, item_path(base, id))
        .with_query(params)?
        .with_body(&ModelEnvelope { model })
}

pub fn meta_post(base: &str) -> Result<Endpoint<MetaResponse>> {
    Ok(Endpoint::json(HttpMethod::Get, format!("{}/meta/post", base)))
}

pub fn meta_patch(base: &str, id: &str) -> Result<Endpoint<MetaResponse>> {
    Ok(Endpoint::json(
        HttpMethod::Get,
        format!("{}/meta/patch/{}", base, encode_path_segment(id)),
    ))
}

pub fn ignore(base: &str, id: &str, body: &IgnoreCommonModelRequest) -> Result<Endpoint<()>> {
    Endpoint::json(
        HttpMethod::Post,
        format!("{}/ignore/{}", base, encode_path_segment(id)),
    )
    .with_body(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::{ListParams, RetrieveParams};

    const BASE: &str = "/api/ticketing/v1/tickets";

    #[test]
    fn test_list_uses_base_path_and_query() {
        let params = ListParams::default().with_page_size(10);
        let endpoint = list::<serde_json::Value, _>(BASE, &params).unwrap();
        let request = endpoint.request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, BASE);
        assert_eq!(request.query_value("page_size"), Some("10"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_retrieve_appends_escaped_id() {
        let endpoint =
            retrieve::<serde_json::Value, _>(BASE, "a/b", &RetrieveParams::default()).unwrap();
        assert_eq!(endpoint.request().path, "/api/ticketing/v1/tickets/a%2Fb");
        assert!(endpoint.request().query.is_empty());
    }

    #[test]
    fn test_create_wraps_model() {
        let params = WriteParams {
            is_debug_mode: Some(true),
            run_async: None,
        };
        let endpoint = create::<serde_json::Value, _>(
            BASE,
            &serde_json::json!({"name": "Broken printer"}),
            &params,
        )
        .unwrap();
        let request = endpoint.request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.body,
            Some(serde_json::json!({"model": {"name": "Broken printer"}}))
        );
        assert_eq!(request.query, vec![("is_debug_mode".to_string(), "true".to_string())]);
    }

    #[test]
    fn test_meta_paths() {
        assert_eq!(meta_post(BASE).unwrap().request().path, format!("{}/meta/post", BASE));
        assert_eq!(
            meta_patch(BASE, "123").unwrap().request().path,
            format!("{}/meta/patch/123", BASE)
        );
    }

    #[test]
    fn test_ignore_posts_reason() {
        let endpoint = ignore(BASE, "123", &IgnoreCommonModelRequest::default()).unwrap();
        assert_eq!(endpoint.request().method, HttpMethod::Post);
        assert_eq!(endpoint.request().path, format!("{}/ignore/123", BASE));
        assert_eq!(
            endpoint.request().body,
            Some(serde_json::json!({"reason": "GENERAL_CUSTOMER_REQUEST"}))
        );
    }
}
