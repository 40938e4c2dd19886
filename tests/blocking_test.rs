use httpmock::prelude::*;
use merge_client::models::common::{IgnoreCommonModelRequest, IgnoreReason};
use merge_client::resources::filestorage::files::DownloadParams;
use merge_client::resources::hris::employees::{
    EmployeeExpand, EmployeeListParams, EmployeeRetrieveParams, EmploymentStatus,
};
use merge_client::resources::hris::employments::{EmploymentType, PayPeriod};
use merge_client::{BlockingMergeClient, ClientConfig, MergeError};
use serde_json::json;

const EMPLOYEE: &str = include_str!("fixtures/employee.json");

// reqwest::blocking 不能在 tokio runtime 內使用，這裡全部是一般 #[test]
fn client_for(server: &MockServer) -> BlockingMergeClient {
    let config = ClientConfig::new("test_api_key")
        .with_account_token("test_account_token")
        .with_base_url(server.base_url());
    BlockingMergeClient::new(config).unwrap()
}

#[test]
fn test_blocking_list_decodes_employees() {
    let server = MockServer::start();
    let employee: serde_json::Value = serde_json::from_str(EMPLOYEE).unwrap();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/hris/v1/employees")
            .header("Authorization", "Bearer test_api_key")
            .query_param("employment_status", "ACTIVE")
            .query_param("expand", "employments");
        then.status(200).json_body(json!({
            "next": null,
            "previous": null,
            "results": [employee]
        }));
    });

    let client = client_for(&server);
    let params = EmployeeListParams {
        employment_status: Some(EmploymentStatus::Active),
        expand: vec![EmployeeExpand::Employments],
        ..Default::default()
    };
    let page = client.hris().employees().list(&params).unwrap();

    mock.assert();
    assert_eq!(page.results.len(), 1);
    let greg = &page.results[0];
    assert_eq!(greg.first_name.as_deref(), Some("Greg"));
    assert_eq!(greg.last_name.as_deref(), Some("Hirsch"));
    assert_eq!(greg.employment_status, Some(EmploymentStatus::Active));
    let employment = greg.employments[0].model().unwrap();
    assert_eq!(employment.pay_period, Some(PayPeriod::Year));
    assert_eq!(employment.employment_type, Some(EmploymentType::FullTime));
    assert_eq!(
        greg.manager.as_ref().and_then(|m| m.id()),
        Some("0048ea5b-911e-4dff-9364-92070dea62ff")
    );
}

#[test]
fn test_blocking_retrieve_error_is_unchanged() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/hris/v1/employees/emp-1");
        then.status(401).body(r#"{"detail":"Invalid API key"}"#);
    });

    let client = client_for(&server);
    let err = client
        .hris()
        .employees()
        .retrieve("emp-1", &EmployeeRetrieveParams::default())
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(matches!(err, MergeError::ApiError { ref body, .. } if body.contains("Invalid API key")));
}

#[test]
fn test_blocking_ignore_returns_unit() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/hris/v1/employees/ignore/emp-1")
            .json_body(json!({"reason": "GDPR", "message": "requested removal"}));
        then.status(200);
    });

    let client = client_for(&server);
    let request = IgnoreCommonModelRequest {
        reason: IgnoreReason::Gdpr,
        message: Some("requested removal".to_string()),
    };
    client.hris().employees().ignore("emp-1", &request).unwrap();
    mock.assert();
}

#[test]
fn test_blocking_delete_account() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/crm/v1/delete-account")
            .header("X-Account-Token", "test_account_token");
        then.status(200);
    });

    let client = client_for(&server);
    client.crm().delete_account().delete().unwrap();
    mock.assert();
}

#[test]
fn test_blocking_file_download_returns_bytes() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/filestorage/v1/files/file-1/download")
            .header("accept", "*/*")
            .query_param("mime_type", "application/pdf");
        then.status(200)
            .header("content-type", "application/pdf")
            .body("%PDF-1.4 fake");
    });

    let client = client_for(&server);
    let params = DownloadParams {
        mime_type: Some("application/pdf".to_string()),
    };
    let bytes = client.filestorage().files().download("file-1", &params).unwrap();

    mock.assert();
    assert_eq!(bytes, b"%PDF-1.4 fake".to_vec());
}
