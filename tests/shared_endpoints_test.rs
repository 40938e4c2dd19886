use httpmock::prelude::*;
use merge_client::models::common::{
    DataPassthroughRequest, EndUserDetailsRequest, LinkedAccountsListParams, PassthroughMethod,
    RequestFormat,
};
use merge_client::{ClientConfig, MergeClient, RequestOptions};
use serde_json::json;

const ACCOUNT_DETAILS: &str = include_str!("fixtures/account_details.json");
const REMOTE_RESPONSE: &str = include_str!("fixtures/remote_response.json");

fn client_for(server: &MockServer) -> MergeClient {
    let config = ClientConfig::new("test_api_key")
        .with_account_token("test_account_token")
        .with_base_url(server.base_url());
    MergeClient::new(config).unwrap()
}

#[tokio::test]
async fn test_account_details_per_vertical() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/hris/v1/account-details")
                .header("X-Account-Token", "test_account_token");
            then.status(200).body(ACCOUNT_DETAILS);
        })
        .await;

    let client = client_for(&server);
    let details = client.hris().account_details().retrieve().await.unwrap();

    mock.assert_async().await;
    assert_eq!(details.integration.as_deref(), Some("BambooHR"));
    assert_eq!(details.category.as_deref(), Some("hris"));
    assert_eq!(details.status.as_deref(), Some("COMPLETE"));
    assert_eq!(details.is_duplicate, Some(false));
}

#[tokio::test]
async fn test_passthrough_forwards_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/crm/v1/passthrough")
                .json_body(json!({
                    "method": "GET",
                    "path": "/scooters",
                    "request_format": "JSON"
                }));
            then.status(200).body(REMOTE_RESPONSE);
        })
        .await;

    let client = client_for(&server);
    let mut request = DataPassthroughRequest::new(PassthroughMethod::Get, "/scooters");
    request.request_format = Some(RequestFormat::Json);
    let response = client.crm().passthrough().create(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.method, "GET");
    assert_eq!(response.path, "/scooters");
    assert_eq!(response.status, 200);
    assert_eq!(
        response.response,
        Some(json!({"scooters": [{"company": "Lime", "model": "Gen 2.5"}]}))
    );
}

#[tokio::test]
async fn test_async_passthrough_receipt_round() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/ticketing/v1/async-passthrough");
            then.status(200)
                .json_body(json!({"async_passthrough_receipt_id": "r-42"}));
        })
        .await;
    let fetch = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/ticketing/v1/async-passthrough/r-42");
            then.status(200).body(REMOTE_RESPONSE);
        })
        .await;

    let client = client_for(&server);
    let request = DataPassthroughRequest::new(PassthroughMethod::Get, "/scooters");
    let receipt = client
        .ticketing()
        .async_passthrough()
        .create(&request)
        .await
        .unwrap();
    let response = client
        .ticketing()
        .async_passthrough()
        .retrieve(&receipt.async_passthrough_receipt_id)
        .await
        .unwrap();

    create.assert_async().await;
    fetch.assert_async().await;
    assert_eq!(receipt.async_passthrough_receipt_id, "r-42");
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_linked_accounts_filters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/accounting/v1/linked-accounts")
                .query_param("category", "accounting")
                .query_param("include_duplicates", "false")
                .query_param("page_size", "50");
            then.status(200).json_body(json!({
                "next": null,
                "previous": null,
                "results": [{
                    "id": "la-1",
                    "category": "accounting",
                    "status": "COMPLETE",
                    "end_user_origin_id": "12345",
                    "end_user_organization_name": "Waystar Royco",
                    "end_user_email_address": "kendall@waystar.com",
                    "webhook_listener_url": "https://api.merge.dev/hook",
                    "account_type": "PRODUCTION",
                    "completed_at": "2024-08-26T20:11:19Z",
                    "integration": {
                        "name": "QuickBooks Online",
                        "categories": ["accounting"],
                        "slug": "quickbooks-online"
                    }
                }]
            }));
        })
        .await;

    let client = client_for(&server);
    let params = LinkedAccountsListParams {
        category: Some("accounting".to_string()),
        include_duplicates: Some(false),
        page_size: Some(50),
        ..Default::default()
    };
    let page = client
        .accounting()
        .linked_accounts()
        .list(&params)
        .await
        .unwrap();

    mock.assert_async().await;
    let account = &page.results[0];
    assert_eq!(account.id, "la-1");
    assert_eq!(account.end_user_organization_name, "Waystar Royco");
    assert_eq!(
        account.integration.as_ref().map(|i| i.name.as_str()),
        Some("QuickBooks Online")
    );
}

#[tokio::test]
async fn test_account_token_and_link_token() {
    let server = MockServer::start_async().await;
    let token = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/ats/v1/account-token/public-1")
                .header("Authorization", "Bearer other_key");
            then.status(200).json_body(json!({
                "account_token": "acct_new",
                "integration": {"name": "Greenhouse", "categories": ["ats"]}
            }));
        })
        .await;
    let link = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/ats/v1/link-token")
                .json_body(json!({
                    "end_user_email_address": "kendall@waystar.com",
                    "end_user_organization_name": "Waystar Royco",
                    "end_user_origin_id": "12345",
                    "categories": ["ats"],
                    "integration": "greenhouse"
                }));
            then.status(200).json_body(json!({
                "link_token": "lt-1",
                "integration_name": "Greenhouse"
            }));
        })
        .await;

    let client = client_for(&server);
    let ats = client
        .ats()
        .with_options(RequestOptions::new().api_key("other_key"));
    let account_token = ats.account_token().retrieve("public-1").await.unwrap();

    let request = EndUserDetailsRequest {
        end_user_email_address: "kendall@waystar.com".to_string(),
        end_user_organization_name: "Waystar Royco".to_string(),
        end_user_origin_id: "12345".to_string(),
        categories: vec!["ats".to_string()],
        integration: Some("greenhouse".to_string()),
        ..Default::default()
    };
    let link_token = client.ats().link_token().create(&request).await.unwrap();

    token.assert_async().await;
    link.assert_async().await;
    assert_eq!(account_token.account_token, "acct_new");
    assert_eq!(account_token.integration.name, "Greenhouse");
    assert_eq!(link_token.link_token, "lt-1");
}

#[tokio::test]
async fn test_sync_status_and_force_resync() {
    let server = MockServer::start_async().await;
    let status = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/filestorage/v1/sync-status");
            then.status(200).json_body(json!({
                "next": null,
                "previous": null,
                "results": [{
                    "model_name": "File",
                    "model_id": "filestorage.File",
                    "status": "DONE",
                    "is_initial_sync": false
                }]
            }));
        })
        .await;
    let resync = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/filestorage/v1/sync-status/resync");
            then.status(200).json_body(json!([{
                "model_name": "File",
                "model_id": "filestorage.File",
                "status": "SYNCING",
                "is_initial_sync": false
            }]));
        })
        .await;

    let client = client_for(&server);
    let page = client
        .filestorage()
        .sync_status()
        .list(&Default::default())
        .await
        .unwrap();
    let statuses = client.filestorage().force_resync().create().await.unwrap();

    status.assert_async().await;
    resync.assert_async().await;
    assert_eq!(page.results[0].status, "DONE");
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].status, "SYNCING");
}
