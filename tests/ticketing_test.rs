use httpmock::prelude::*;
use merge_client::models::common::{ListParams, WriteParams};
use merge_client::resources::ticketing::tickets::{
    Priority, Ticket, TicketExpand, TicketListParams, TicketRequest, TicketRetrieveParams,
    TicketStatus,
};
use merge_client::{ClientConfig, MergeClient, MergeError, RequestOptions};
use serde_json::json;

const TICKET: &str = include_str!("fixtures/ticket.json");
const TICKETS_PAGE: &str = include_str!("fixtures/tickets_page.json");
const TICKET_SPARSE: &str = include_str!("fixtures/ticket_sparse.json");

fn client_for(server: &MockServer) -> MergeClient {
    let config = ClientConfig::new("test_api_key")
        .with_account_token("test_account_token")
        .with_base_url(server.base_url());
    MergeClient::new(config).unwrap()
}

#[tokio::test]
async fn test_list_sends_auth_and_supplied_params() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/ticketing/v1/tickets")
                .header("Authorization", "Bearer test_api_key")
                .header("X-Account-Token", "test_account_token")
                .query_param("page_size", "2")
                .query_param("status", "OPEN")
                .query_param("expand", "assignees,creator")
                .query_param("tags", "inbound,urgent");
            then.status(200)
                .header("content-type", "application/json")
                .body(TICKETS_PAGE);
        })
        .await;

    let client = client_for(&server);
    let params = TicketListParams {
        common: ListParams::default().with_page_size(2),
        status: Some(TicketStatus::Open),
        expand: vec![TicketExpand::Assignees, TicketExpand::Creator],
        tags: vec!["inbound".to_string(), "urgent".to_string()],
        ..Default::default()
    };
    let page = client.ticketing().tickets().list(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.results.len(), 2);
    assert_eq!(
        page.next_cursor(),
        Some("cD0yMDIxLTAxLTA2KzAzJTNBMjQlM0E1My40MzQzMjYlMkIwMCUzQTAw")
    );
    assert_eq!(page.results[1].status, Some(TicketStatus::InProgress));
    assert_eq!(page.results[0].priority, Some(Priority::High));
}

#[tokio::test]
async fn test_retrieve_decodes_fixture() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/ticketing/v1/tickets/0958cbc6-6040-430a-848e-aafacbadf4ae");
            then.status(200)
                .header("content-type", "application/json")
                .body(TICKET);
        })
        .await;

    let client = client_for(&server);
    let ticket = client
        .ticketing()
        .tickets()
        .retrieve(
            "0958cbc6-6040-430a-848e-aafacbadf4ae",
            &TicketRetrieveParams::default(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    let expected: Ticket = serde_json::from_str(TICKET).unwrap();
    assert_eq!(ticket, expected);
    assert_eq!(ticket.name.as_deref(), Some("Please add more integrations"));
    assert_eq!(ticket.tags, vec!["inbound", "integrations"]);
    let creator = ticket.creator.as_ref().and_then(|c| c.model()).unwrap();
    assert_eq!(creator.name.as_deref(), Some("Gil Feig"));
    assert_eq!(
        ticket.parent_ticket.as_ref().and_then(|p| p.id()),
        Some("75b33d04-30d2-4f3e-be45-27838bc94342")
    );
    assert!(ticket.completed_at.is_none());
}

#[tokio::test]
async fn test_retrieve_tolerates_null_arrays() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/ticketing/v1/tickets/1f7a3c2e-5b1d-4e0a-9a7c-6c2b8d1e4f00");
            then.status(200)
                .header("content-type", "application/json")
                .body(TICKET_SPARSE);
        })
        .await;

    let client = client_for(&server);
    let ticket = client
        .ticketing()
        .tickets()
        .retrieve(
            "1f7a3c2e-5b1d-4e0a-9a7c-6c2b8d1e4f00",
            &TicketRetrieveParams::default(),
        )
        .await
        .unwrap();

    assert_eq!(ticket.status, Some(TicketStatus::InProgress));
    assert!(ticket.tags.is_empty());
    assert!(ticket.assigned_teams.is_empty());
    assert!(ticket.attachments.is_empty());
    assert_eq!(ticket.assignees.len(), 1);
    assert_eq!(
        ticket.assignees[0].id(),
        Some("d2f972d0-2526-434b-9409-4c3b468e08f0")
    );
    assert!(ticket.creator.is_none());
    assert!(ticket.remote_data.is_none());
}

#[tokio::test]
async fn test_create_wraps_model_and_skips_unset_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/ticketing/v1/tickets")
                .query_param("is_debug_mode", "true")
                .json_body(json!({
                    "model": {
                        "name": "Please add more integrations",
                        "priority": "HIGH",
                        "tags": ["inbound"]
                    }
                }));
            then.status(201).json_body(json!({
                "model": {"id": "new-ticket", "name": "Please add more integrations"},
                "warnings": [],
                "errors": []
            }));
        })
        .await;

    let client = client_for(&server);
    let request = TicketRequest {
        name: Some("Please add more integrations".to_string()),
        priority: Some(Priority::High),
        tags: Some(vec!["inbound".to_string()]),
        ..Default::default()
    };
    let params = WriteParams {
        is_debug_mode: Some(true),
        run_async: None,
    };
    let response = client
        .ticketing()
        .tickets()
        .create(&request, &params)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.model.id.as_deref(), Some("new-ticket"));
    assert!(response.warnings.is_empty());
}

#[tokio::test]
async fn test_not_found_surfaces_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/ticketing/v1/tickets/missing");
            then.status(404).body(r#"{"detail":"Not found."}"#);
        })
        .await;

    let client = client_for(&server);
    let err = client
        .ticketing()
        .tickets()
        .retrieve("missing", &TicketRetrieveParams::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        MergeError::ApiError { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, r#"{"detail":"Not found."}"#);
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_per_call_options_override_account_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/ticketing/v1/users")
                .header("X-Account-Token", "other_token")
                .header("X-Trace", "abc")
                .query_param("extra", "1");
            then.status(200).json_body(json!({"next": null, "previous": null, "results": []}));
        })
        .await;

    let client = client_for(&server);
    let options = RequestOptions::new()
        .account_token("other_token")
        .header("X-Trace", "abc")
        .query("extra", "1");
    let page = client
        .ticketing()
        .with_options(options)
        .users()
        .list(&Default::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(page.results.is_empty());
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_collaborators_sub_list() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/ticketing/v1/tickets/t-1/collaborators")
                .query_param("expand", "roles");
            then.status(200).json_body(json!({
                "next": null,
                "previous": null,
                "results": [{"id": "u-1", "name": "Gil Feig", "roles": ["r-1"]}]
            }));
        })
        .await;

    let client = client_for(&server);
    let params = merge_client::resources::ticketing::tickets::CollaboratorsParams {
        expand: vec![merge_client::resources::ticketing::users::UserExpand::Roles],
        ..Default::default()
    };
    let page = client
        .ticketing()
        .tickets()
        .collaborators("t-1", &params)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.results[0].name.as_deref(), Some("Gil Feig"));
    assert_eq!(page.results[0].roles.len(), 1);
}
