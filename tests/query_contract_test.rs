//! 每個 vertical 的查詢參數：有設定的原樣送出，沒設定的完全不出現。

use chrono::{TimeZone, Utc};
use merge_client::models::common::ListParams;
use merge_client::resources::accounting::contacts::ContactListParams as AccountingContactListParams;
use merge_client::resources::ats::candidates::{CandidateExpand, CandidateListParams};
use merge_client::resources::ats::jobs::{JobListParams, JobStatus};
use merge_client::resources::crm::opportunities::{OpportunityListParams, OpportunityStatus};
use merge_client::resources::filestorage::files::{FileExpand, FileListParams};
use merge_client::resources::hris::time_off::{RequestType, TimeOffListParams, TimeOffStatus};
use merge_client::resources::ticketing::comments::{CommentExpand, CommentListParams};
use merge_client::{
    ApiRequest, ApiResponse, BlockingMergeClient, BlockingTransport, RequestOptions, Result,
};
use std::sync::Mutex;

const EMPTY_PAGE: &str = r#"{"next":null,"previous":null,"results":[]}"#;

#[derive(Default)]
struct RecordingTransport {
    seen: Mutex<Vec<ApiRequest>>,
}

impl BlockingTransport for RecordingTransport {
    fn send(&self, request: &ApiRequest, _options: &RequestOptions) -> Result<ApiResponse> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(ApiResponse {
            status: 200,
            headers: Vec::new(),
            body: EMPTY_PAGE.as_bytes().to_vec(),
        })
    }
}

fn last_request(client: &BlockingMergeClient<RecordingTransport>) -> ApiRequest {
    client
        .transport()
        .seen
        .lock()
        .unwrap()
        .last()
        .cloned()
        .unwrap()
}

fn assert_query(request: &ApiRequest, expected: &[(&str, &str)]) {
    let mut actual: Vec<(&str, &str)> = request
        .query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    actual.sort();
    let mut expected = expected.to_vec();
    expected.sort();
    assert_eq!(actual, expected, "query for {}", request.path);
}

fn client() -> BlockingMergeClient<RecordingTransport> {
    BlockingMergeClient::with_transport(RecordingTransport::default())
}

#[test]
fn test_default_params_send_no_query() {
    let client = client();

    client.accounting().invoices().list(&Default::default()).unwrap();
    assert!(last_request(&client).query.is_empty());

    client.ats().candidates().list(&Default::default()).unwrap();
    assert!(last_request(&client).query.is_empty());

    client.crm().leads().list(&Default::default()).unwrap();
    assert!(last_request(&client).query.is_empty());

    client.filestorage().folders().list(&Default::default()).unwrap();
    assert!(last_request(&client).query.is_empty());

    client.hris().employments().list(&Default::default()).unwrap();
    assert!(last_request(&client).query.is_empty());

    client.ticketing().projects().list(&Default::default()).unwrap();
    assert!(last_request(&client).query.is_empty());
}

#[test]
fn test_accounting_contacts_query() {
    let client = client();
    let params = AccountingContactListParams {
        common: ListParams::default().with_cursor("cD0yMDIx"),
        is_customer: Some("true".to_string()),
        name: Some("Gil Feig's pickleball team".to_string()),
        ..Default::default()
    };
    client.accounting().contacts().list(&params).unwrap();

    let request = last_request(&client);
    assert_eq!(request.path, "/api/accounting/v1/contacts");
    assert_query(
        &request,
        &[
            ("cursor", "cD0yMDIx"),
            ("is_customer", "true"),
            ("name", "Gil Feig's pickleball team"),
        ],
    );
}

#[test]
fn test_ats_query() {
    let client = client();
    let params = CandidateListParams {
        expand: vec![CandidateExpand::Applications, CandidateExpand::Attachments],
        email_addresses: Some("hello@merge.dev".to_string()),
        ..Default::default()
    };
    client.ats().candidates().list(&params).unwrap();
    assert_query(
        &last_request(&client),
        &[
            ("email_addresses", "hello@merge.dev"),
            ("expand", "applications,attachments"),
        ],
    );

    let params = JobListParams {
        status: Some(JobStatus::Open),
        common: ListParams {
            include_deleted_data: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };
    client.ats().jobs().list(&params).unwrap();
    assert_query(
        &last_request(&client),
        &[("include_deleted_data", "false"), ("status", "OPEN")],
    );
}

#[test]
fn test_crm_query() {
    let client = client();
    let params = OpportunityListParams {
        status: Some(OpportunityStatus::Won),
        owner_id: Some("u-1".to_string()),
        remote_created_after: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
        ..Default::default()
    };
    client.crm().opportunities().list(&params).unwrap();
    assert_query(
        &last_request(&client),
        &[
            ("owner_id", "u-1"),
            ("remote_created_after", "2024-01-02T03:04:05Z"),
            ("status", "WON"),
        ],
    );
}

#[test]
fn test_filestorage_query() {
    let client = client();
    let params = FileListParams {
        expand: vec![FileExpand::Folder, FileExpand::Permissions],
        mime_type: Some("application/pdf".to_string()),
        common: ListParams::default().with_page_size(100),
        ..Default::default()
    };
    client.filestorage().files().list(&params).unwrap();
    assert_query(
        &last_request(&client),
        &[
            ("expand", "folder,permissions"),
            ("mime_type", "application/pdf"),
            ("page_size", "100"),
        ],
    );
}

#[test]
fn test_hris_query() {
    let client = client();
    let params = TimeOffListParams {
        employee_id: Some("emp-1".to_string()),
        request_type: Some(RequestType::JuryDuty),
        status: Some(TimeOffStatus::Approved),
        ..Default::default()
    };
    client.hris().time_off().list(&params).unwrap();
    let request = last_request(&client);
    assert_eq!(request.path, "/api/hris/v1/time-off");
    assert_query(
        &request,
        &[
            ("employee_id", "emp-1"),
            ("request_type", "JURY_DUTY"),
            ("status", "APPROVED"),
        ],
    );
}

#[test]
fn test_ticketing_query() {
    let client = client();
    let params = CommentListParams {
        ticket_id: Some("t-1".to_string()),
        expand: vec![CommentExpand::User],
        common: ListParams {
            include_remote_data: Some(true),
            ..Default::default()
        },
        ..Default::default()
    };
    client.ticketing().comments().list(&params).unwrap();
    assert_query(
        &last_request(&client),
        &[
            ("expand", "user"),
            ("include_remote_data", "true"),
            ("ticket_id", "t-1"),
        ],
    );
}
