use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// 列表端點的分頁回應
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// 下一頁的 cursor，直接放進 `ListParams::cursor` 使用
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// 可能只回傳 id，也可能依 `expand` 展開成完整物件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Model(Box<T>),
}

impl<T> Expandable<T> {
    pub fn id(&self) -> Option<&str> {
        match self {
            Expandable::Id(id) => Some(id),
            Expandable::Model(_) => None,
        }
    }

    pub fn model(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Model(model) => Some(model),
        }
    }
}

/// 陣列欄位可能是 `null`，元素也可能是 `null`；兩者都當作沒有資料
pub fn nullable_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteData {
    pub path: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationProblemSource {
    pub pointer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationProblem {
    #[serde(default)]
    pub source: Option<ValidationProblemSource>,
    pub title: String,
    pub detail: String,
    pub problem_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugModeLog {
    pub log_id: String,
    pub dashboard_view: String,
    #[serde(default)]
    pub log_summary: Option<serde_json::Value>,
}

/// 建立與更新端點的回應
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse<T> {
    pub model: T,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub warnings: Vec<ValidationProblem>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub errors: Vec<ValidationProblem>,
    #[serde(default)]
    pub logs: Option<Vec<DebugModeLog>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedAccountStatus {
    pub linked_account_status: String,
    pub can_make_request: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaResponse {
    pub request_schema: serde_json::Value,
    #[serde(default)]
    pub remote_field_classes: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<LinkedAccountStatus>,
    pub has_conditional_params: bool,
    pub has_required_linked_account_params: bool,
}

// ---------------------------------------------------------------------------
// 共用查詢參數。`None` 不會出現在查詢字串中。
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListParams {
    pub cursor: Option<String>,
    pub page_size: Option<u32>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub modified_after: Option<DateTime<Utc>>,
    pub modified_before: Option<DateTime<Utc>>,
    pub include_deleted_data: Option<bool>,
    pub include_remote_data: Option<bool>,
    pub include_shell_data: Option<bool>,
    pub remote_id: Option<String>,
}

impl ListParams {
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RetrieveParams {
    pub include_remote_data: Option<bool>,
    pub include_shell_data: Option<bool>,
}

/// 子列表端點（例如 `/tickets/{id}/collaborators`）的分頁參數
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubListParams {
    pub cursor: Option<String>,
    pub page_size: Option<u32>,
    pub include_deleted_data: Option<bool>,
    pub include_remote_data: Option<bool>,
    pub include_shell_data: Option<bool>,
}

/// 寫入端點的查詢參數
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WriteParams {
    pub is_debug_mode: Option<bool>,
    pub run_async: Option<bool>,
}

/// `{"model": ...}` 包裝，Merge 寫入端點的固定格式
#[derive(Debug, Serialize)]
pub(crate) struct ModelEnvelope<'a, B: Serialize> {
    pub model: &'a B,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IgnoreCommonModelRequest {
    pub reason: IgnoreReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IgnoreReason {
    #[default]
    GeneralCustomerRequest,
    Gdpr,
    Other,
}

// ---------------------------------------------------------------------------
// Linked account 相關的共用模型
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub integration: Option<String>,
    #[serde(default)]
    pub integration_slug: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub end_user_origin_id: Option<String>,
    #[serde(default)]
    pub end_user_organization_name: Option<String>,
    #[serde(default)]
    pub end_user_email_address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub webhook_listener_url: Option<String>,
    #[serde(default)]
    pub is_duplicate: Option<bool>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountIntegration {
    pub name: String,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub square_image: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub passthrough_available: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountToken {
    pub account_token: String,
    pub integration: AccountIntegration,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetailsAndActions {
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: String,
    #[serde(default)]
    pub status_detail: Option<String>,
    #[serde(default)]
    pub end_user_origin_id: Option<String>,
    pub end_user_organization_name: String,
    pub end_user_email_address: String,
    #[serde(default)]
    pub subdomain: Option<String>,
    pub webhook_listener_url: String,
    #[serde(default)]
    pub is_duplicate: Option<bool>,
    #[serde(default)]
    pub integration: Option<AccountIntegration>,
    pub account_type: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkedAccountsListParams {
    pub cursor: Option<String>,
    pub page_size: Option<u32>,
    pub category: Option<String>,
    pub end_user_email_address: Option<String>,
    pub end_user_organization_name: Option<String>,
    pub end_user_origin_id: Option<String>,
    /// 以逗號串接送出
    pub end_user_origin_ids: Vec<String>,
    pub id: Option<String>,
    pub ids: Vec<String>,
    pub include_duplicates: Option<bool>,
    pub integration_name: Option<String>,
    pub is_test_account: Option<bool>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOperation {
    pub model_name: String,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub available_operations: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub required_post_parameters: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub supported_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableActions {
    pub integration: AccountIntegration,
    #[serde(default)]
    pub passthrough_available: bool,
    #[serde(default, deserialize_with = "crate::models::common::nullable_vec")]
    pub available_model_operations: Vec<ModelOperation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncStatus {
    pub model_name: String,
    pub model_id: String,
    #[serde(default)]
    pub last_sync_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_sync_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_sync_result: Option<String>,
    #[serde(default)]
    pub last_sync_finished: Option<DateTime<Utc>>,
    pub status: String,
    pub is_initial_sync: bool,
    #[serde(default)]
    pub selective_sync_configurations_usage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyncStatusListParams {
    pub cursor: Option<String>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteKeyRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteKey {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EndUserDetailsRequest {
    pub end_user_email_address: String,
    pub end_user_organization_name: String,
    pub end_user_origin_id: String,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_expiry_mins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_create_magic_link_url: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_admin_magic_link: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_models: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkToken {
    pub link_token: String,
    #[serde(default)]
    pub integration_name: Option<String>,
    #[serde(default)]
    pub magic_link_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PassthroughMethod {
    Get,
    Options,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestFormat {
    Json,
    Xml,
    Multipart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPassthroughRequest {
    pub method: PassthroughMethod,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipart_form_data: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_format: Option<RequestFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_response: Option<bool>,
}

impl DataPassthroughRequest {
    pub fn new(method: PassthroughMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            base_url_override: None,
            data: None,
            multipart_form_data: None,
            headers: None,
            request_format: None,
            normalize_response: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub method: String,
    pub path: String,
    pub status: u16,
    #[serde(default)]
    pub response: Option<serde_json::Value>,
    #[serde(default)]
    pub response_headers: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub response_type: Option<String>,
    #[serde(default)]
    pub headers: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncPassthroughReciept {
    pub async_passthrough_receipt_id: String,
}
