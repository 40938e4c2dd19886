//! 每個 vertical 都有的 linked account 端點。
//!
//! 路徑由 vertical 決定（例如 `/api/hris/v1/account-details`），
//! 所以這些 resource 不像一般 resource 有固定的 `PATH`。

use crate::core::query::encode_path_segment;
use crate::domain::model::{Endpoint, HttpMethod};
use crate::domain::ports::Executor;
use crate::models::common::{
    AccountDetails, AccountDetailsAndActions, AccountToken, AsyncPassthroughReciept,
    AvailableActions, DataPassthroughRequest, EndUserDetailsRequest, LinkToken,
    LinkedAccountsListParams, Paginated, RemoteKey, RemoteKeyRequest, RemoteResponse, SyncStatus,
    SyncStatusListParams,
};
use crate::resources::{ResourceClient, Vertical, VerticalClient, VerticalKind};
use crate::utils::error::Result;

pub fn account_details(vertical: Vertical) -> Result<Endpoint<AccountDetails>> {
    Ok(Endpoint::json(HttpMethod::Get, vertical.path("account-details")))
}

pub fn account_token(vertical: Vertical, public_token: &str) -> Result<Endpoint<AccountToken>> {
    Ok(Endpoint::json(
        HttpMethod::Get,
        format!(
            "{}/{}",
            vertical.path("account-token"),
            encode_path_segment(public_token)
        ),
    ))
}

pub fn available_actions(vertical: Vertical) -> Result<Endpoint<AvailableActions>> {
    Ok(Endpoint::json(HttpMethod::Get, vertical.path("available-actions")))
}

pub fn delete_account(vertical: Vertical) -> Result<Endpoint<()>> {
    Ok(Endpoint::json(HttpMethod::Post, vertical.path("delete-account")))
}

pub fn force_resync(vertical: Vertical) -> Result<Endpoint<Vec<SyncStatus>>> {
    Ok(Endpoint::json(HttpMethod::Post, vertical.path("sync-status/resync")))
}

pub fn sync_status(
    vertical: Vertical,
    params: &SyncStatusListParams,
) -> Result<Endpoint<Paginated<SyncStatus>>> {
    Endpoint::json(HttpMethod::Get, vertical.path("sync-status")).with_query(params)
}

pub fn generate_key(vertical: Vertical, request: &RemoteKeyRequest) -> Result<Endpoint<RemoteKey>> {
    Endpoint::json(HttpMethod::Post, vertical.path("generate-key")).with_body(request)
}

pub fn link_token(
    vertical: Vertical,
    request: &EndUserDetailsRequest,
) -> Result<Endpoint<LinkToken>> {
    Endpoint::json(HttpMethod::Post, vertical.path("link-token")).with_body(request)
}

pub fn linked_accounts(
    vertical: Vertical,
    params: &LinkedAccountsListParams,
) -> Result<Endpoint<Paginated<AccountDetailsAndActions>>> {
    Endpoint::json(HttpMethod::Get, vertical.path("linked-accounts")).with_query(params)
}

pub fn passthrough(
    vertical: Vertical,
    request: &DataPassthroughRequest,
) -> Result<Endpoint<RemoteResponse>> {
    Endpoint::json(HttpMethod::Post, vertical.path("passthrough")).with_body(request)
}

pub fn async_passthrough_create(
    vertical: Vertical,
    request: &DataPassthroughRequest,
) -> Result<Endpoint<AsyncPassthroughReciept>> {
    Endpoint::json(HttpMethod::Post, vertical.path("async-passthrough")).with_body(request)
}

pub fn async_passthrough_retrieve(
    vertical: Vertical,
    receipt_id: &str,
) -> Result<Endpoint<RemoteResponse>> {
    Ok(Endpoint::json(
        HttpMethod::Get,
        format!(
            "{}/{}",
            vertical.path("async-passthrough"),
            encode_path_segment(receipt_id)
        ),
    ))
}

pub struct AccountDetailsResource;
pub struct AccountTokenResource;
pub struct AvailableActionsResource;
pub struct DeleteAccountResource;
pub struct ForceResyncResource;
pub struct SyncStatusResource;
pub struct GenerateKeyResource;
pub struct LinkTokenResource;
pub struct LinkedAccountsResource;
pub struct PassthroughResource;
pub struct AsyncPassthroughResource;

pub type AccountDetailsClient<'a, E> = ResourceClient<'a, E, AccountDetailsResource>;
pub type AccountTokenClient<'a, E> = ResourceClient<'a, E, AccountTokenResource>;
pub type AvailableActionsClient<'a, E> = ResourceClient<'a, E, AvailableActionsResource>;
pub type DeleteAccountClient<'a, E> = ResourceClient<'a, E, DeleteAccountResource>;
pub type ForceResyncClient<'a, E> = ResourceClient<'a, E, ForceResyncResource>;
pub type SyncStatusClient<'a, E> = ResourceClient<'a, E, SyncStatusResource>;
pub type GenerateKeyClient<'a, E> = ResourceClient<'a, E, GenerateKeyResource>;
pub type LinkTokenClient<'a, E> = ResourceClient<'a, E, LinkTokenResource>;
pub type LinkedAccountsClient<'a, E> = ResourceClient<'a, E, LinkedAccountsResource>;
pub type PassthroughClient<'a, E> = ResourceClient<'a, E, PassthroughResource>;
pub type AsyncPassthroughClient<'a, E> = ResourceClient<'a, E, AsyncPassthroughResource>;

impl<'a, E: Executor, V: VerticalKind> VerticalClient<'a, E, V> {
    pub fn account_details(&self) -> AccountDetailsClient<'a, E> {
        self.resource()
    }

    pub fn account_token(&self) -> AccountTokenClient<'a, E> {
        self.resource()
    }

    pub fn available_actions(&self) -> AvailableActionsClient<'a, E> {
        self.resource()
    }

    pub fn delete_account(&self) -> DeleteAccountClient<'a, E> {
        self.resource()
    }

    pub fn force_resync(&self) -> ForceResyncClient<'a, E> {
        self.resource()
    }

    pub fn sync_status(&self) -> SyncStatusClient<'a, E> {
        self.resource()
    }

    pub fn generate_key(&self) -> GenerateKeyClient<'a, E> {
        self.resource()
    }

    pub fn link_token(&self) -> LinkTokenClient<'a, E> {
        self.resource()
    }

    pub fn linked_accounts(&self) -> LinkedAccountsClient<'a, E> {
        self.resource()
    }

    pub fn passthrough(&self) -> PassthroughClient<'a, E> {
        self.resource()
    }

    pub fn async_passthrough(&self) -> AsyncPassthroughClient<'a, E> {
        self.resource()
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, AccountDetailsResource> {
    /// 目前 account token 對應的 linked account
    pub fn retrieve(&self) -> E::Output<'a, AccountDetails> {
        self.call(account_details(self.vertical()))
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, AccountTokenResource> {
    /// 以 Link 流程拿到的 public token 換取 account token
    pub fn retrieve(&self, public_token: &str) -> E::Output<'a, AccountToken> {
        self.call(account_token(self.vertical(), public_token))
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, AvailableActionsResource> {
    pub fn retrieve(&self) -> E::Output<'a, AvailableActions> {
        self.call(available_actions(self.vertical()))
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, DeleteAccountResource> {
    /// 刪除 linked account，成功時沒有回應內容
    pub fn delete(&self) -> E::Output<'a, ()> {
        self.call(delete_account(self.vertical()))
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, ForceResyncResource> {
    pub fn create(&self) -> E::Output<'a, Vec<SyncStatus>> {
        self.call(force_resync(self.vertical()))
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, SyncStatusResource> {
    pub fn list(&self, params: &SyncStatusListParams) -> E::Output<'a, Paginated<SyncStatus>> {
        self.call(sync_status(self.vertical(), params))
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, GenerateKeyResource> {
    pub fn create(&self, request: &RemoteKeyRequest) -> E::Output<'a, RemoteKey> {
        self.call(generate_key(self.vertical(), request))
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, LinkTokenResource> {
    pub fn create(&self, request: &EndUserDetailsRequest) -> E::Output<'a, LinkToken> {
        self.call(link_token(self.vertical(), request))
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, LinkedAccountsResource> {
    pub fn list(
        &self,
        params: &LinkedAccountsListParams,
    ) -> E::Output<'a, Paginated<AccountDetailsAndActions>> {
        self.call(linked_accounts(self.vertical(), params))
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, PassthroughResource> {
    /// 直接轉送到第三方 API
    pub fn create(&self, request: &DataPassthroughRequest) -> E::Output<'a, RemoteResponse> {
        self.call(passthrough(self.vertical(), request))
    }
}

impl<'a, E: Executor> ResourceClient<'a, E, AsyncPassthroughResource> {
    pub fn create(
        &self,
        request: &DataPassthroughRequest,
    ) -> E::Output<'a, AsyncPassthroughReciept> {
        self.call(async_passthrough_create(self.vertical(), request))
    }

    pub fn retrieve(&self, receipt_id: &str) -> E::Output<'a, RemoteResponse> {
        self.call(async_passthrough_retrieve(self.vertical(), receipt_id))
    }
}
