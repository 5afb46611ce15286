//! Integration management endpoints shared by every category.

use serde::Serialize;

use super::types::{
    AccountDetails, AccountDetailsAndActions, AccountToken, AsyncPassthroughReceipt,
    AsyncPassthroughResult, AvailableActions, ConditionSchema, DataPassthroughRequest, Issue,
    LinkToken, LinkTokenRequest, RemoteKey, RemoteResponse, SelectiveSyncConfiguration,
    SelectiveSyncConfigurationRequest, SyncStatus, WebhookReceiver, WebhookReceiverRequest,
};
use crate::error::Result;
use crate::pagination::Paginated;
use crate::params::ListParams;
use crate::request::{ApiRequest, RequestClient, RequestOptions};

#[derive(Serialize)]
struct KeyName<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct SyncConfigurations<'a> {
    sync_configurations: &'a [SelectiveSyncConfigurationRequest],
}

/// Linked-account management for one category, e.g. `ats/v1`.
#[derive(Debug, Clone, Copy)]
pub struct Integration<'a> {
    client: &'a RequestClient,
    prefix: &'static str,
}

impl<'a> Integration<'a> {
    pub(crate) fn new(client: &'a RequestClient, prefix: &'static str) -> Self {
        Self { client, prefix }
    }

    /// Category path prefix, e.g. `hris/v1`.
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    fn path(&self, endpoint: &str) -> String {
        format!("{}/{}", self.prefix, endpoint)
    }

    /// The linked account behind the account token.
    pub async fn account_details(self, options: Option<&RequestOptions>) -> Result<AccountDetails> {
        let path = self.path("account-details");
        self.client.json(ApiRequest::get(&path), options).await
    }

    /// Exchange a public token from Link for the account token.
    pub async fn account_token(
        self,
        public_token: &str,
        options: Option<&RequestOptions>,
    ) -> Result<AccountToken> {
        let path = self.path("account-token");
        self.client
            .json(ApiRequest::get(&path).segment(public_token), options)
            .await
    }

    pub async fn available_actions(
        self,
        options: Option<&RequestOptions>,
    ) -> Result<AvailableActions> {
        let path = self.path("available-actions");
        self.client.json(ApiRequest::get(&path), options).await
    }

    /// Delete the linked account. Irreversible.
    pub async fn delete_account(self, options: Option<&RequestOptions>) -> Result<()> {
        let path = self.path("delete-account");
        tracing::debug!("Deleting linked account via {}", path);
        self.client.empty(ApiRequest::post(&path), options).await
    }

    /// Queue a sync of every model for the linked account.
    pub async fn force_resync(self, options: Option<&RequestOptions>) -> Result<Vec<SyncStatus>> {
        let path = self.path("sync-status/resync");
        self.client.json(ApiRequest::post(&path), options).await
    }

    pub async fn sync_status(
        self,
        params: &ListParams,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<SyncStatus>> {
        let path = self.path("sync-status");
        self.client
            .json(ApiRequest::get(&path).query(params.to_query()), options)
            .await
    }

    /// Create a remote key with the given name.
    pub async fn generate_key(self, name: &str, options: Option<&RequestOptions>) -> Result<RemoteKey> {
        self.post_key("generate-key", name, options).await
    }

    /// Replace the remote key with the given name.
    pub async fn regenerate_key(
        self,
        name: &str,
        options: Option<&RequestOptions>,
    ) -> Result<RemoteKey> {
        self.post_key("regenerate-key", name, options).await
    }

    async fn post_key(
        self,
        endpoint: &str,
        name: &str,
        options: Option<&RequestOptions>,
    ) -> Result<RemoteKey> {
        let path = self.path(endpoint);
        let request = ApiRequest::post(&path).json(&KeyName { name })?;
        self.client.json(request, options).await
    }

    pub async fn issues(
        self,
        params: &ListParams,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<Issue>> {
        let path = self.path("issues");
        self.client
            .json(ApiRequest::get(&path).query(params.to_query()), options)
            .await
    }

    pub async fn issue(self, id: &str, options: Option<&RequestOptions>) -> Result<Issue> {
        let path = self.path("issues");
        self.client.json(ApiRequest::get(&path).segment(id), options).await
    }

    /// Start a Link session for an end user.
    pub async fn link_token(
        self,
        body: &LinkTokenRequest,
        options: Option<&RequestOptions>,
    ) -> Result<LinkToken> {
        let path = self.path("link-token");
        let request = ApiRequest::post(&path).json(body)?;
        self.client.json(request, options).await
    }

    /// Linked accounts of the organization; filter with e.g. `end_user_email_address`.
    pub async fn linked_accounts(
        self,
        params: &ListParams,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<AccountDetailsAndActions>> {
        let path = self.path("linked-accounts");
        self.client
            .json(ApiRequest::get(&path).query(params.to_query()), options)
            .await
    }

    /// Forward a request to the third-party API.
    pub async fn passthrough(
        self,
        body: &DataPassthroughRequest,
        options: Option<&RequestOptions>,
    ) -> Result<RemoteResponse> {
        let path = self.path("passthrough");
        let request = ApiRequest::post(&path).json(body)?;
        self.client.json(request, options).await
    }

    /// Queue a passthrough request and return a receipt to poll.
    pub async fn async_passthrough(
        self,
        body: &DataPassthroughRequest,
        options: Option<&RequestOptions>,
    ) -> Result<AsyncPassthroughReceipt> {
        let path = self.path("async-passthrough");
        let request = ApiRequest::post(&path).json(body)?;
        self.client.json(request, options).await
    }

    pub async fn async_passthrough_result(
        self,
        receipt_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<AsyncPassthroughResult> {
        let path = self.path("async-passthrough");
        self.client
            .json(ApiRequest::get(&path).segment(receipt_id), options)
            .await
    }

    pub async fn selective_sync_configurations(
        self,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<SelectiveSyncConfiguration>> {
        let path = self.path("selective-sync/configurations");
        self.client.json(ApiRequest::get(&path), options).await
    }

    /// Replace the linked account's selective-sync conditions.
    pub async fn update_selective_sync_configurations(
        self,
        configurations: &[SelectiveSyncConfigurationRequest],
        options: Option<&RequestOptions>,
    ) -> Result<Vec<SelectiveSyncConfiguration>> {
        let path = self.path("selective-sync/configurations");
        let request = ApiRequest::put(&path).json(&SyncConfigurations {
            sync_configurations: configurations,
        })?;
        self.client.json(request, options).await
    }

    /// Conditions available for selective sync; filter with `common_model`.
    pub async fn selective_sync_meta(
        self,
        params: &ListParams,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<ConditionSchema>> {
        let path = self.path("selective-sync/meta");
        self.client
            .json(ApiRequest::get(&path).query(params.to_query()), options)
            .await
    }

    pub async fn webhook_receivers(
        self,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<WebhookReceiver>> {
        let path = self.path("webhook-receivers");
        self.client.json(ApiRequest::get(&path), options).await
    }

    pub async fn create_webhook_receiver(
        self,
        body: &WebhookReceiverRequest,
        options: Option<&RequestOptions>,
    ) -> Result<WebhookReceiver> {
        let path = self.path("webhook-receivers");
        let request = ApiRequest::post(&path).json(body)?;
        self.client.json(request, options).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};

    use super::*;
    use crate::http::{HttpMethod, MockTransport};
    use crate::integration::{Category, LinkedAccountConditionRequest, MethodEnum, SyncStatusStatus};
    use crate::retry::RetryConfig;

    const BASE: &str = "https://api.test/api";

    fn client(transport: &MockTransport) -> RequestClient {
        RequestClient::new(BASE, "key", Arc::new(transport.clone()))
            .unwrap()
            .with_account_token("acct-token")
            .unwrap()
            .with_retry(RetryConfig::disabled())
    }

    fn integration_json() -> Value {
        json!({ "name": "Greenhouse", "categories": ["ats"], "slug": "greenhouse" })
    }

    #[tokio::test]
    async fn account_details_and_token_exchange() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/ats/v1/account-details"),
            200,
            json!({ "id": "acct-1", "category": "ats", "integration_slug": "greenhouse" }),
        );
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/ats/v1/account-token/public-123"),
            200,
            json!({ "account_token": "secret", "integration": integration_json() }),
        );
        let client = client(&transport);
        let integration = Integration::new(&client, "ats/v1");

        let details = integration.account_details(None).await.unwrap();
        assert_eq!(details.id.as_deref(), Some("acct-1"));
        assert_eq!(
            transport.last_request().unwrap().header("x-account-token"),
            Some("acct-token")
        );

        let token = integration.account_token("public-123", None).await.unwrap();
        assert_eq!(token.account_token, "secret");
        assert_eq!(token.integration.categories, vec![Category::Ats]);
    }

    #[tokio::test]
    async fn empty_public_token_is_rejected() {
        let transport = MockTransport::new();
        let client = client(&transport);
        let integration = Integration::new(&client, "ats/v1");

        let err = integration.account_token("", None).await.unwrap_err();
        assert!(matches!(err, crate::error::MergeError::Config(_)));
        let err = integration.issue("", None).await.unwrap_err();
        assert!(matches!(err, crate::error::MergeError::Config(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn link_token_posts_request() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/hris/v1/link-token"),
            200,
            json!({ "link_token": "lt-1", "integration_name": null }),
        );
        let client = client(&transport);

        let token = Integration::new(&client, "hris/v1")
            .link_token(
                &LinkTokenRequest::new("a@b.c", "Org", "origin-1", vec![Category::Hris]),
                None,
            )
            .await
            .unwrap();
        assert_eq!(token.link_token, "lt-1");

        let sent: Value = serde_json::from_slice(&transport.last_request().unwrap().body).unwrap();
        assert_eq!(sent["categories"], json!(["hris"]));
    }

    #[tokio::test]
    async fn keys_post_name() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/crm/v1/generate-key"),
            200,
            json!({ "name": "ci", "key": "k1" }),
        );
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/crm/v1/regenerate-key"),
            200,
            json!({ "name": "ci", "key": "k2" }),
        );
        let client = client(&transport);
        let integration = Integration::new(&client, "crm/v1");

        assert_eq!(integration.generate_key("ci", None).await.unwrap().key, "k1");
        assert_eq!(integration.regenerate_key("ci", None).await.unwrap().key, "k2");
        assert_eq!(transport.last_request().unwrap().body, br#"{"name":"ci"}"#.to_vec());
    }

    #[tokio::test]
    async fn sync_status_and_resync() {
        let transport = MockTransport::new();
        let status = json!({
            "model_name": "Candidate",
            "model_id": "ats.Candidate",
            "last_sync_start": "2024-01-02T03:04:05Z",
            "next_sync_start": null,
            "status": "SYNCING",
            "is_initial_sync": false
        });
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/ats/v1/sync-status"),
            200,
            json!({ "next": null, "previous": null, "results": [status.clone()] }),
        );
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/ats/v1/sync-status/resync"),
            200,
            json!([status]),
        );
        let client = client(&transport);
        let integration = Integration::new(&client, "ats/v1");

        let page = integration
            .sync_status(&ListParams::new().page_size(10), None)
            .await
            .unwrap();
        assert_eq!(page.results[0].status, SyncStatusStatus::Syncing);

        let queued = integration.force_resync(None).await.unwrap();
        assert_eq!(queued.len(), 1);
    }

    #[tokio::test]
    async fn passthrough_round_trip() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/ticketing/v1/passthrough"),
            200,
            json!({ "method": "GET", "path": "/tickets", "status": 200, "response": [] }),
        );
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/ticketing/v1/async-passthrough"),
            200,
            json!({ "async_passthrough_receipt_id": "rcpt-1" }),
        );
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/ticketing/v1/async-passthrough/rcpt-1"),
            200,
            json!("PENDING"),
        );
        let client = client(&transport);
        let integration = Integration::new(&client, "ticketing/v1");
        let request = DataPassthroughRequest::new(MethodEnum::Get, "/tickets");

        let response = integration.passthrough(&request, None).await.unwrap();
        assert_eq!(response.status, 200);

        let receipt = integration.async_passthrough(&request, None).await.unwrap();
        let result = integration
            .async_passthrough_result(&receipt.async_passthrough_receipt_id, None)
            .await
            .unwrap();
        assert_eq!(result, AsyncPassthroughResult::Pending("PENDING".to_string()));
    }

    #[tokio::test]
    async fn selective_sync_update_wraps_configurations() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Put,
            format!("{BASE}/hris/v1/selective-sync/configurations"),
            200,
            json!([{ "linked_account_conditions": [{
                "condition_schema_id": "cs-1",
                "operator": "EQUALS",
                "value": "Engineering"
            }]}]),
        );
        let client = client(&transport);

        let configurations = vec![SelectiveSyncConfigurationRequest {
            linked_account_conditions: vec![LinkedAccountConditionRequest::new(
                "cs-1",
                "EQUALS",
                "Engineering",
            )],
        }];
        let updated = Integration::new(&client, "hris/v1")
            .update_selective_sync_configurations(&configurations, None)
            .await
            .unwrap();
        assert_eq!(updated[0].linked_account_conditions[0].operator, "EQUALS");

        let sent: Value = serde_json::from_slice(&transport.last_request().unwrap().body).unwrap();
        assert_eq!(
            sent,
            json!({ "sync_configurations": [{ "linked_account_conditions": [{
                "condition_schema_id": "cs-1",
                "operator": "EQUALS",
                "value": "Engineering"
            }]}]})
        );
    }

    #[tokio::test]
    async fn webhook_receivers_list_and_create() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/filestorage/v1/webhook-receivers"),
            200,
            json!([{ "event": "File.changed", "is_active": true }]),
        );
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/filestorage/v1/webhook-receivers"),
            201,
            json!({ "event": "Folder.added", "is_active": false, "key": "k" }),
        );
        let client = client(&transport);
        let integration = Integration::new(&client, "filestorage/v1");

        let receivers = integration.webhook_receivers(None).await.unwrap();
        assert!(receivers[0].is_active);

        let created = integration
            .create_webhook_receiver(&WebhookReceiverRequest::new("Folder.added", false).key("k"), None)
            .await
            .unwrap();
        assert_eq!(created.key.as_deref(), Some("k"));
    }

    #[tokio::test]
    async fn delete_account_posts_without_body() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/accounting/v1/delete-account"),
            200,
            Value::Null,
        );
        let client = client(&transport);

        Integration::new(&client, "accounting/v1")
            .delete_account(None)
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert!(sent.body.is_empty());
        assert_eq!(sent.header("content-type"), None);
    }
}
