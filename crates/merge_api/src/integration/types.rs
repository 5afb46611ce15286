//! Linked-account and integration management types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::nullable_vec;

string_enum! {
    /// Product category an integration belongs to.
    pub enum Category {
        Ats => "ats",
        Hris => "hris",
        Accounting => "accounting",
        Ticketing => "ticketing",
        Crm => "crm",
        Mktg => "mktg",
        Filestorage => "filestorage",
    }
}

string_enum! {
    /// Linking state of an account.
    pub enum AccountDetailsAndActionsStatus {
        Complete => "COMPLETE",
        Incomplete => "INCOMPLETE",
        RelinkNeeded => "RELINK_NEEDED",
    }
}

string_enum! {
    pub enum IssueStatus {
        Ongoing => "ONGOING",
        Resolved => "RESOLVED",
    }
}

string_enum! {
    /// State of the most recent sync of one model.
    pub enum SyncStatusStatus {
        Disabled => "DISABLED",
        Done => "DONE",
        Failed => "FAILED",
        PartiallySynced => "PARTIALLY_SYNCED",
        Paused => "PAUSED",
        Syncing => "SYNCING",
    }
}

string_enum! {
    /// HTTP method of a passthrough request.
    pub enum MethodEnum {
        Get => "GET",
        Options => "OPTIONS",
        Head => "HEAD",
        Post => "POST",
        Put => "PUT",
        Patch => "PATCH",
        Delete => "DELETE",
    }
}

string_enum! {
    /// Encoding of a passthrough request body.
    pub enum RequestFormat {
        Json => "JSON",
        Xml => "XML",
        Multipart => "MULTIPART",
    }
}

string_enum! {
    /// Value type a selective-sync condition compares against.
    pub enum ConditionType {
        Boolean => "BOOLEAN",
        Date => "DATE",
        DateTime => "DATE_TIME",
        Integer => "INTEGER",
        Float => "FLOAT",
        String => "STRING",
        ListOfStrings => "LIST_OF_STRINGS",
    }
}

/// The linked account behind the configured account token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub integration: Option<String>,
    #[serde(default)]
    pub integration_slug: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
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
    /// Whether another linked account shares this one's credentials.
    #[serde(default)]
    pub is_duplicate: Option<bool>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// An entry of the linked-accounts listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetailsAndActions {
    pub id: String,
    #[serde(default)]
    pub category: Option<Category>,
    pub status: AccountDetailsAndActionsStatus,
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
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// Catalog entry of a third-party integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountIntegration {
    pub name: String,
    #[serde(default)]
    pub abbreviated_name: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub square_image: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub api_endpoints_to_documentation_urls: Option<Map<String, Value>>,
    #[serde(default)]
    pub webhook_setup_guide_url: Option<String>,
    #[serde(default)]
    pub category_beta_status: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// Result of exchanging a Link public token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountToken {
    pub account_token: String,
    pub integration: AccountIntegration,
    #[serde(default)]
    pub id: Option<String>,
}

/// Operations the linked account's integration supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableActions {
    pub integration: AccountIntegration,
    #[serde(default)]
    pub passthrough_available: bool,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub available_model_operations: Vec<ModelOperation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOperation {
    pub model_name: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub available_operations: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub required_post_parameters: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub supported_fields: Vec<String>,
}

/// A problem detected on a linked account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<IssueStatus>,
    pub error_description: String,
    #[serde(default)]
    pub end_user: Option<Map<String, Value>>,
    #[serde(default)]
    pub first_incident_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_incident_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_muted: Option<bool>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub error_details: Vec<String>,
}

/// Parameters for a new Link session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkTokenRequest {
    pub end_user_email_address: String,
    pub end_user_organization_name: String,
    /// Your identifier for the end user; reusing it relinks the same account.
    pub end_user_origin_id: String,
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_expiry_mins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_create_magic_link_url: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl LinkTokenRequest {
    pub fn new(
        end_user_email_address: impl Into<String>,
        end_user_organization_name: impl Into<String>,
        end_user_origin_id: impl Into<String>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            end_user_email_address: end_user_email_address.into(),
            end_user_organization_name: end_user_organization_name.into(),
            end_user_origin_id: end_user_origin_id.into(),
            categories,
            integration: None,
            link_expiry_mins: None,
            should_create_magic_link_url: None,
            language: None,
        }
    }

    /// Skip the integration picker and open this integration directly.
    #[must_use]
    pub fn integration(mut self, slug: impl Into<String>) -> Self {
        self.integration = Some(slug.into());
        self
    }

    #[must_use]
    pub fn link_expiry_mins(mut self, minutes: u32) -> Self {
        self.link_expiry_mins = Some(minutes);
        self
    }

    #[must_use]
    pub fn magic_link(mut self, enabled: bool) -> Self {
        self.should_create_magic_link_url = Some(enabled);
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkToken {
    pub link_token: String,
    #[serde(default)]
    pub integration_name: Option<String>,
    #[serde(default)]
    pub magic_link_url: Option<String>,
}

/// A named remote API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteKey {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncStatus {
    pub model_name: String,
    pub model_id: String,
    #[serde(default)]
    pub last_sync_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_sync_start: Option<DateTime<Utc>>,
    pub status: SyncStatusStatus,
    pub is_initial_sync: bool,
    #[serde(default)]
    pub selective_sync_configurations_usage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookReceiver {
    pub event: String,
    pub is_active: bool,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookReceiverRequest {
    pub event: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl WebhookReceiverRequest {
    pub fn new(event: impl Into<String>, is_active: bool) -> Self {
        Self {
            event: event.into(),
            is_active,
            key: None,
        }
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// A request forwarded verbatim to the third-party API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPassthroughRequest {
    pub method: MethodEnum,
    /// Path relative to the integration's API root.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipart_form_data: Option<Vec<MultipartFormField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_format: Option<RequestFormat>,
    /// Convert the third-party response to JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_response: Option<bool>,
}

impl DataPassthroughRequest {
    pub fn new(method: MethodEnum, path: impl Into<String>) -> Self {
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

    #[must_use]
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Send `data` as JSON.
    #[must_use]
    pub fn json(mut self, data: &Value) -> Self {
        self.data = Some(data.to_string());
        self.request_format = Some(RequestFormat::Json);
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Map::new)
            .insert(name.into(), Value::String(value.into()));
        self
    }

    #[must_use]
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn normalize_response(mut self, normalize: bool) -> Self {
        self.normalize_response = Some(normalize);
        self
    }
}

/// One part of a multipart passthrough body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipartFormField {
    pub name: String,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// The third-party API's answer to a passthrough request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub method: String,
    pub path: String,
    pub status: u16,
    #[serde(default)]
    pub response: Option<Value>,
    #[serde(default)]
    pub response_headers: Option<Map<String, Value>>,
    #[serde(default)]
    pub response_type: Option<String>,
    #[serde(default)]
    pub headers: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncPassthroughReceipt {
    pub async_passthrough_receipt_id: String,
}

/// Outcome of polling an async passthrough receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AsyncPassthroughResult {
    Completed(RemoteResponse),
    /// Status message while the request is still running.
    Pending(String),
}

impl AsyncPassthroughResult {
    pub fn response(&self) -> Option<&RemoteResponse> {
        match self {
            AsyncPassthroughResult::Completed(response) => Some(response),
            AsyncPassthroughResult::Pending(_) => None,
        }
    }
}

/// Selective-sync conditions of a linked account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectiveSyncConfiguration {
    #[serde(default, deserialize_with = "nullable_vec")]
    pub linked_account_conditions: Vec<LinkedAccountCondition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedAccountCondition {
    #[serde(default)]
    pub id: Option<String>,
    pub condition_schema_id: String,
    #[serde(default)]
    pub common_model: Option<String>,
    #[serde(default)]
    pub native_name: Option<String>,
    pub operator: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub field_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectiveSyncConfigurationRequest {
    pub linked_account_conditions: Vec<LinkedAccountConditionRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedAccountConditionRequest {
    /// Existing condition to replace; omit to add a new one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub condition_schema_id: String,
    pub operator: String,
    pub value: Value,
}

impl LinkedAccountConditionRequest {
    pub fn new(
        condition_schema_id: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            id: None,
            condition_schema_id: condition_schema_id.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// A condition the linked account's integration can filter on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSchema {
    pub id: String,
    #[serde(default)]
    pub common_model: Option<String>,
    #[serde(default)]
    pub native_name: Option<String>,
    #[serde(default)]
    pub field_name: Option<String>,
    pub is_unique: bool,
    pub condition_type: ConditionType,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub operators: Vec<OperatorSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorSchema {
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub is_unique: Option<bool>,
}
