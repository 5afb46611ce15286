//! Traits and types shared by every resource model.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A resource returned by a list or retrieve endpoint.
pub trait Model: DeserializeOwned + Serialize + Send + Sync {
    /// Identifier assigned by the API.
    fn id(&self) -> Option<&str>;

    /// Identifier in the third-party system.
    fn remote_id(&self) -> Option<&str>;

    /// Fields the API returned that this model does not declare.
    fn additional_properties(&self) -> &Map<String, Value>;
}

/// A model with a list endpoint.
pub trait Listable: Model {}

/// A model that can be created with `POST`.
pub trait Writable: Model {
    /// Body sent as `model` when creating.
    type Request: Serialize + Send + Sync;
}

/// A model that can be partially updated with `PATCH`.
pub trait Updatable: Writable {}

/// A model whose remote records can be ignored by future syncs.
pub trait Ignorable: Model {}

/// A model whose file contents can be downloaded.
pub trait Downloadable: Model {}

/// A relation that is either an id or, when expanded, the full object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T: Model> Expandable<T> {
    /// The related object's id, expanded or not.
    pub fn id(&self) -> Option<&str> {
        match self {
            Expandable::Id(id) => Some(id),
            Expandable::Object(object) => object.id(),
        }
    }
}

impl<T> Expandable<T> {
    /// The expanded object, if the relation was expanded.
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(object),
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Expandable::Object(_))
    }
}

impl<T> From<String> for Expandable<T> {
    fn from(id: String) -> Self {
        Expandable::Id(id)
    }
}

impl<T> From<&str> for Expandable<T> {
    fn from(id: &str) -> Self {
        Expandable::Id(id.to_string())
    }
}

/// Deserialize a list field, treating `null` as empty.
pub(crate) fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Raw payload from the third-party system, returned with `include_remote_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteData {
    pub path: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// A field that exists in the third-party system but not in the common model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteField {
    #[serde(default)]
    pub remote_field_class: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// Body of a create or update call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteRequest<R> {
    pub model: R,
    /// User in the third-party system the write is attributed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_user_id: Option<String>,
}

impl<R> WriteRequest<R> {
    pub fn new(model: R) -> Self {
        Self {
            model,
            remote_user_id: None,
        }
    }

    #[must_use]
    pub fn remote_user_id(mut self, remote_user_id: impl Into<String>) -> Self {
        self.remote_user_id = Some(remote_user_id.into());
        self
    }
}

/// Result of a create or update call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "M: Deserialize<'de>"))]
pub struct WriteResponse<M> {
    pub model: M,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub warnings: Vec<ValidationProblem>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub errors: Vec<ValidationProblem>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub logs: Vec<DebugModeLog>,
}

/// A warning or error reported by a write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationProblem {
    #[serde(default)]
    pub source: Option<ValidationProblemSource>,
    pub title: String,
    pub detail: String,
    pub problem_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationProblemSource {
    pub pointer: String,
}

/// Request log attached to writes made with `is_debug_mode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugModeLog {
    pub log_id: String,
    pub dashboard_view: String,
    pub log_summary: DebugModelLogSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugModelLogSummary {
    pub url: String,
    pub method: String,
    pub status_code: i64,
}

/// Describes which fields a write endpoint accepts for the linked account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaResponse {
    pub request_schema: Value,
    #[serde(default)]
    pub remote_field_classes: Option<Map<String, Value>>,
    #[serde(default)]
    pub status: Option<LinkedAccountStatus>,
    pub has_conditional_params: bool,
    pub has_required_linked_account_params: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedAccountStatus {
    pub linked_account_status: String,
    pub can_make_request: bool,
}

string_enum! {
    /// Why a remote record should be ignored.
    pub enum IgnoreReason {
        GeneralCustomerRequest => "GENERAL_CUSTOMER_REQUEST",
        Gdpr => "GDPR",
        Other => "OTHER",
    }
}

/// Body of an ignore call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IgnoreRequest {
    pub reason: IgnoreReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IgnoreRequest {
    pub fn new(reason: IgnoreReason) -> Self {
        Self {
            reason,
            message: None,
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Thing {
        id: Option<String>,
        remote_id: Option<String>,
        name: Option<String>,
        #[serde(flatten)]
        additional_properties: Map<String, Value>,
    }

    impl_model!(Thing);

    #[test]
    fn expandable_accepts_id_or_object() {
        let id: Expandable<Thing> = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(id.id(), Some("abc"));
        assert!(!id.is_expanded());

        let object: Expandable<Thing> =
            serde_json::from_str(r#"{"id":"xyz","remote_id":null,"name":"n"}"#).unwrap();
        assert_eq!(object.id(), Some("xyz"));
        assert_eq!(
            object.as_object().and_then(|t| t.name.as_deref()),
            Some("n")
        );
    }

    #[test]
    fn expandable_serializes_transparently() {
        let id: Expandable<Thing> = "abc".into();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
    }

    #[test]
    fn nullable_vec_treats_null_as_empty() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "nullable_vec")]
            items: Vec<u32>,
        }

        let h: Holder = serde_json::from_str(r#"{"items":null}"#).unwrap();
        assert!(h.items.is_empty());
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(h.items.is_empty());
        let h: Holder = serde_json::from_str(r#"{"items":[1,2]}"#).unwrap();
        assert_eq!(h.items, vec![1, 2]);
    }

    #[test]
    fn write_request_omits_missing_remote_user() {
        let body = serde_json::to_value(WriteRequest::new(serde_json::json!({"name": "x"}))).unwrap();
        assert_eq!(body, serde_json::json!({"model": {"name": "x"}}));

        let body = serde_json::to_value(
            WriteRequest::new(serde_json::json!({})).remote_user_id("user-1"),
        )
        .unwrap();
        assert_eq!(body["remote_user_id"], "user-1");
    }

    #[test]
    fn write_response_defaults_problem_lists() {
        let response: WriteResponse<Thing> =
            serde_json::from_str(r#"{"model":{"id":"1","remote_id":"r"},"warnings":null}"#)
                .unwrap();
        assert_eq!(response.model.id(), Some("1"));
        assert!(response.warnings.is_empty());
        assert!(response.errors.is_empty());
        assert!(response.logs.is_empty());
    }

    #[test]
    fn ignore_request_body() {
        let body = serde_json::to_value(
            IgnoreRequest::new(IgnoreReason::Gdpr).message("erasure request"),
        )
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"reason": "GDPR", "message": "erasure request"})
        );
    }
}
