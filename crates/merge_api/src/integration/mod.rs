//! Linked-account management available under every category.
//!
//! - [`types`] - Account, issue, passthrough and selective-sync types
//! - [`client`] - The [`Integration`] handle

mod client;
mod types;

pub use client::Integration;

pub use types::{
    AccountDetails, AccountDetailsAndActions, AccountDetailsAndActionsStatus, AccountIntegration,
    AccountToken, AsyncPassthroughReceipt, AsyncPassthroughResult, AvailableActions, Category,
    ConditionSchema, ConditionType, DataPassthroughRequest, Issue, IssueStatus,
    LinkToken, LinkTokenRequest, LinkedAccountCondition, LinkedAccountConditionRequest,
    MethodEnum, ModelOperation, MultipartFormField, OperatorSchema, RemoteKey, RemoteResponse,
    RequestFormat, SelectiveSyncConfiguration, SelectiveSyncConfigurationRequest, SyncStatus,
    SyncStatusStatus, WebhookReceiver, WebhookReceiverRequest,
};
