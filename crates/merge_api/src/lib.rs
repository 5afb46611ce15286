//! Merge API - A typed client for the Merge unified integration API.
//!
//! One [`Client`] covers every category: ATS, HRIS, CRM, accounting,
//! ticketing and file storage. Each category exposes its common models as
//! resources with `list`, `retrieve` and, where the API allows writes,
//! `create`, `partial_update`, `meta_post`, `meta_patch` and `ignore`.
//! Account-level endpoints (linked accounts, link tokens, passthrough,
//! sync status, webhooks) live under each category's `integration()`.
//!
//! # Features
//!
//! Every category is behind a cargo feature of the same name, all enabled by
//! default: `ats`, `hris`, `crm`, `accounting`, `ticketing`, `filestorage`.
//!
//! # Example
//!
//! ```ignore
//! use merge_api::{Client, Environment, ListParams, RequestOptions};
//! use merge_api::ats::CandidateExpand;
//!
//! let client = Client::builder()
//!     .api_key("YOUR_API_KEY")
//!     .account_token("YOUR_ACCOUNT_TOKEN")
//!     .environment(Environment::Sandbox)
//!     .build()?;
//!
//! let params = ListParams::new().expand([CandidateExpand::Applications]);
//! let page = client.ats().candidates().list(&params, None).await?;
//!
//! // Act on another linked account for a single call.
//! let other = RequestOptions::new().account_token("OTHER_ACCOUNT_TOKEN");
//! let details = client.ats().integration().account_details(Some(&other)).await?;
//! ```

#[macro_use]
mod macros;

pub mod blocking;
pub mod client;
pub mod config;
pub mod environment;
pub mod error;
pub mod http;
pub mod integration;
pub mod model;
pub mod pagination;
pub mod params;
pub mod request;
pub mod resource;
pub mod retry;

#[cfg(feature = "ats")]
pub mod ats;

#[cfg(feature = "hris")]
pub mod hris;

#[cfg(feature = "crm")]
pub mod crm;

#[cfg(feature = "accounting")]
pub mod accounting;

#[cfg(feature = "ticketing")]
pub mod ticketing;

#[cfg(feature = "filestorage")]
pub mod filestorage;

pub use blocking::BlockingClient;
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use environment::Environment;
pub use error::{MergeError, Result, short_error_message};
pub use model::{
    Downloadable, Expandable, Ignorable, IgnoreReason, IgnoreRequest, Listable, MetaResponse,
    Model, RemoteData, Updatable, Writable, WriteRequest, WriteResponse,
};
pub use pagination::Paginated;
pub use params::{ListParams, RetrieveParams, WriteParams};
pub use request::RequestOptions;
pub use resource::Resource;
pub use retry::RetryConfig;
