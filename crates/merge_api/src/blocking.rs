//! Synchronous access to the async [`Client`].
//!
//! Every operation is async; [`BlockingClient`] drives them to completion on
//! a private current-thread runtime so callers without tokio can use the same
//! API.

use std::future::Future;

use tokio::runtime::{Builder, Runtime};

use crate::client::Client;
use crate::error::{MergeError, Result};

/// Runs [`Client`] operations to completion on the calling thread.
///
/// ```ignore
/// use merge_api::{BlockingClient, Client, ListParams};
///
/// let client = BlockingClient::new(Client::new(api_key)?)?;
/// let params = ListParams::new();
/// let candidates = client.call(|c| c.ats().candidates().list(&params, None))?;
/// ```
///
/// Do not use it from inside an async runtime; blocking on a nested runtime
/// panics.
#[derive(Debug)]
pub struct BlockingClient {
    client: Client,
    runtime: Runtime,
}

impl BlockingClient {
    pub fn new(client: Client) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| MergeError::config(format!("failed to start runtime: {}", e)))?;
        Ok(Self { client, runtime })
    }

    /// Build from config files and `MERGE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(Client::from_env()?)
    }

    /// The wrapped async client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Run one async operation and wait for its result.
    pub fn call<'a, F, Fut, T>(&'a self, f: F) -> T
    where
        F: FnOnce(&'a Client) -> Fut,
        Fut: Future<Output = T>,
    {
        self.runtime.block_on(f(&self.client))
    }
}
