//! Generic handle for one REST resource.
//!
//! Every resource in every category exposes the same operations, so they are
//! written once here and gated on the model's marker traits: list and
//! retrieve for all models, create for [`Writable`], `PATCH` for
//! [`Updatable`], ignore for [`Ignorable`] and download for [`Downloadable`].

use std::marker::PhantomData;

use crate::error::Result;
use crate::model::{
    Downloadable, IgnoreRequest, Ignorable, Listable, MetaResponse, Model, Updatable, Writable,
    WriteRequest, WriteResponse,
};
use crate::pagination::Paginated;
use crate::params::{ListParams, RetrieveParams, WriteParams};
use crate::request::{ApiRequest, RequestClient, RequestOptions};

/// Handle for the resource at `path`, returning `M`.
///
/// Handles are cheap to copy; methods take `self` by value so the returned
/// futures borrow only the client.
pub struct Resource<'a, M> {
    client: &'a RequestClient,
    path: &'static str,
    _model: PhantomData<fn() -> M>,
}

impl<M> Clone for Resource<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Resource<'_, M> {}

impl<M> std::fmt::Debug for Resource<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource").field("path", &self.path).finish()
    }
}

impl<'a, M: Model> Resource<'a, M> {
    pub(crate) fn new(client: &'a RequestClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _model: PhantomData,
        }
    }

    /// Path relative to the base URL, e.g. `ats/v1/candidates`.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Fetch one object by id.
    pub async fn retrieve(
        self,
        id: &str,
        params: &RetrieveParams,
        options: Option<&RequestOptions>,
    ) -> Result<M> {
        let request = ApiRequest::get(self.path)
            .segment(id)
            .query(params.to_query());
        self.client.json(request, options).await
    }
}

impl<M: Listable> Resource<'_, M> {
    /// Fetch one page of objects.
    pub async fn list(
        self,
        params: &ListParams,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<M>> {
        let request = ApiRequest::get(self.path).query(params.to_query());
        self.client.json(request, options).await
    }
}

impl<M: Writable> Resource<'_, M> {
    /// Create an object in the third-party system.
    pub async fn create(
        self,
        body: &WriteRequest<M::Request>,
        params: &WriteParams,
        options: Option<&RequestOptions>,
    ) -> Result<WriteResponse<M>> {
        let request = ApiRequest::post(self.path)
            .query(params.to_query())
            .json(body)?;
        self.client.json(request, options).await
    }

    /// Fields accepted by [`Resource::create`] for the linked account.
    pub async fn meta_post(self, options: Option<&RequestOptions>) -> Result<MetaResponse> {
        let request = ApiRequest::get(self.path).segment("meta").segment("post");
        self.client.json(request, options).await
    }
}

impl<M: Updatable> Resource<'_, M> {
    /// Update the given fields of an object.
    pub async fn partial_update(
        self,
        id: &str,
        body: &WriteRequest<M::Request>,
        params: &WriteParams,
        options: Option<&RequestOptions>,
    ) -> Result<WriteResponse<M>> {
        let request = ApiRequest::patch(self.path)
            .segment(id)
            .query(params.to_query())
            .json(body)?;
        self.client.json(request, options).await
    }

    /// Fields accepted by [`Resource::partial_update`] for one object.
    pub async fn meta_patch(self, id: &str, options: Option<&RequestOptions>) -> Result<MetaResponse> {
        let request = ApiRequest::get(self.path)
            .segment("meta")
            .segment("patch")
            .segment(id);
        self.client.json(request, options).await
    }
}

impl<M: Ignorable> Resource<'_, M> {
    /// Stop syncing a remote record.
    pub async fn ignore(
        self,
        id: &str,
        body: &IgnoreRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let request = ApiRequest::post(self.path)
            .segment("ignore")
            .segment(id)
            .json(body)?;
        self.client.empty(request, options).await
    }
}

impl<M: Downloadable> Resource<'_, M> {
    /// Fetch an object's file contents.
    pub async fn download(self, id: &str, options: Option<&RequestOptions>) -> Result<Vec<u8>> {
        let request = ApiRequest::get(self.path).segment(id).segment("download");
        self.client.bytes(request, options).await
    }
}
