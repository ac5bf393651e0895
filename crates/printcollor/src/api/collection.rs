//! Generic CRUD handle over a backend resource.

use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::ApiClient;

/// A typed handle to one of the backend's resource collections.
///
/// The backend routes every resource the same way (`<path>`, `<path><id>/`),
/// so all CRUD operations are expressed once here. Obtain handles via the
/// accessors on [`ApiClient`] (e.g. [`ApiClient::clientes`]) or, for untyped
/// access, [`ApiClient::collection`] with [`serde_json::Value`].
#[derive(Debug)]
pub struct Collection<'a, T> {
    client: &'a ApiClient,
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> Collection<'a, T>
where
    T: DeserializeOwned,
{
    pub(crate) fn new(client: &'a ApiClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _marker: PhantomData,
        }
    }

    /// Returns the resource path (`clientes/`, `dtf/`, ...).
    pub fn path(&self) -> &'static str {
        self.path
    }

    fn detail_path(&self, id: i64) -> String {
        format!("{}{}/", self.path, id)
    }

    /// Fetch all items. The backend returns a plain, unpaginated array.
    #[instrument(skip(self), fields(path = self.path))]
    pub async fn list(&self) -> Result<Vec<T>, Error> {
        debug!("listing resource");
        self.client.get(self.path).await
    }

    /// Fetch items matching a query filter (e.g. the DTF status toggles).
    #[instrument(skip(self, query), fields(path = self.path))]
    pub async fn list_with<Q>(&self, query: &Q) -> Result<Vec<T>, Error>
    where
        Q: Serialize + std::fmt::Debug,
    {
        debug!("listing resource with filter");
        self.client.get_with_query(self.path, query).await
    }

    /// Fetch a single item by id.
    #[instrument(skip(self), fields(path = self.path, id))]
    pub async fn retrieve(&self, id: i64) -> Result<T, Error> {
        debug!("retrieving resource");
        self.client.get(&self.detail_path(id)).await
    }

    /// Create an item, returning it as stored by the backend.
    #[instrument(skip(self, body), fields(path = self.path))]
    pub async fn create<B>(&self, body: &B) -> Result<T, Error>
    where
        B: Serialize,
    {
        debug!("creating resource");
        self.client.post(self.path, body).await
    }

    /// Partially update an item, returning the updated state.
    #[instrument(skip(self, body), fields(path = self.path, id))]
    pub async fn update<B>(&self, id: i64, body: &B) -> Result<T, Error>
    where
        B: Serialize,
    {
        debug!("updating resource");
        self.client.patch(&self.detail_path(id), body).await
    }

    /// Delete an item.
    #[instrument(skip(self), fields(path = self.path, id))]
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        debug!("deleting resource");
        self.client.delete(&self.detail_path(id)).await
    }

    /// Download the backend-rendered PDF for an item.
    ///
    /// Maps to the `gerar_pdf` action, available on budgets and print/factory
    /// orders. The PDF is generated server-side; this just streams the bytes.
    #[instrument(skip(self), fields(path = self.path, id))]
    pub async fn download_pdf(&self, id: i64) -> Result<Vec<u8>, Error> {
        debug!("downloading pdf");
        let path = format!("{}{}/gerar_pdf/", self.path, id);
        self.client.get_bytes(&path).await
    }
}
