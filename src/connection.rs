//! Connection - an owned, lazily-resolved handle to a document store.

use std::future::Future;

use futures::future::BoxFuture;
use tokio::sync::OnceCell;

use crate::error::StoreError;

type Connector<S> = Box<dyn Fn() -> BoxFuture<'static, Result<S, StoreError>> + Send + Sync>;

/// Deferred handle to a [`DocumentStore`](crate::DocumentStore) backend.
///
/// Owned by the repository it is passed into; resolved at most once and
/// cached for the repository's lifetime. A failed resolution leaves the
/// connection unresolved, so the next call runs the connector again.
pub struct Connection<S> {
    cell: OnceCell<S>,
    connector: Option<Connector<S>>,
}

impl<S> Connection<S> {
    /// Wrap an already-resolved store handle.
    pub fn new(store: S) -> Self {
        Connection {
            cell: OnceCell::new_with(Some(store)),
            connector: None,
        }
    }

    /// Defer resolution to the first call that needs the store.
    pub fn lazy<F, Fut>(connector: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<S, StoreError>> + Send + 'static,
    {
        Connection {
            cell: OnceCell::new(),
            connector: Some(Box::new(move || Box::pin(connector()))),
        }
    }

    /// The resolved store handle, connecting first if necessary.
    pub async fn resolve(&self) -> Result<&S, StoreError> {
        if let Some(store) = self.cell.get() {
            return Ok(store);
        }
        let connect = self
            .connector
            .as_ref()
            .ok_or_else(|| StoreError::new("connection has no store and no connector"))?;
        self.cell.get_or_try_init(|| connect()).await
    }
}
