//! DocumentStore - the backend contract the adapter is written against.

use async_trait::async_trait;
use serde_json::Value;

use crate::document::Document;
use crate::error::StoreError;

/// Abstract collection-oriented document store.
///
/// Any backend exposing this operation set is substitutable: find-all,
/// find-one by field equality, insert-one, update-one with set semantics
/// and no upsert, delete-one by field equality. The adapter delegates
/// cancellation and timeouts entirely to the implementation.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document in the collection, in store iteration order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// The first document whose `field` equals `value`, if any.
    async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Option<Document>, StoreError>;

    /// Insert a new document. Returns whether the store acknowledged an
    /// inserted record.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<bool, StoreError>;

    /// Set `changes` on the first document whose `field` equals `value`.
    /// Never inserts. Returns the number of matched documents (0 or 1).
    async fn update_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
        changes: Document,
    ) -> Result<u64, StoreError>;

    /// Remove the first document whose `field` equals `value`. Returns
    /// the number of deleted documents (0 or 1).
    async fn delete_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<u64, StoreError>;
}
