//! InMemoryDocumentStore - HashMap-backed store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use crate::document::Document;
use crate::error::StoreError;
use crate::store::DocumentStore;

/// In-memory document store backed by a HashMap of collections.
///
/// Documents keep insertion order within a collection, which gives
/// `find_all` a deterministic iteration order. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        InMemoryDocumentStore {
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn matches(document: &Document, field: &str, value: &Value) -> bool {
    document.get(field) == Some(value)
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::new("lock poisoned"))?;

        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::new("lock poisoned"))?;

        Ok(collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| matches(d, field, value)))
            .cloned())
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<bool, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::new("lock poisoned"))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(true)
    }

    async fn update_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
        changes: Document,
    ) -> Result<u64, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::new("lock poisoned"))?;

        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let Some(document) = documents.iter_mut().find(|d| matches(d, field, value)) else {
            return Ok(0);
        };

        for (changed_field, changed_value) in changes {
            document.insert(changed_field, changed_value);
        }
        Ok(1)
    }

    async fn delete_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<u64, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::new("lock poisoned"))?;

        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match documents.iter().position(|d| matches(d, field, value)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
