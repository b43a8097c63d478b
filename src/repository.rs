use std::any::type_name;
use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;

use crate::aggregate::AggregateRoot;
use crate::connection::Connection;
use crate::document::Document;
use crate::error::RepositoryError;
use crate::identifier::Identifier;
use crate::store::DocumentStore;

/// Identifier convention: the id lives in the document as a plain field,
/// queried by equality. No store-native key encoding.
const ID_FIELD: &str = "id";

/// Domain-layer port for aggregate persistence.
///
/// Domain code depends on this trait; [`DocumentRepository`] is the
/// shipped implementation.
#[async_trait]
pub trait Repository<T: AggregateRoot>: Send + Sync {
    /// Every aggregate in the collection, in store iteration order.
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// Look up a single aggregate by identifier.
    async fn get_by_id(&self, id: &Identifier) -> Result<T, RepositoryError>;

    /// Convenience alias for [`Repository::get_by_id`].
    async fn get(&self, id: &Identifier) -> Result<T, RepositoryError>;

    /// Insert a new document for `item`.
    async fn persist(&self, item: &T) -> Result<(), RepositoryError>;

    /// Replace the fields of the existing document matching `item`'s
    /// identifier. Never inserts.
    async fn update_one(&self, item: &T) -> Result<(), RepositoryError>;

    /// Remove the document matching `id`.
    async fn delete_one(&self, id: &Identifier) -> Result<(), RepositoryError>;
}

/// Generic persistence adapter mapping aggregate roots to documents in a
/// collection-oriented store.
///
/// Every operation is a single pass-through call to the backend, wrapped
/// in a thin error-translation layer: no retries, no caching, no logging.
/// Concurrent writes targeting the same identifier race at the store
/// level.
pub struct DocumentRepository<S, T> {
    connection: Connection<S>,
    _marker: PhantomData<fn() -> T>,
}

impl<S: DocumentStore, T: AggregateRoot> DocumentRepository<S, T> {
    /// Build an adapter over an owned store connection.
    pub fn new(connection: Connection<S>) -> Self {
        DocumentRepository {
            connection,
            _marker: PhantomData,
        }
    }

    /// Collection documents of `T` are stored under.
    pub fn collection(&self) -> &'static str {
        T::COLLECTION
    }

    async fn store(&self) -> Result<&S, RepositoryError> {
        Ok(self.connection.resolve().await?)
    }

    /// Fetch every document in the collection and deserialize each.
    /// An empty collection yields an empty vector.
    pub async fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        let store = self.store().await?;
        let documents = store.find_all(T::COLLECTION).await?;
        let mut items = Vec::with_capacity(documents.len());
        for document in documents {
            items.push(T::from_primitives(document)?);
        }
        Ok(items)
    }

    /// Look up a single aggregate by equality on an arbitrary field.
    pub async fn get_by(
        &self,
        key: &str,
        value: impl Into<Value> + Send,
    ) -> Result<T, RepositoryError> {
        let value = value.into();
        let store = self.store().await?;
        match store.find_one(T::COLLECTION, key, &value).await? {
            Some(document) => Ok(T::from_primitives(document)?),
            None => Err(item_not_found::<T>(key, &value)),
        }
    }

    /// Look up a single aggregate by identifier.
    pub async fn get_by_id(&self, id: &Identifier) -> Result<T, RepositoryError> {
        self.get_by(ID_FIELD, id.value()).await
    }

    /// Convenience alias for [`DocumentRepository::get_by_id`].
    pub async fn get(&self, id: &Identifier) -> Result<T, RepositoryError> {
        self.get_by(ID_FIELD, id.value()).await
    }

    /// Insert a new document derived from `item.to_primitives()`.
    pub async fn persist(&self, item: &T) -> Result<(), RepositoryError> {
        let store = self.store().await?;
        let inserted = store.insert_one(T::COLLECTION, item.to_primitives()).await?;
        if inserted {
            Ok(())
        } else {
            Err(RepositoryError::PersistFailed {
                collection: T::COLLECTION,
                id: item.id().value().to_string(),
            })
        }
    }

    /// Replace the fields of the document matching `item`'s identifier
    /// with `item.to_primitives()`. The payload is built without the
    /// identifier field; the match never upserts.
    pub async fn update_one(&self, item: &T) -> Result<(), RepositoryError> {
        let mut changes = Document::new();
        for (field, value) in item.to_primitives() {
            if field != ID_FIELD {
                changes.insert(field, value);
            }
        }

        let id_value = Value::String(item.id().value().to_string());
        let store = self.store().await?;
        let matched = store
            .update_one(T::COLLECTION, ID_FIELD, &id_value, changes)
            .await?;
        if matched == 0 {
            return Err(item_not_found::<T>(ID_FIELD, &id_value));
        }
        Ok(())
    }

    /// Remove the document matching `id`.
    pub async fn delete_one(&self, id: &Identifier) -> Result<(), RepositoryError> {
        let id_value = Value::String(id.value().to_string());
        let store = self.store().await?;
        let deleted = store
            .delete_one(T::COLLECTION, ID_FIELD, &id_value)
            .await?;
        if deleted == 0 {
            return Err(item_not_found::<T>(ID_FIELD, &id_value));
        }
        Ok(())
    }
}

#[async_trait]
impl<S: DocumentStore, T: AggregateRoot> Repository<T> for DocumentRepository<S, T> {
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        DocumentRepository::get_all(self).await
    }

    async fn get_by_id(&self, id: &Identifier) -> Result<T, RepositoryError> {
        DocumentRepository::get_by_id(self, id).await
    }

    async fn get(&self, id: &Identifier) -> Result<T, RepositoryError> {
        DocumentRepository::get(self, id).await
    }

    async fn persist(&self, item: &T) -> Result<(), RepositoryError> {
        DocumentRepository::persist(self, item).await
    }

    async fn update_one(&self, item: &T) -> Result<(), RepositoryError> {
        DocumentRepository::update_one(self, item).await
    }

    async fn delete_one(&self, id: &Identifier) -> Result<(), RepositoryError> {
        DocumentRepository::delete_one(self, id).await
    }
}

fn item_not_found<T: AggregateRoot>(key: &str, value: &Value) -> RepositoryError {
    let value = match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    };
    RepositoryError::ItemNotFound {
        aggregate: short_type_name::<T>(),
        key: key.to_string(),
        value,
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
