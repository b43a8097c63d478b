use std::fmt;

/// Failure raised by a [`DocumentStore`](crate::DocumentStore) backend.
///
/// Carries whatever the backend reported; the adapter passes it through
/// unchanged, with no retries and no logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store error: {}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// Failure rebuilding an aggregate from its stored primitives, or
/// serializing one into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitivesError {
    message: String,
}

impl PrimitivesError {
    pub fn new(message: impl Into<String>) -> Self {
        PrimitivesError {
            message: message.into(),
        }
    }
}

impl fmt::Display for PrimitivesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "primitives error: {}", self.message)
    }
}

impl std::error::Error for PrimitivesError {}

/// Error type for repository operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A lookup, update, or delete matched no document.
    ItemNotFound {
        aggregate: &'static str,
        key: String,
        value: String,
    },
    /// The store reported no inserted record.
    PersistFailed {
        collection: &'static str,
        id: String,
    },
    /// A stored document could not be turned back into an aggregate.
    Primitives(PrimitivesError),
    /// Backend failure, propagated unchanged.
    Store(StoreError),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::ItemNotFound {
                aggregate,
                key,
                value,
            } => write!(
                f,
                "{} document with {} '{}' does not exist",
                aggregate, key, value
            ),
            RepositoryError::PersistFailed { collection, id } => {
                write!(f, "error persisting {} document with id '{}'", collection, id)
            }
            RepositoryError::Primitives(err) => write!(f, "{}", err),
            RepositoryError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        RepositoryError::Store(err)
    }
}

impl From<PrimitivesError> for RepositoryError {
    fn from(err: PrimitivesError) -> Self {
        RepositoryError::Primitives(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_not_found_display() {
        let err = RepositoryError::ItemNotFound {
            aggregate: "Todo",
            key: "id".to_string(),
            value: "todo-1".to_string(),
        };
        assert_eq!(err.to_string(), "Todo document with id 'todo-1' does not exist");
    }

    #[test]
    fn persist_failed_display() {
        let err = RepositoryError::PersistFailed {
            collection: "todos",
            id: "todo-1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "error persisting todos document with id 'todo-1'"
        );
    }

    #[test]
    fn store_error_converts() {
        let err: RepositoryError = StoreError::new("connection refused").into();
        assert_eq!(err.to_string(), "store error: connection refused");
    }
}
