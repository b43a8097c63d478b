use crate::document::Document;
use crate::error::PrimitivesError;
use crate::identifier::Identifier;

/// Contract an aggregate root fulfils to be stored as a document.
///
/// The serialization pair must satisfy the round-trip law:
/// `from_primitives(to_primitives(x))` rebuilds an aggregate equivalent
/// to `x` for every valid `x`.
///
/// # Example
///
/// ```
/// use docstore_rust::{from_document, AggregateRoot, Document, Identifier, PrimitivesError};
/// use serde::{Deserialize, Serialize};
/// use serde_json::Value;
///
/// #[derive(Clone, Serialize, Deserialize)]
/// struct Todo {
///     id: Identifier,
///     task: String,
/// }
///
/// impl AggregateRoot for Todo {
///     const COLLECTION: &'static str = "todos";
///
///     fn id(&self) -> Identifier {
///         self.id.clone()
///     }
///
///     fn to_primitives(&self) -> Document {
///         let mut document = Document::new();
///         document.insert("id".into(), Value::String(self.id.value().into()));
///         document.insert("task".into(), Value::String(self.task.clone()));
///         document
///     }
///
///     fn from_primitives(primitives: Document) -> Result<Self, PrimitivesError> {
///         from_document(primitives)
///     }
/// }
/// ```
pub trait AggregateRoot: Sized + Send + Sync {
    /// Collection (module) name documents of this aggregate are stored under.
    const COLLECTION: &'static str;

    /// The aggregate's unique identifier.
    fn id(&self) -> Identifier;

    /// Serialize into a flat document. The identifier must be carried as
    /// an ordinary field named `"id"`.
    fn to_primitives(&self) -> Document;

    /// Rebuild an aggregate from a stored document.
    fn from_primitives(primitives: Document) -> Result<Self, PrimitivesError>;
}
