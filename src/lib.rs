mod aggregate;
mod connection;
mod document;
mod error;
mod identifier;
mod in_memory;
mod repository;
mod store;

pub use aggregate::AggregateRoot;
pub use connection::Connection;
pub use document::{from_document, to_document, Document};
pub use error::{PrimitivesError, RepositoryError, StoreError};
pub use identifier::Identifier;
pub use in_memory::InMemoryDocumentStore;
pub use repository::{DocumentRepository, Repository};
pub use store::DocumentStore;
