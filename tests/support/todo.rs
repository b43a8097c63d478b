use docstore_rust::{from_document, AggregateRoot, Document, Identifier, PrimitivesError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Identifier,
    pub user_id: String,
    pub task: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: &str, user_id: &str, task: &str) -> Self {
        Todo {
            id: Identifier::new(id),
            user_id: user_id.to_string(),
            task: task.to_string(),
            completed: false,
        }
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }
}

impl AggregateRoot for Todo {
    const COLLECTION: &'static str = "todos";

    fn id(&self) -> Identifier {
        self.id.clone()
    }

    fn to_primitives(&self) -> Document {
        let mut document = Document::new();
        document.insert("id".into(), Value::String(self.id.value().to_string()));
        document.insert("user_id".into(), Value::String(self.user_id.clone()));
        document.insert("task".into(), Value::String(self.task.clone()));
        document.insert("completed".into(), Value::Bool(self.completed));
        document
    }

    fn from_primitives(primitives: Document) -> Result<Self, PrimitivesError> {
        from_document(primitives)
    }
}
