//! Todo use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for transport callers.
//! - Delegate persistence to storage implementations.
//!
//! # Invariants
//! - Every operation delegates to exactly one storage call with 1:1 field
//!   mapping in each direction.
//! - Storage errors and present/absent outcomes propagate unchanged.

use crate::storage::todo_storage::{StorageResult, TodoId, TodoRecord, TodoStorage};
use serde::{Deserialize, Serialize};

/// Input shape for creating a todo. Carries no identity; storage assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodo {
    pub name: String,
    pub description: Option<String>,
}

/// Input shape for replacing the text fields of an existing todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub id: TodoId,
    pub name: String,
    pub description: Option<String>,
}

/// Transport-facing todo shape, serialized as `{id, name, description, done}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub description: Option<String>,
    pub done: bool,
}

impl From<TodoRecord> for Todo {
    fn from(record: TodoRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            done: record.done,
        }
    }
}

/// Use-case service wrapper for todo CRUD operations.
pub struct TodoService<S: TodoStorage> {
    storage: S,
}

impl<S: TodoStorage> TodoService<S> {
    /// Creates a service using the provided storage implementation.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persists a new todo and returns it with its assigned id.
    pub fn create(&self, todo: CreateTodo) -> StorageResult<Todo> {
        self.storage
            .add(&todo.name, todo.description.as_deref())
            .map(Todo::from)
    }

    /// Replaces the text fields of an existing todo.
    ///
    /// Returns storage-level not-found errors unchanged.
    pub fn update(&self, todo: UpdateTodo) -> StorageResult<Todo> {
        self.storage
            .update(todo.id, &todo.name, todo.description.as_deref())
            .map(Todo::from)
    }

    /// Gets one todo by id; absence is a non-error outcome.
    pub fn find_by_id(&self, id: TodoId) -> StorageResult<Option<Todo>> {
        Ok(self.storage.find_by_id(id)?.map(Todo::from))
    }

    /// Marks one todo as done.
    pub fn mark_done(&self, id: TodoId) -> StorageResult<()> {
        self.storage.mark_done(id)
    }

    /// Marks one todo as not done.
    pub fn mark_undone(&self, id: TodoId) -> StorageResult<()> {
        self.storage.mark_undone(id)
    }

    /// Releases the wrapped storage so the caller can close it at shutdown.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
