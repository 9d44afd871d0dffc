//! Core domain logic for the todolist service.
//! This crate is the single source of truth for storage and service contracts.

pub mod db;
pub mod logging;
pub mod service;
pub mod storage;

pub use db::{open_db, open_db_in_memory};
pub use logging::{default_log_level, init_logging, logging_status};
pub use service::todo_service::{CreateTodo, Todo, TodoService, UpdateTodo};
pub use storage::todo_storage::{
    SqliteTodoStorage, StorageError, StorageResult, TodoId, TodoRecord, TodoStorage,
    UnexpectedError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
