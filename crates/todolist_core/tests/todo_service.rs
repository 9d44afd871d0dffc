use std::cell::RefCell;

use todolist_core::db::open_db_in_memory;
use todolist_core::{
    CreateTodo, SqliteTodoStorage, StorageError, StorageResult, Todo, TodoId, TodoRecord,
    TodoService, TodoStorage, UpdateTodo,
};

fn new_service() -> TodoService<SqliteTodoStorage> {
    let storage = SqliteTodoStorage::new(open_db_in_memory().unwrap());
    storage.init().unwrap();
    TodoService::new(storage)
}

#[test]
fn create_and_find_map_fields_one_to_one() {
    let service = new_service();

    let created = service
        .create(CreateTodo {
            name: "Name".to_string(),
            description: Some("Description".to_string()),
        })
        .unwrap();
    assert_eq!(created.name, "Name");
    assert_eq!(created.description.as_deref(), Some("Description"));
    assert!(!created.done);

    let found = service.find_by_id(created.id).unwrap().unwrap();
    assert_eq!(found, created);
}

#[test]
fn update_passes_not_found_through_unchanged() {
    let service = new_service();

    let err = service
        .update(UpdateTodo {
            id: 555,
            name: "New".to_string(),
            description: None,
        })
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound(555)));
}

#[test]
fn find_passes_absence_through_unchanged() {
    let service = new_service();

    assert!(service.find_by_id(999_999).unwrap().is_none());
}

#[test]
fn mark_operations_delegate_to_storage() {
    let service = new_service();

    let created = service
        .create(CreateTodo {
            name: "flag".to_string(),
            description: None,
        })
        .unwrap();

    service.mark_done(created.id).unwrap();
    assert!(service.find_by_id(created.id).unwrap().unwrap().done);

    service.mark_undone(created.id).unwrap();
    assert!(!service.find_by_id(created.id).unwrap().unwrap().done);
}

#[test]
fn todo_serializes_to_the_wire_shape() {
    let todo = Todo {
        id: 7,
        name: "Name".to_string(),
        description: Some("Description".to_string()),
        done: true,
    };

    let value = serde_json::to_value(&todo).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": 7,
            "name": "Name",
            "description": "Description",
            "done": true
        })
    );
}

/// Minimal in-memory backend proving the service only needs the trait.
#[derive(Default)]
struct VecTodoStorage {
    rows: RefCell<Vec<TodoRecord>>,
}

impl VecTodoStorage {
    fn next_id(&self) -> TodoId {
        self.rows.borrow().iter().map(|row| row.id).max().unwrap_or(0) + 1
    }
}

impl TodoStorage for VecTodoStorage {
    fn init(&self) -> StorageResult<()> {
        Ok(())
    }

    fn close(self) -> StorageResult<()> {
        Ok(())
    }

    fn add(&self, name: &str, description: Option<&str>) -> StorageResult<TodoRecord> {
        let record = TodoRecord {
            id: self.next_id(),
            name: name.to_string(),
            description: description.map(str::to_string),
            done: false,
        };
        self.rows.borrow_mut().push(record.clone());
        Ok(record)
    }

    fn find_by_id(&self, id: TodoId) -> StorageResult<Option<TodoRecord>> {
        Ok(self.rows.borrow().iter().find(|row| row.id == id).cloned())
    }

    fn update(
        &self,
        id: TodoId,
        name: &str,
        description: Option<&str>,
    ) -> StorageResult<TodoRecord> {
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StorageError::NotFound(id))?;
        row.name = name.to_string();
        row.description = description.map(str::to_string);
        Ok(row.clone())
    }

    fn mark_done(&self, id: TodoId) -> StorageResult<()> {
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StorageError::NotFound(id))?;
        row.done = true;
        Ok(())
    }

    fn mark_undone(&self, id: TodoId) -> StorageResult<()> {
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StorageError::NotFound(id))?;
        row.done = false;
        Ok(())
    }
}

#[test]
fn service_runs_against_a_substituted_backend() {
    let service = TodoService::new(VecTodoStorage::default());

    let created = service
        .create(CreateTodo {
            name: "portable".to_string(),
            description: None,
        })
        .unwrap();
    service.mark_done(created.id).unwrap();

    let found = service.find_by_id(created.id).unwrap().unwrap();
    assert!(found.done);

    let err = service.mark_done(999).unwrap_err();
    assert!(matches!(err, StorageError::NotFound(999)));
}
