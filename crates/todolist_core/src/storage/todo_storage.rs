//! Todo storage contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide transactional CRUD primitives over the `todos` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every operation wraps its statements in an explicit transaction; a
//!   failed statement rolls the transaction back and surfaces as
//!   `StorageError::Unexpected`.
//! - `find_by_id` reports a missing row as `Ok(None)`, never as an error.
//! - Targeted mutations (`update`, `mark_done`, `mark_undone`) report a
//!   missing row as `StorageError::NotFound`.
//! - A row that cannot be re-read after a committed insert/update is an
//!   invariant violation surfaced as `Unexpected`, not as absence.

use parking_lot::Mutex;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TODO_SELECT_SQL: &str = "SELECT id, name, description, done FROM todos";

/// Stable identifier for a persisted todo record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = i64;

pub type StorageResult<T> = Result<T, StorageError>;

/// Persisted todo record with a storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    /// Unique id assigned by storage on insert; immutable thereafter.
    pub id: TodoId,
    /// Required display name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Completion flag; starts as `false` at creation.
    pub done: bool,
}

/// Storage error for todo persistence operations.
#[derive(Debug)]
pub enum StorageError {
    /// A targeted mutation referenced an id with no matching row.
    NotFound(TodoId),
    /// An infrastructure failure underneath a storage call.
    Unexpected(UnexpectedError),
}

/// Infrastructure-level failure wrapped by [`StorageError::Unexpected`].
#[derive(Debug)]
pub enum UnexpectedError {
    /// Driver, statement, or transaction failure.
    Sqlite(rusqlite::Error),
    /// A row issued an id but could not be re-read after commit.
    RowVanished(TodoId),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::Unexpected(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Unexpected(err) => Some(err),
        }
    }
}

impl Display for UnexpectedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::RowVanished(id) => {
                write!(f, "todo {id} vanished between commit and re-read")
            }
        }
    }
}

impl Error for UnexpectedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::RowVanished(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Unexpected(UnexpectedError::Sqlite(value))
    }
}

/// Storage interface for todo CRUD operations.
///
/// Alternate backends are substitutable behind this trait so the service
/// layer can be exercised without SQLite.
pub trait TodoStorage {
    /// Idempotently ensures the underlying table exists.
    fn init(&self) -> StorageResult<()>;
    /// Releases the underlying connection. Called once at shutdown.
    fn close(self) -> StorageResult<()>
    where
        Self: Sized;
    /// Inserts a new record with `done = false` and returns it as persisted.
    fn add(&self, name: &str, description: Option<&str>) -> StorageResult<TodoRecord>;
    /// Looks one record up by id; absence is a non-error outcome.
    fn find_by_id(&self, id: TodoId) -> StorageResult<Option<TodoRecord>>;
    /// Replaces `name`/`description` of an existing record and returns it.
    fn update(&self, id: TodoId, name: &str, description: Option<&str>)
        -> StorageResult<TodoRecord>;
    /// Sets the done flag of an existing record.
    fn mark_done(&self, id: TodoId) -> StorageResult<()>;
    /// Clears the done flag of an existing record.
    fn mark_undone(&self, id: TodoId) -> StorageResult<()>;
}

/// SQLite-backed todo storage.
///
/// Owns the connection handed over at construction time and serializes
/// callers on it; transaction isolation itself is delegated to SQLite.
pub struct SqliteTodoStorage {
    conn: Mutex<Connection>,
}

impl SqliteTodoStorage {
    /// Constructs storage from an explicitly opened connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn set_done(&self, id: TodoId, done: bool) -> StorageResult<()> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let changed = tx.execute(
            "UPDATE todos SET done = ?1 WHERE id = ?2;",
            params![bool_to_int(done), id],
        )?;
        tx.commit()?;

        if changed == 0 {
            return Err(StorageError::NotFound(id));
        }

        Ok(())
    }
}

impl TodoStorage for SqliteTodoStorage {
    fn init(&self) -> StorageResult<()> {
        let conn = self.conn.lock();
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS todos (
                id integer NOT NULL PRIMARY KEY AUTOINCREMENT,
                name text NOT NULL,
                description text NULL DEFAULT NULL,
                done integer DEFAULT 0
            );",
        )?;
        Ok(())
    }

    fn close(self) -> StorageResult<()> {
        self.conn
            .into_inner()
            .close()
            .map_err(|(_conn, err)| err.into())
    }

    fn add(&self, name: &str, description: Option<&str>) -> StorageResult<TodoRecord> {
        let id = {
            let mut conn = self.conn.lock();
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO todos (name, description) VALUES (?1, ?2);",
                params![name, description],
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;
            id
        };

        match self.find_by_id(id)? {
            Some(record) => Ok(record),
            None => Err(StorageError::Unexpected(UnexpectedError::RowVanished(id))),
        }
    }

    fn find_by_id(&self, id: TodoId) -> StorageResult<Option<TodoRecord>> {
        let mut conn = self.conn.lock();
        // Read-only, but kept inside begin/commit to share the same
        // failure-handling discipline as the write paths.
        let tx = conn.transaction()?;
        let record = {
            let mut stmt = tx.prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1 LIMIT 1;"))?;
            let mut rows = stmt.query([id])?;
            match rows.next()? {
                Some(row) => Some(parse_todo_row(row)?),
                None => None,
            }
        };
        tx.commit()?;

        Ok(record)
    }

    fn update(
        &self,
        id: TodoId,
        name: &str,
        description: Option<&str>,
    ) -> StorageResult<TodoRecord> {
        {
            let mut conn = self.conn.lock();
            let tx = conn.transaction()?;
            let changed = tx.execute(
                "UPDATE todos SET name = ?1, description = ?2 WHERE id = ?3;",
                params![name, description, id],
            )?;
            tx.commit()?;

            if changed == 0 {
                return Err(StorageError::NotFound(id));
            }
        }

        match self.find_by_id(id)? {
            Some(record) => Ok(record),
            None => Err(StorageError::Unexpected(UnexpectedError::RowVanished(id))),
        }
    }

    fn mark_done(&self, id: TodoId) -> StorageResult<()> {
        self.set_done(id, true)
    }

    fn mark_undone(&self, id: TodoId) -> StorageResult<()> {
        self.set_done(id, false)
    }
}

fn parse_todo_row(row: &Row<'_>) -> StorageResult<TodoRecord> {
    Ok(TodoRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        done: row.get::<_, i64>("done")? > 0,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
