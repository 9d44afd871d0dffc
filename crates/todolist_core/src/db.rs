//! SQLite connection bootstrap.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for the todolist service.
//! - Configure connection pragmas required by storage behavior.
//!
//! # Invariants
//! - Returned connections have a busy timeout configured.
//! - Schema creation is owned by [`crate::storage::todo_storage::TodoStorage::init`],
//!   not by connection bootstrap.

use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a SQLite database file ready for storage use.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> rusqlite::Result<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory SQLite database ready for storage use.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_in_memory() -> rusqlite::Result<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }
    };

    bootstrap_connection(&conn)?;
    info!(
        "event=db_open module=db status=ok mode=memory duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

fn bootstrap_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(())
}
