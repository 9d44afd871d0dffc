//! Todolist HTTP server entry point.
//!
//! # Configuration (environment)
//! - `TODOLIST_DB` - SQLite database path (default `./todolist.db`)
//! - `TODOLIST_LISTEN_ADDR` - bind address (default `0.0.0.0:8080`)
//! - `TODOLIST_LOG_DIR` - absolute log directory (default under the temp dir)
//! - `TODOLIST_LOG_LEVEL` - log level (default by build mode)

use std::sync::Arc;

use todolist_core::{
    default_log_level, init_logging, open_db, SqliteTodoStorage, TodoService, TodoStorage,
};
use todolist_server::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = std::env::var("TODOLIST_LOG_DIR").unwrap_or_else(|_| {
        std::env::temp_dir()
            .join("todolist-logs")
            .to_string_lossy()
            .into_owned()
    });
    let log_level =
        std::env::var("TODOLIST_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    init_logging(&log_level, &log_dir)?;

    let db_path = std::env::var("TODOLIST_DB").unwrap_or_else(|_| "./todolist.db".to_string());
    let listen_addr =
        std::env::var("TODOLIST_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let storage = SqliteTodoStorage::new(open_db(&db_path)?);
    storage.init()?;
    let service = Arc::new(TodoService::new(storage));

    let app = create_router(Arc::clone(&service));
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    log::info!(
        "event=server_start module=server status=ok listen_addr={listen_addr} db_path={db_path}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router is gone once serve returns; the remaining reference is ours.
    match Arc::try_unwrap(service) {
        Ok(service) => service.into_storage().close()?,
        Err(_) => {
            log::warn!("event=server_stop module=server status=warn reason=storage_still_shared");
        }
    }
    log::info!("event=server_stop module=server status=ok");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("event=shutdown_signal module=server status=error error={err}");
    }
}
