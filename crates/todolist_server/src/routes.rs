//! Router configuration.
//!
//! # Routes
//! - `GET /api/todos/:id` - Get one todo
//! - `POST /api/todos` - Create a todo
//! - `PUT /api/todos/:id` - Update name/description
//! - `POST /api/todos/markDone/:id` - Set the done flag
//! - `POST /api/todos/markUndone/:id` - Clear the done flag

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use todolist_core::{TodoService, TodoStorage};

use crate::handlers;

/// Creates the API router over a shared service instance.
pub fn create_router<S>(service: Arc<TodoService<S>>) -> Router
where
    S: TodoStorage + Send + Sync + 'static,
{
    Router::new()
        .route("/api/todos", post(handlers::create_todo::<S>))
        .route(
            "/api/todos/:id",
            get(handlers::get_todo::<S>).put(handlers::update_todo::<S>),
        )
        .route("/api/todos/markDone/:id", post(handlers::mark_done::<S>))
        .route(
            "/api/todos/markUndone/:id",
            post(handlers::mark_undone::<S>),
        )
        .with_state(service)
}
