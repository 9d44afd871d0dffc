//! Todo endpoint handlers.
//!
//! # Responsibility
//! - Bind path/body parameters, invoke the service, map outcomes to responses.
//!
//! # Invariants
//! - Each handler calls exactly one service operation.
//! - Absent lookup results map to 404; malformed input maps to 400 before the
//!   service is invoked.
//! - Storage calls are single short SQLite statements executed on the request
//!   task; the connection lock is never held across an `await`.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use todolist_core::{CreateTodo, Todo, TodoId, TodoService, TodoStorage, UpdateTodo};

use crate::error::ApiError;

/// Request body for `PUT /api/todos/:id`; the id comes from the path.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoBody {
    pub name: String,
    pub description: Option<String>,
}

/// `GET /api/todos/:id`
pub async fn get_todo<S>(
    State(service): State<Arc<TodoService<S>>>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Todo>, ApiError>
where
    S: TodoStorage + Send + Sync + 'static,
{
    let Path(id) = id.map_err(|_| ApiError::BadRequest)?;
    match service.find_by_id(id)? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::NotFound(id)),
    }
}

/// `POST /api/todos`
pub async fn create_todo<S>(
    State(service): State<Arc<TodoService<S>>>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError>
where
    S: TodoStorage + Send + Sync + 'static,
{
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;
    let todo = service.create(body)?;
    Ok(Json(todo))
}

/// `PUT /api/todos/:id`
pub async fn update_todo<S>(
    State(service): State<Arc<TodoService<S>>>,
    id: Result<Path<TodoId>, PathRejection>,
    body: Result<Json<UpdateTodoBody>, JsonRejection>,
) -> Result<Json<Todo>, ApiError>
where
    S: TodoStorage + Send + Sync + 'static,
{
    let Path(id) = id.map_err(|_| ApiError::BadRequest)?;
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;
    let todo = service.update(UpdateTodo {
        id,
        name: body.name,
        description: body.description,
    })?;
    Ok(Json(todo))
}

/// `POST /api/todos/markDone/:id`
pub async fn mark_done<S>(
    State(service): State<Arc<TodoService<S>>>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    S: TodoStorage + Send + Sync + 'static,
{
    let Path(id) = id.map_err(|_| ApiError::BadRequest)?;
    service.mark_done(id)?;
    Ok(StatusCode::OK)
}

/// `POST /api/todos/markUndone/:id`
pub async fn mark_undone<S>(
    State(service): State<Arc<TodoService<S>>>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    S: TodoStorage + Send + Sync + 'static,
{
    let Path(id) = id.map_err(|_| ApiError::BadRequest)?;
    service.mark_undone(id)?;
    Ok(StatusCode::OK)
}
