//! HTTP transport for the todolist service.
//!
//! # Responsibility
//! - Bind the core `TodoService` operations to the `/api/todos` routes.
//! - Map storage errors and lookup outcomes to HTTP status codes.
//!
//! # Invariants
//! - Handlers perform binding and status mapping only; no business rules.
//! - `Unexpected` causes are logged server-side, never sent to clients.

pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::create_router;
