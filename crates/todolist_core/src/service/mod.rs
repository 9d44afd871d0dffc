//! Use-case services.
//!
//! # Responsibility
//! - Translate transport-facing shapes into storage calls and back.
//! - Keep transport layers decoupled from storage details.

pub mod todo_service;
