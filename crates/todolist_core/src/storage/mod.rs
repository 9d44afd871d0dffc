//! Storage layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the todo persistence contract consumed by the service layer.
//! - Isolate SQLite query and transaction details from callers.
//!
//! # Invariants
//! - Storage assigns record ids; no other component may set them.
//! - Storage APIs keep two axes separate: present/absent lookup outcomes and
//!   success/failure of the call itself.

pub mod todo_storage;
