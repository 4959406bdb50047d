//! Application Services (Use Cases)
//!
//! Orchestrate domain operations and persistence.

mod journal_service;

pub use journal_service::*;
