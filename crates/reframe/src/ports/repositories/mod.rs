//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod user_record_repository;

pub use user_record_repository::*;
