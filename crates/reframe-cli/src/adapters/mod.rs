//! Infrastructure Adapters
//!
//! Implementations of domain ports for the local filesystem and terminal.

pub mod formatters;
pub mod json_file;
pub mod password_file;

// Re-exports
pub use json_file::JsonFileRecordRepository;
pub use password_file::PasswordFileGate;
