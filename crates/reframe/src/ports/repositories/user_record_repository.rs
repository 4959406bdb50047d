//! UserRecord Repository Port
//!
//! Abstract interface for UserRecord persistence operations.
//! The record is read once per session and written back whole.

use crate::domain::{errors::DomainError, UserRecord};

/// Repository interface for the single UserRecord
pub trait UserRecordRepository {
    /// Load the record, or the default record if none has been saved yet
    fn load(&self) -> Result<UserRecord, DomainError>;

    /// Replace the stored record
    fn save(&self, record: &UserRecord) -> Result<(), DomainError>;
}
