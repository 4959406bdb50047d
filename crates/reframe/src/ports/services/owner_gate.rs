//! Owner Gate Port
//!
//! Authorization check that unlocks owner-only tools.

use crate::domain::errors::DomainError;

/// Shown when no password file is configured or present
pub const PASSWORD_FILE_MISSING: &str = "Password file not found. Contact app owner.";
/// Shown when the password does not match
pub const ACCESS_DENIED: &str = "Access denied: Incorrect password.";

/// Verifies the owner's password
pub trait OwnerGate {
    /// Returns `Ok(())` when `password` is the owner's password.
    ///
    /// Errors with `DomainError::NotFound` when no credential exists and
    /// `DomainError::Unauthorized` when the password is wrong.
    fn authorize(&self, password: &str) -> Result<(), DomainError>;

    /// Store a new owner password
    fn set_password(&self, password: &str) -> Result<(), DomainError>;

    /// Whether an owner credential has been set up
    fn is_configured(&self) -> bool;
}
