//! Demographics - Answers to the intake form
//!
//! Held in the session context only; never written to the user record.

use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, value_objects::Gender};

/// Youngest accepted age
pub const MIN_AGE: u32 = 10;
/// Oldest accepted age
pub const MAX_AGE: u32 = 120;

/// Demographic answers collected before journaling starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: u32,
    pub gender: Gender,
    pub profession: String,
}

impl Demographics {
    /// Validate form answers. Profession is trimmed and must not be empty.
    pub fn new(age: u32, gender: Gender, profession: &str) -> Result<Self, DomainError> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(DomainError::validation(format!(
                "Age must be between {} and {}.",
                MIN_AGE, MAX_AGE
            )));
        }

        let profession = profession.trim();
        if profession.is_empty() {
            return Err(DomainError::validation("Please fill in all fields."));
        }

        Ok(Self {
            age,
            gender,
            profession: profession.to_string(),
        })
    }
}
