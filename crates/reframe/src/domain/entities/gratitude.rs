//! GratitudeEntry - A dated note of something the user is grateful for

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::user_record::{string_or_null, DATE_FORMAT};

/// Number of gratitude entries shown by default, newest first
pub const RECENT_GRATITUDE_LIMIT: usize = 5;

/// A single gratitude journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratitudeEntry {
    /// Day the entry was written. New entries use YYYY-MM-DD; stored values
    /// are kept as written.
    #[serde(default, deserialize_with = "string_or_null")]
    pub date: String,
    /// What the user is grateful for
    #[serde(default, deserialize_with = "string_or_null")]
    pub entry: String,
}

impl GratitudeEntry {
    pub fn new(date: NaiveDate, entry: impl Into<String>) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            entry: entry.into(),
        }
    }
}
