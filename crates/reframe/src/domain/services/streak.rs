//! Streak Updater - Daily-use counter
//!
//! Decides how the streak changes when the journal is used on a given day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{UserRecord, DATE_FORMAT};

/// What a check-in did to the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakUpdate {
    /// Already checked in today
    Unchanged,
    /// Last entry was yesterday; streak grew by one
    Extended,
    /// No usable prior entry or a gap; streak restarted at one
    Started,
}

impl StreakUpdate {
    /// Whether the record changed and must be persisted
    pub fn is_changed(self) -> bool {
        !matches!(self, StreakUpdate::Unchanged)
    }
}

/// Record use of the journal on `today`
pub fn check_in(record: &mut UserRecord, today: NaiveDate) -> StreakUpdate {
    let last = record.last_entry_date();
    if last == Some(today) {
        return StreakUpdate::Unchanged;
    }

    let update = match last.map(|last| (today - last).num_days()) {
        Some(1) => {
            record.streak = record.streak.saturating_add(1);
            StreakUpdate::Extended
        }
        _ => {
            record.streak = 1;
            StreakUpdate::Started
        }
    };
    record.last_entry = today.format(DATE_FORMAT).to_string();

    tracing::info!(streak = record.streak, ?update, "Streak checked in");
    update
}
