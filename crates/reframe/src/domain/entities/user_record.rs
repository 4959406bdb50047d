//! UserRecord - Persisted journaling state
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{entities::GratitudeEntry, errors::DomainError};

/// Date format used for `last_entry`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// UserRecord - Streak counter and gratitude history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Consecutive days of use
    #[serde(default)]
    pub streak: u32,
    /// Last day the journal was used, as YYYY-MM-DD, or empty
    #[serde(default, deserialize_with = "string_or_null")]
    pub last_entry: String,
    /// Gratitude entries, oldest first
    #[serde(default)]
    pub gratitude_list: Vec<GratitudeEntry>,
}

impl UserRecord {
    /// Parsed `last_entry`. Empty or malformed values mean "no prior entry".
    pub fn last_entry_date(&self) -> Option<NaiveDate> {
        let raw = self.last_entry.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
    }

    /// Append a gratitude entry dated `today`
    pub fn add_gratitude(
        &mut self,
        text: &str,
        today: NaiveDate,
    ) -> Result<&GratitudeEntry, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::validation(
                "Please write something you're grateful for.",
            ));
        }

        self.gratitude_list.push(GratitudeEntry::new(today, text));
        Ok(&self.gratitude_list[self.gratitude_list.len() - 1])
    }

    /// The `limit` most recent gratitude entries, newest first
    pub fn recent_gratitude(&self, limit: usize) -> impl Iterator<Item = &GratitudeEntry> {
        self.gratitude_list.iter().rev().take(limit)
    }
}

pub(crate) fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_default_is_fresh_start() {
        let record = UserRecord::default();
        assert_eq!(record.streak, 0);
        assert_eq!(record.last_entry, "");
        assert!(record.gratitude_list.is_empty());
        assert_eq!(record.last_entry_date(), None);
    }

    #[test]
    fn test_malformed_last_entry_is_no_prior_entry() {
        let record = UserRecord {
            last_entry: "16/10/2026".to_string(),
            ..Default::default()
        };
        assert_eq!(record.last_entry_date(), None);
    }

    #[test]
    fn test_gratitude_append_keeps_order() {
        let mut record = UserRecord::default();
        record.add_gratitude("coffee", day("2026-10-01")).unwrap();
        record.add_gratitude("  a long walk ", day("2026-10-02")).unwrap();

        let entries: Vec<&str> = record
            .gratitude_list
            .iter()
            .map(|g| g.entry.as_str())
            .collect();
        assert_eq!(entries, vec!["coffee", "a long walk"]);
    }

    #[test]
    fn test_empty_gratitude_rejected() {
        let mut record = UserRecord::default();
        assert!(record.add_gratitude("   ", day("2026-10-01")).is_err());
        assert!(record.gratitude_list.is_empty());
    }

    #[test]
    fn test_recent_gratitude_newest_first() {
        let mut record = UserRecord::default();
        for i in 1..=7 {
            record
                .add_gratitude(&format!("entry {}", i), day(&format!("2026-10-0{}", i)))
                .unwrap();
        }

        let recent: Vec<&str> = record
            .recent_gratitude(crate::domain::RECENT_GRATITUDE_LIMIT)
            .map(|g| g.entry.as_str())
            .collect();
        assert_eq!(
            recent,
            vec!["entry 7", "entry 6", "entry 5", "entry 4", "entry 3"]
        );
    }

    #[test]
    fn test_json_shape() {
        let mut record = UserRecord {
            streak: 2,
            last_entry: "2026-10-16".to_string(),
            gratitude_list: Vec::new(),
        };
        record.add_gratitude("sunshine", day("2026-10-16")).unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "streak": 2,
                "last_entry": "2026-10-16",
                "gratitude_list": [{"date": "2026-10-16", "entry": "sunshine"}]
            })
        );
    }

    #[test]
    fn test_null_and_missing_fields_default() {
        let record: UserRecord = serde_json::from_str(r#"{"last_entry": null}"#).unwrap();
        assert_eq!(record, UserRecord::default());
    }
}
