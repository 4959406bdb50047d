//! JSON File Repository
//!
//! Stores the UserRecord as a single JSON object on disk.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use reframe::{DomainError, UserRecord, UserRecordRepository};

/// File-backed implementation of UserRecordRepository
pub struct JsonFileRecordRepository {
    path: PathBuf,
}

impl JsonFileRecordRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling file written first and then renamed over the record
    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl UserRecordRepository for JsonFileRecordRepository {
    fn load(&self) -> Result<UserRecord, DomainError> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "No user record found, starting fresh");
            return Ok(UserRecord::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::repository(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        if content.trim().is_empty() {
            return Ok(UserRecord::default());
        }

        let record: UserRecord = serde_json::from_str(&content).map_err(|e| {
            DomainError::repository(format!("Failed to parse {}: {e}", self.path.display()))
        })?;

        tracing::info!(
            path = %self.path.display(),
            streak = record.streak,
            gratitude_entries = record.gratitude_list.len(),
            "Loaded user record"
        );
        Ok(record)
    }

    fn save(&self, record: &UserRecord) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                DomainError::repository(format!("Failed to create {}: {e}", dir.display()))
            })?;
        }

        let body = serde_json::to_string_pretty(record).map_err(|e| {
            DomainError::repository(format!("Failed to serialize user record: {e}"))
        })?;

        let tmp = self.temp_path();
        fs::write(&tmp, body).map_err(|e| {
            DomainError::repository(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            DomainError::repository(format!("Failed to replace {}: {e}", self.path.display()))
        })?;

        tracing::info!(path = %self.path.display(), streak = record.streak, "Saved user record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> UserRecord {
        let mut record = UserRecord {
            streak: 3,
            last_entry: "2026-10-16".to_string(),
            gratitude_list: Vec::new(),
        };
        let day = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        record.add_gratitude("my sister called", day).unwrap();
        record.add_gratitude("fresh bread", day.succ_opt().unwrap()).unwrap();
        record
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRecordRepository::new(dir.path().join("user_data.json"));
        assert_eq!(repo.load().unwrap(), UserRecord::default());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("user_data.json");
        let repo = JsonFileRecordRepository::new(&path);

        repo.save(&sample_record()).unwrap();
        assert!(path.exists());
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn test_save_load_save_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        let repo = JsonFileRecordRepository::new(&path);

        let record = sample_record();
        repo.save(&record).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, record);

        repo.save(&loaded).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reads_exact_three_field_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        fs::write(
            &path,
            r#"{"streak": 4, "last_entry": "2026-10-15", "gratitude_list": [{"date": "2026-10-15", "entry": "tea"}]}"#,
        )
        .unwrap();

        let record = JsonFileRecordRepository::new(&path).load().unwrap();
        assert_eq!(record.streak, 4);
        assert_eq!(record.last_entry, "2026-10-15");
        assert_eq!(record.gratitude_list[0].entry, "tea");
    }

    #[test]
    fn test_loads_record_with_non_strict_gratitude_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        fs::write(
            &path,
            r#"{"streak": 1, "last_entry": "2026-10-15", "gratitude_list": [{"date": "2026-10-15T08:00:00", "entry": "tea"}, {"date": "last tuesday", "entry": "a nap"}]}"#,
        )
        .unwrap();

        let repo = JsonFileRecordRepository::new(&path);
        let record = repo.load().unwrap();
        assert_eq!(record.gratitude_list.len(), 2);
        assert_eq!(record.gratitude_list[0].date, "2026-10-15T08:00:00");
        assert_eq!(record.gratitude_list[1].date, "last tuesday");

        repo.save(&record).unwrap();
        assert_eq!(repo.load().unwrap(), record);
    }

    #[test]
    fn test_empty_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(
            JsonFileRecordRepository::new(&path).load().unwrap(),
            UserRecord::default()
        );
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileRecordRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));
    }
}
