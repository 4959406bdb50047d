//! Journal Application Service (Use Case)
//!
//! Holds the user record for one session: it is loaded once, mutated in
//! place and written back whenever the streak or gratitude list changes.

use chrono::NaiveDate;

use reframe::{
    analyze, check_in, DistortionAnalysis, DomainError, GratitudeEntry, StreakUpdate, UserRecord,
    UserRecordRepository,
};

/// Outcome of reflecting on a thought
#[derive(Debug, Clone)]
pub struct Reflection {
    pub analysis: DistortionAnalysis,
    pub streak: StreakUpdate,
}

/// Application service for journaling operations
pub struct JournalService<R: UserRecordRepository> {
    repo: R,
    record: UserRecord,
}

impl<R: UserRecordRepository> JournalService<R> {
    /// Load the record from the repository
    pub fn open(repo: R) -> Result<Self, DomainError> {
        let record = repo.load()?;
        Ok(Self { repo, record })
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    /// Count today as a day of use
    pub fn check_in(&mut self, today: NaiveDate) -> Result<StreakUpdate, DomainError> {
        let update = check_in(&mut self.record, today);
        if update.is_changed() {
            self.repo.save(&self.record)?;
        }
        Ok(update)
    }

    /// Analyze a negative thought and check in
    pub fn reflect(&mut self, thought: &str, today: NaiveDate) -> Result<Reflection, DomainError> {
        if thought.trim().is_empty() {
            return Err(DomainError::validation("Please enter a thought to analyze."));
        }

        let analysis = analyze(thought);
        let streak = self.check_in(today)?;
        Ok(Reflection { analysis, streak })
    }

    /// Append a gratitude entry, check in, and persist both changes together
    pub fn add_gratitude(
        &mut self,
        text: &str,
        today: NaiveDate,
    ) -> Result<(GratitudeEntry, StreakUpdate), DomainError> {
        let entry = self.record.add_gratitude(text, today)?.clone();
        let update = check_in(&mut self.record, today);
        self.repo.save(&self.record)?;

        tracing::info!(
            gratitude_entries = self.record.gratitude_list.len(),
            "Added gratitude entry"
        );
        Ok((entry, update))
    }

    /// The `limit` most recent gratitude entries, newest first
    pub fn recent_gratitude(&self, limit: usize) -> Vec<&GratitudeEntry> {
        self.record.recent_gratitude(limit).collect()
    }
}
