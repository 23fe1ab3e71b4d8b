//! Study log use-case service.
//!
//! # Responsibility
//! - Provide the add/total/filter entry points used by the interactive loop.
//! - Validate records before they reach the repository.
//!
//! # Invariants
//! - A rejected add leaves the repository unchanged.
//! - Filter results keep the original relative order.
//! - Logged events carry counts and durations only, never user text.

use crate::model::record::{Record, RecordValidationError};
use crate::repo::record_repo::{InMemoryRecordRepository, RecordRepository};
use log::{debug, info, warn};

/// Count/total pair for a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    pub count: usize,
    pub total_minutes: u64,
}

impl FilterSummary {
    pub fn of(records: &[Record]) -> Self {
        Self {
            count: records.len(),
            total_minutes: sum_minutes(records),
        }
    }
}

/// Owned record store plus derived queries.
pub struct StudyLogService<R: RecordRepository> {
    repo: R,
}

/// Service over the process-lifetime in-memory store.
pub type InMemoryStudyLog = StudyLogService<InMemoryRecordRepository>;

impl Default for InMemoryStudyLog {
    fn default() -> Self {
        Self::new(InMemoryRecordRepository::new())
    }
}

impl<R: RecordRepository> StudyLogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends a new record.
    ///
    /// # Contract
    /// - On success the store grows by exactly one and the record is last.
    /// - Returns a clone of the stored record for confirmation output.
    ///
    /// # Errors
    /// - `NonPositiveDuration` when `duration_minutes == 0`.
    pub fn add(
        &mut self,
        subject: impl Into<String>,
        topic: impl Into<String>,
        duration_minutes: u64,
    ) -> Result<Record, RecordValidationError> {
        let record = match Record::new(subject, topic, duration_minutes) {
            Ok(record) => record,
            Err(err) => {
                warn!("event=record_rejected module=service status=error reason={err}");
                return Err(err);
            }
        };
        self.repo.append(record.clone());
        info!(
            "event=record_added module=service status=ok duration_minutes={} count={}",
            duration_minutes,
            self.repo.len()
        );
        Ok(record)
    }

    pub fn records(&self) -> &[Record] {
        self.repo.all()
    }

    pub fn count(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Sum of all durations; `0` for an empty store, `u64::MAX` on overflow.
    pub fn total_duration(&self) -> u64 {
        sum_minutes(self.repo.all())
    }

    /// Returns records whose subject equals `name`, ignoring case.
    ///
    /// An empty result is a normal outcome, not an error.
    pub fn filter_by_subject(&self, name: &str) -> Vec<Record> {
        let matches: Vec<Record> = self
            .repo
            .all()
            .iter()
            .filter(|record| record.subject_matches(name))
            .cloned()
            .collect();
        debug!(
            "event=records_filtered module=service status=ok scanned={} matched={}",
            self.repo.len(),
            matches.len()
        );
        matches
    }
}

fn sum_minutes(records: &[Record]) -> u64 {
    records
        .iter()
        .fold(0, |total, record| total.saturating_add(record.duration_minutes()))
}

#[cfg(test)]
mod tests {
    use super::{FilterSummary, InMemoryStudyLog};

    #[test]
    fn total_of_empty_store_is_zero() {
        let service = InMemoryStudyLog::default();
        assert_eq!(service.total_duration(), 0);
        assert!(service.is_empty());
    }

    #[test]
    fn total_sums_beyond_u32_and_saturates() {
        let mut service = InMemoryStudyLog::default();
        service.add("a", "b", u64::from(u32::MAX)).unwrap();
        service.add("a", "b", u64::from(u32::MAX)).unwrap();
        assert_eq!(service.total_duration(), 2 * u64::from(u32::MAX));

        service.add("a", "b", u64::MAX).unwrap();
        assert_eq!(service.total_duration(), u64::MAX);
    }

    #[test]
    fn filter_summary_counts_matches() {
        let mut service = InMemoryStudyLog::default();
        service.add("Math", "Limits", 30).unwrap();
        service.add("Physics", "Optics", 15).unwrap();
        service.add("math", "Series", 20).unwrap();

        let summary = FilterSummary::of(&service.filter_by_subject("MATH"));
        assert_eq!(
            summary,
            FilterSummary {
                count: 2,
                total_minutes: 50
            }
        );
    }
}
