//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered record collection for the current run.
//! - Keep storage shape out of service/presentation code.
//!
//! # Invariants
//! - Iteration order equals insertion order.
//! - Records are only ever appended; nothing is removed or replaced.

use crate::model::record::Record;

/// Repository interface for the append-only record collection.
pub trait RecordRepository {
    fn append(&mut self, record: Record);
    fn all(&self) -> &[Record];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Process-lifetime repository backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordRepository {
    records: Vec<Record>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordRepository for InMemoryRecordRepository {
    fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    fn all(&self) -> &[Record] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryRecordRepository, RecordRepository};
    use crate::model::record::Record;

    #[test]
    fn append_preserves_insertion_order() {
        let mut repo = InMemoryRecordRepository::new();
        assert!(repo.is_empty());

        repo.append(Record::new("Math", "Limits", 30).unwrap());
        repo.append(Record::new("Math", "Limits", 30).unwrap());
        repo.append(Record::new("Biology", "Cells", 20).unwrap());

        assert_eq!(repo.len(), 3);
        assert_eq!(repo.all()[0], repo.all()[1]);
        assert_eq!(repo.all()[2].topic(), "Cells");
    }
}
