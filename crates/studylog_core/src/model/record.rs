//! Study record domain model.
//!
//! # Responsibility
//! - Define the fixed-shape record for one logged study session.
//! - Classify raw duration input before any record is created.
//!
//! # Invariants
//! - `duration_minutes > 0` for every `Record` that exists.
//! - Records are immutable once created; there is no update path.
//! - Deserialization goes through the same validation as `Record::new`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One logged study session.
///
/// Fields are read-only outside this module so a constructed record can
/// never be pushed back into an invalid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordWire")]
pub struct Record {
    subject: String,
    topic: String,
    duration_minutes: u64,
}

/// Validation failures for record construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Duration was zero; sessions must last at least one minute.
    NonPositiveDuration,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveDuration => write!(f, "duration_minutes must be > 0"),
        }
    }
}

impl Error for RecordValidationError {}

impl Record {
    /// Creates a validated record.
    ///
    /// Subject and topic are stored as given; callers trim user input.
    ///
    /// # Errors
    /// - Returns `NonPositiveDuration` when `duration_minutes == 0`.
    pub fn new(
        subject: impl Into<String>,
        topic: impl Into<String>,
        duration_minutes: u64,
    ) -> Result<Self, RecordValidationError> {
        if duration_minutes == 0 {
            return Err(RecordValidationError::NonPositiveDuration);
        }
        Ok(Self {
            subject: subject.into(),
            topic: topic.into(),
            duration_minutes,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn duration_minutes(&self) -> u64 {
        self.duration_minutes
    }

    /// Case-insensitive subject comparison used by filter queries.
    pub fn subject_matches(&self, name: &str) -> bool {
        self.subject.to_lowercase() == name.to_lowercase()
    }
}

#[derive(Deserialize)]
struct RecordWire {
    subject: String,
    topic: String,
    duration_minutes: u64,
}

impl TryFrom<RecordWire> for Record {
    type Error = RecordValidationError;

    fn try_from(value: RecordWire) -> Result<Self, Self::Error> {
        Record::new(value.subject, value.topic, value.duration_minutes)
    }
}

/// Why a raw duration entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationInputError {
    /// Input is not a base-10 integer the minute counter can hold.
    NotInteger,
    /// Input is an integer but `<= 0`.
    NotPositive,
}

impl Display for DurationInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInteger => {
                write!(f, "Enter a whole number for the duration (e.g. 45). Try again.")
            }
            Self::NotPositive => write!(f, "Duration must be greater than 0. Try again."),
        }
    }
}

impl Error for DurationInputError {}

/// Parses one line of duration input into positive minutes.
///
/// Surrounding whitespace is ignored. A leading `+` is accepted, matching
/// ordinary integer notation.
///
/// # Errors
/// - `NotInteger` for empty, fractional or non-numeric text, and for digit
///   runs beyond `u64::MAX`.
/// - `NotPositive` for zero and negative values of any magnitude.
pub fn parse_duration_input(raw: &str) -> Result<u64, DurationInputError> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(DurationInputError::NotInteger);
    }
    if negative {
        return Err(DurationInputError::NotPositive);
    }
    match digits.parse::<u64>() {
        Ok(0) => Err(DurationInputError::NotPositive),
        Ok(minutes) => Ok(minutes),
        Err(_) => Err(DurationInputError::NotInteger),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_duration_input, DurationInputError, Record, RecordValidationError};

    #[test]
    fn new_rejects_zero_duration() {
        let err = Record::new("Math", "Integrals", 0).unwrap_err();
        assert_eq!(err, RecordValidationError::NonPositiveDuration);
    }

    #[test]
    fn subject_matches_ignores_case() {
        let record = Record::new("Math", "Integrals", 60).unwrap();
        assert!(record.subject_matches("MATH"));
        assert!(record.subject_matches("math"));
        assert!(!record.subject_matches("physics"));
    }

    #[test]
    fn parse_duration_accepts_trimmed_positive_integer() {
        assert_eq!(parse_duration_input(" 30 "), Ok(30));
        assert_eq!(parse_duration_input("+15"), Ok(15));
    }

    #[test]
    fn parse_duration_classifies_failures() {
        assert_eq!(
            parse_duration_input("abc"),
            Err(DurationInputError::NotInteger)
        );
        assert_eq!(
            parse_duration_input("4.5"),
            Err(DurationInputError::NotInteger)
        );
        assert_eq!(parse_duration_input(""), Err(DurationInputError::NotInteger));
        assert_eq!(parse_duration_input("--5"), Err(DurationInputError::NotInteger));
        assert_eq!(
            parse_duration_input("-5"),
            Err(DurationInputError::NotPositive)
        );
        assert_eq!(
            parse_duration_input("0"),
            Err(DurationInputError::NotPositive)
        );
        assert_eq!(
            parse_duration_input("-0"),
            Err(DurationInputError::NotPositive)
        );
        assert_eq!(
            parse_duration_input("-99999999999999999999999"),
            Err(DurationInputError::NotPositive)
        );
        assert_eq!(
            parse_duration_input("99999999999999999999999"),
            Err(DurationInputError::NotInteger)
        );
    }

    #[test]
    fn parse_duration_accepts_values_beyond_u32() {
        assert_eq!(parse_duration_input("5000000000"), Ok(5_000_000_000));
        assert_eq!(parse_duration_input(&u64::MAX.to_string()), Ok(u64::MAX));
    }

    #[test]
    fn retry_messages_differ_per_failure_kind() {
        let not_integer = DurationInputError::NotInteger.to_string();
        let not_positive = DurationInputError::NotPositive.to_string();
        assert_ne!(not_integer, not_positive);
        assert!(not_positive.contains("greater than 0"));
    }
}
