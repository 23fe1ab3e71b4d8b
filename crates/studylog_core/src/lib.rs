//! Core domain logic for the study log.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod present;
pub mod repo;
pub mod service;
pub mod style;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{
    parse_duration_input, DurationInputError, Record, RecordValidationError,
};
pub use present::table::{Presenter, EMPTY_LIST_MESSAGE, MENU_ITEMS};
pub use repo::record_repo::{InMemoryRecordRepository, RecordRepository};
pub use service::study_log_service::{FilterSummary, InMemoryStudyLog, StudyLogService};
pub use style::decoration::{decoration_for, SubjectDecoration};
pub use style::palette::{apply_style, ColorMode, Palette, Style};

