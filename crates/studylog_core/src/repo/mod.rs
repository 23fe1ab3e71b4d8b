//! Repository layer for the record collection.
//!
//! # Responsibility
//! - Define the storage contract used by the service layer.
//! - Provide the in-memory store that lives for one program run.

pub mod record_repo;
