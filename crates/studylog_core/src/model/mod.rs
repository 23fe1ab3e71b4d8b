//! Domain model for logged study sessions.
//!
//! # Invariants
//! - Records have no identity beyond their position in the store.
//! - No record with a non-positive duration can be constructed.

pub mod record;
