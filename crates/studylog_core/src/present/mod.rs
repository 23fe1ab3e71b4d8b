//! Terminal presentation of study records.
//!
//! # Responsibility
//! - Fit text into fixed-width cells.
//! - Render listing, filter, total and menu views as plain strings.

pub mod cell;
pub mod table;
