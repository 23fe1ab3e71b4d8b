//! Presentation lookups: subject decorations and named text styles.
//!
//! # Responsibility
//! - Map subject labels to decorative symbols.
//! - Map style names to ANSI text transforms.
//!
//! # Invariants
//! - Every lookup is total: unknown input yields a default, never an error.
//! - Styling changes only how text is shown, never the text itself.

pub mod decoration;
pub mod palette;
