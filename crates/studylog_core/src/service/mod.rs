//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into use-case APIs.
//! - Keep the interactive loop decoupled from storage details.

pub mod study_log_service;
