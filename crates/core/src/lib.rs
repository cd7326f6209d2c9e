//! Core business logic for MBudget.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, reconciliation rules, and validation live here.
//!
//! # Modules
//!
//! - `allocation` - Budget hierarchy, reconciliation of percent/amount edits, commit validation
//! - `session` - One editing session over a project, and the collaborators it talks to

pub mod allocation;
pub mod session;
