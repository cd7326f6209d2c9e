//! Shared types, errors, and configuration for MBudget.
//!
//! This crate provides common types used across all other crates:
//! - Money helpers with fixed two-decimal rounding
//! - Lenient coercion of raw form input into decimals
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
