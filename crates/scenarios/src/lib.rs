//! # Countries Directory Scenarios
//!
//! The business rules of the directory. Every operation validates its input
//! before it touches storage:
//!
//! - codes must be exactly two uppercase ASCII letters (`InvalidCode`);
//! - lookups, edits and deletes need an existing row (`NotFound`);
//! - stores and renames need a free code (`DuplicateCode`).
//!
//! Uniqueness is pre-checked with a read; the storage key constraint catches
//! the writes that race past it.

pub mod error;
pub mod scenarios;

pub use error::ScenarioError;
pub use scenarios::CountryScenarios;
