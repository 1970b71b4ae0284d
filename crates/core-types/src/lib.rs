//! # Countries Directory Core Types
//!
//! The plain data structures shared by every other crate in the workspace:
//! the `Country` record, its abbreviated `CountryPreview`, and the alpha-2
//! code check that guards every lookup and write.
//!
//! This crate sits at the bottom of the dependency graph and knows nothing
//! about storage or HTTP.

pub mod country;
pub mod validation;

// Re-export the core types to provide a clean public API.
pub use country::{Country, CountryPreview};
pub use validation::validate_code;
