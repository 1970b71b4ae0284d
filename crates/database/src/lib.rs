//! # Countries Directory Database Crate
//!
//! This crate is the storage adapter of the directory. It hides every SQL
//! statement behind the `CountryRepository` trait so the scenario layer never
//! sees a query or a connection.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** `DbRepository` maps the five repository operations 1:1 onto
//!   statements against the `countries` table (`sql/schema.sql`).
//! - **Pooled & Scoped:** every statement acquires a connection from a `PgPool`
//!   and returns it when the guard drops, including on error.
//! - **Authoritative Keys:** the table's primary key is the final word on
//!   uniqueness; a violation surfaces as `DbError::DuplicateKey`.
//!
//! ## Public API
//!
//! - `connect` / `probe`: build the pool from settings and check it once.
//! - `CountryRepository`: the persistence contract.
//! - `DbRepository`: the PostgreSQL implementation.
//! - `InMemoryRepository`: a process-local implementation for tests and demos.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, probe};
pub use error::DbError;
pub use memory::InMemoryRepository;
pub use repository::{CountryRepository, DbRepository};
