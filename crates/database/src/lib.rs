//! # Database Crate
//!
//! This crate is the record store of the pipeline: a thin, application-specific
//! interface over the PostgreSQL `strategy_data` table.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. The rest of the workspace sees only the
//!   `RecordStore` trait and `ParameterRecord` values.
//! - **Asynchronous & Pooled:** All operations are asynchronous and share a
//!   connection pool (`PgPool`).
//!
//! ## Public API
//!
//! - `connect`: builds the connection pool from `DATABASE_URL`.
//! - `run_migrations`: applies the bundled schema.
//! - `RecordStore`: the bounded read the orchestrator depends on.
//! - `DbRepository`: the PostgreSQL implementation of `RecordStore`.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::{DbRepository, RecordStore};
