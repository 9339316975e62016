//! # Analytics
//!
//! Descriptive statistics and presentation for batches of strategy parameters.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** This crate has no knowledge of external systems. It depends
//!   only on `core-types`.
//! - **Stateless Calculation:** The `AnalyticsEngine` takes a batch of records and
//!   produces an `AnalysisResult`; the `display` module turns the same batch into a
//!   table. Neither keeps state between calls, so both are safe to share.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: computes the `AnalysisResult` for a batch.
//! - `render_parameter_table`: renders the batch as a grid table.
//! - `AnalysisResult` / `ValueStats`: the serializable statistics.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod display;
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use display::{format_timestamp, render_parameter_table, truncate_description};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{AnalysisResult, ValueStats};
