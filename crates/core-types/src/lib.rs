//! # Core Types
//!
//! The foundational data structures shared by every layer of the pipeline.
//! This crate has no knowledge of the database, the network, or the
//! statistics computed over its types.

pub mod record;

// Re-export the core types to provide a clean public API.
pub use record::ParameterRecord;
