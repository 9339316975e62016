//! # Events
//!
//! This crate defines the JSON messages exchanged between the remote processing
//! client and the strategy service.
//!
//! Both sides depend on it, so it is the single definition of the wire format.

// Declare the modules that make up this crate.
pub mod messages;

// Re-export the core types to provide a clean public API.
pub use messages::{ErrorBody, FailureReport, ReportStatus, StrategyReport, StrategyRequest};
