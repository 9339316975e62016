//! # Engine
//!
//! The orchestrator of the pipeline. A run has two stages:
//!
//! 1. **Fetch** a bounded batch from the `RecordStore`.
//! 2. **Send** that batch to the `StrategyService`.
//!
//! A failed fetch short-circuits the run: the service is never called. Every
//! stage turns its `Result` into a tagged outcome, so a run always yields a
//! `CombinedReport` and no error escapes to the caller.

use api_client::StrategyService;
use core_types::ParameterRecord;
use database::RecordStore;
use std::sync::Arc;

pub mod report;

pub use report::{AnalysisOutcome, CombinedReport, DatabaseResult, StrategyResult};

/// The central orchestrator that connects the record store to the strategy service.
#[derive(Clone)]
pub struct StrategyAgent {
    store: Arc<dyn RecordStore>,
    service: Arc<dyn StrategyService>,
}

impl StrategyAgent {
    /// Creates a new `StrategyAgent` from its two collaborators.
    pub fn new(store: Arc<dyn RecordStore>, service: Arc<dyn StrategyService>) -> Self {
        Self { store, service }
    }

    /// Stage 1: reads up to `limit` records from the store.
    pub async fn fetch_strategy_data(&self, limit: u32) -> DatabaseResult {
        match self.store.fetch_strategy_data(limit).await {
            Ok(data) => {
                let message = format!("Retrieved {} records", data.len());
                tracing::info!(records = data.len(), limit, "Fetched strategy data.");
                DatabaseResult::Success { data, message }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch strategy data.");
                DatabaseResult::Error {
                    error_message: format!("Database error: {e}"),
                }
            }
        }
    }

    /// Stage 2: sends a batch to the strategy service.
    pub async fn send_to_strategy_service(&self, data: &[ParameterRecord]) -> StrategyResult {
        match self.service.analyze(data).await {
            Ok(response) => {
                tracing::info!(summary = %response.summary, "Strategy service responded.");
                StrategyResult::Success { response }
            }
            Err(e) => {
                tracing::error!(error = %e, "Strategy service call failed.");
                StrategyResult::Error {
                    error_message: e.to_string(),
                }
            }
        }
    }

    /// Runs the full workflow: fetch, then send.
    ///
    /// The service outcome, success or error, is reported as-is; nothing is retried.
    pub async fn execute_analysis(&self, limit: u32) -> CombinedReport {
        let database_result = self.fetch_strategy_data(limit).await;

        let strategy_result = match &database_result {
            DatabaseResult::Success { data, .. } => {
                Some(self.send_to_strategy_service(data).await)
            }
            DatabaseResult::Error { .. } => {
                tracing::warn!("Skipping strategy service call because the fetch failed.");
                None
            }
        };

        CombinedReport {
            database_result,
            strategy_result,
        }
    }
}
