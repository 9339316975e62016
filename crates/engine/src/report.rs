use core_types::ParameterRecord;
use events::StrategyReport;
use serde::Serialize;

/// The outcome of reading the record store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DatabaseResult {
    Success {
        data: Vec<ParameterRecord>,
        /// e.g. `Retrieved 5 records`.
        message: String,
    },
    Error {
        error_message: String,
    },
}

/// The outcome of one round-trip to the strategy service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StrategyResult {
    Success { response: StrategyReport },
    Error { error_message: String },
}

/// Where an orchestration run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    FetchFailed,
    Completed,
    SendFailed,
}

/// The result of one orchestration run.
///
/// `strategy_result` is `None` (and absent from the JSON) exactly when the fetch
/// failed and the service was never called. Only `StrategyAgent::execute_analysis`
/// builds one, so the fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedReport {
    pub(crate) database_result: DatabaseResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) strategy_result: Option<StrategyResult>,
}

impl CombinedReport {
    pub fn database_result(&self) -> &DatabaseResult {
        &self.database_result
    }

    pub fn strategy_result(&self) -> Option<&StrategyResult> {
        self.strategy_result.as_ref()
    }

    /// The fetch decides first; a successful fetch is never reported as `FetchFailed`.
    pub fn outcome(&self) -> AnalysisOutcome {
        match (&self.database_result, &self.strategy_result) {
            (DatabaseResult::Error { .. }, _) => AnalysisOutcome::FetchFailed,
            (DatabaseResult::Success { .. }, Some(StrategyResult::Success { .. })) => {
                AnalysisOutcome::Completed
            }
            (DatabaseResult::Success { .. }, _) => AnalysisOutcome::SendFailed,
        }
    }

    /// The rendered table, when the service produced one.
    pub fn display_output(&self) -> Option<&str> {
        match &self.strategy_result {
            Some(StrategyResult::Success { response }) => Some(&response.display_output),
            _ => None,
        }
    }
}
