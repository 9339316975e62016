use core_types::ParameterRecord;
use serde::{Deserialize, Serialize};

/// Descriptive statistics over the `value` field of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueStats {
    pub average: f64,
    pub median: f64,
    /// Sample standard deviation; zero for batches with fewer than two records.
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
    /// Mean over active records only; zero when no record is active.
    pub active_avg: f64,
}

/// The statistics computed for one batch of parameter records.
///
/// This struct is the output of the `AnalyticsEngine` and is carried verbatim
/// inside the service response. It is recomputed for every request and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub parameter_count: usize,
    pub active_count: usize,
    pub value_stats: ValueStats,
    /// Up to three full records, largest absolute value first.
    pub top_parameters: Vec<ParameterRecord>,
}
