use crate::error::AnalyticsError;
use crate::report::{AnalysisResult, ValueStats};
use core_types::ParameterRecord;

/// How many records are reported in `top_parameters`.
const TOP_PARAMETER_COUNT: usize = 3;

/// A stateless calculator for descriptive statistics over a batch of parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating the statistics of a batch.
    ///
    /// # Arguments
    ///
    /// * `records` - The batch, in the order it was fetched. It is never mutated.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for an empty batch (there is nothing to describe, which is not an
    /// error), otherwise the `AnalysisResult`. An `AnalyticsError` is returned only if
    /// a statistic's true value is not representable as a finite `f64`.
    pub fn analyze(
        &self,
        records: &[ParameterRecord],
    ) -> Result<Option<AnalysisResult>, AnalyticsError> {
        if records.is_empty() {
            return Ok(None);
        }

        let values: Vec<f64> = records.iter().map(ParameterRecord::value).collect();
        let active_values: Vec<f64> = records
            .iter()
            .filter(|r| r.is_active())
            .map(ParameterRecord::value)
            .collect();

        let value_stats = ValueStats {
            average: finite("average", mean(&values))?,
            median: finite("median", median(&values))?,
            stdev: finite("stdev", sample_stdev(&values))?,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            active_avg: if active_values.is_empty() {
                0.0
            } else {
                finite("active_avg", mean(&active_values))?
            },
        };

        Ok(Some(AnalysisResult {
            parameter_count: records.len(),
            active_count: active_values.len(),
            value_stats,
            top_parameters: self.top_parameters(records),
        }))
    }

    /// Returns up to three records ordered by descending absolute value.
    /// `sort_by` is stable, so records with equal magnitude keep their batch order.
    fn top_parameters(&self, records: &[ParameterRecord]) -> Vec<ParameterRecord> {
        let mut ranked: Vec<&ParameterRecord> = records.iter().collect();
        ranked.sort_by(|a, b| b.value().abs().total_cmp(&a.value().abs()));
        ranked
            .into_iter()
            .take(TOP_PARAMETER_COUNT)
            .cloned()
            .collect()
    }
}

fn finite(metric: &str, value: f64) -> Result<f64, AnalyticsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticsError::NonFinite(metric.to_string()))
    }
}

/// Largest magnitude in the batch. Sums are taken over `v / scale` so that any
/// batch whose true mean is representable does not overflow on the way there.
fn scale(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

/// Callers guarantee `values` is non-empty.
fn mean(values: &[f64]) -> f64 {
    let scale = scale(values);
    if scale == 0.0 {
        return 0.0;
    }
    scale * scaled_mean(values, scale)
}

fn scaled_mean(values: &[f64], scale: f64) -> f64 {
    values.iter().map(|v| v / scale).sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        sorted[mid - 1] / 2.0 + sorted[mid] / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (n - 1 denominator), zero below two samples.
fn sample_stdev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let scale = scale(values);
    if scale == 0.0 {
        return 0.0;
    }
    let mean = scaled_mean(values, scale);
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let deviation = v / scale - mean;
            deviation * deviation
        })
        .sum();
    scale * (sum_sq / (values.len() - 1) as f64).sqrt()
}
