use analytics::AnalysisResult;
use core_types::ParameterRecord;
use serde::{Deserialize, Serialize};

/// The body POSTed to the strategy service: `{ "data": [ ... ] }`.
///
/// `data` is optional so that a payload without it deserializes cleanly and can be
/// answered with a validation error instead of a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyRequest {
    #[serde(default)]
    pub data: Option<Vec<ParameterRecord>>,
}

impl StrategyRequest {
    pub fn new(data: Vec<ParameterRecord>) -> Self {
        Self { data: Some(data) }
    }
}

/// The `status` discriminator carried by every report the service produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
    Error,
}

/// The successful response of the strategy service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyReport {
    pub status: ReportStatus,
    /// The rendered parameter table.
    pub display_output: String,
    pub analysis: AnalysisResult,
    /// One line, e.g. `Analyzed 5 parameters (4 active)`.
    pub summary: String,
}

impl StrategyReport {
    pub fn new(display_output: String, analysis: AnalysisResult) -> Self {
        let summary = format!(
            "Analyzed {} parameters ({} active)",
            analysis.parameter_count, analysis.active_count
        );
        Self {
            status: ReportStatus::Success,
            display_output,
            analysis,
            summary,
        }
    }
}

/// Returned with a 500 when aggregation or rendering fails unexpectedly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    pub status: ReportStatus,
    pub error_message: String,
}

impl FailureReport {
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            status: ReportStatus::Error,
            error_message: error_message.into(),
        }
    }
}

/// Returned with a 400 for requests that fail validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::ValueStats;

    #[test]
    fn request_without_data_deserializes_to_none() {
        let request: StrategyRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.data, None);

        let request: StrategyRequest = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert_eq!(request.data, None);
    }

    #[test]
    fn report_summary_counts_active_parameters() {
        let analysis = AnalysisResult {
            parameter_count: 5,
            active_count: 4,
            value_stats: ValueStats {
                average: 1.0,
                median: 1.0,
                stdev: 0.0,
                min: 1.0,
                max: 1.0,
                active_avg: 1.0,
            },
            top_parameters: Vec::new(),
        };
        let report = StrategyReport::new("table".to_string(), analysis);
        assert_eq!(report.summary, "Analyzed 5 parameters (4 active)");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["display_output"], "table");
        assert_eq!(json["analysis"]["parameter_count"], 5);
    }

    #[test]
    fn failure_report_is_tagged_as_error() {
        let json = serde_json::to_value(FailureReport::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "error", "error_message": "boom"}));
    }
}
