use serde::{Deserialize, Serialize};

/// A single strategy parameter observation.
///
/// Every field is optional: rows coming from the store only carry
/// `id, parameter, value, timestamp`, and callers of the service may omit
/// anything. Absent fields are never serialized back out, so a record echoed
/// in a report has exactly the shape it arrived with.
///
/// Consumers must go through the accessor methods, which apply the defaults
/// (`0`, empty string, `false`) in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Expected to be ISO-8601, but may be empty or malformed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ParameterRecord {
    /// The numeric value, `0.0` when absent.
    pub fn value(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// The parameter name, empty when absent.
    pub fn parameter_name(&self) -> &str {
        self.parameter.as_deref().unwrap_or_default()
    }

    pub fn timestamp_str(&self) -> &str {
        self.timestamp.as_deref().unwrap_or_default()
    }

    pub fn description_str(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Whether the record is active, `false` when absent.
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let record: ParameterRecord = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.value(), 0.0);
        assert_eq!(record.parameter_name(), "");
        assert_eq!(record.timestamp_str(), "");
        assert_eq!(record.description_str(), "");
        assert!(!record.is_active());
    }

    #[test]
    fn null_fields_are_treated_as_absent() {
        let record: ParameterRecord =
            serde_json::from_str(r#"{"parameter": "alpha", "value": null, "is_active": null}"#)
                .unwrap();
        assert_eq!(record.parameter_name(), "alpha");
        assert_eq!(record.value, None);
        assert!(!record.is_active());
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let record = ParameterRecord {
            id: Some(1),
            parameter: Some("alpha".to_string()),
            value: Some(0.75),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "parameter": "alpha", "value": 0.75}));
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let result = serde_json::from_str::<ParameterRecord>(r#"{"value": "high"}"#);
        assert!(result.is_err());
    }
}
