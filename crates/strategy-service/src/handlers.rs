use crate::error::ServiceError;
use analytics::{AnalysisResult, AnalyticsEngine, render_parameter_table};
use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use core_types::ParameterRecord;
use events::{StrategyReport, StrategyRequest};

/// # POST /strategy
/// Renders and analyzes one batch of parameter records.
///
/// The computation runs on the blocking pool; a panic there is reported as an
/// internal error instead of tearing down the connection.
pub async fn strategy_analysis(
    payload: Result<Json<StrategyRequest>, JsonRejection>,
) -> Result<Json<StrategyReport>, ServiceError> {
    let Json(request) = payload.map_err(reject_payload)?;

    let records = match request.data {
        Some(records) if !records.is_empty() => records,
        _ => return Err(ServiceError::NoData),
    };

    let report = tokio::task::spawn_blocking(move || build_report(&records))
        .await
        .map_err(|e| ServiceError::Internal(e.to_string()))??;

    Ok(Json(report))
}

/// Keeps the extractor's 413 for oversized bodies; every other rejection is a 400.
fn reject_payload(rejection: JsonRejection) -> ServiceError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServiceError::PayloadTooLarge(rejection.body_text())
    } else {
        ServiceError::InvalidPayload(rejection.body_text())
    }
}

/// # GET /health
pub async fn health() -> &'static str {
    "OK"
}

/// Produces the success report for a non-empty batch and logs it.
pub fn build_report(records: &[ParameterRecord]) -> Result<StrategyReport, ServiceError> {
    let display_output = render_parameter_table(records);
    let analysis = AnalyticsEngine::new()
        .analyze(records)?
        .ok_or(ServiceError::NoData)?;

    log_report(&display_output, &analysis);
    Ok(StrategyReport::new(display_output, analysis))
}

fn log_report(display_output: &str, analysis: &AnalysisResult) {
    let stats = &analysis.value_stats;
    let top_parameters: Vec<String> = analysis
        .top_parameters
        .iter()
        .map(|p| format!("{}: {:.4}", p.parameter_name(), p.value()))
        .collect();

    tracing::info!("Strategy parameters:\n{display_output}");
    tracing::info!(
        parameter_count = analysis.parameter_count,
        active_count = analysis.active_count,
        average = stats.average,
        min = stats.min,
        max = stats.max,
        top_parameters = ?top_parameters,
        "Analysis complete."
    );
}

#[cfg(test)]
mod tests {
    use crate::router;
    use axum::body::{self, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use configuration::ServerConfig;
    use serde_json::{json, Value};
    use tower::ServiceExt; // for `oneshot`

    fn app() -> Router {
        router(&ServerConfig::default())
    }

    fn sample_payload() -> Value {
        let record = |id: i64, parameter: &str, value: f64, description: &str, is_active: bool| {
            json!({
                "id": id,
                "parameter": parameter,
                "value": value,
                "timestamp": "2025-05-25T12:50:35Z",
                "description": description,
                "is_active": is_active
            })
        };
        json!({
            "data": [
                record(1, "alpha", 0.7505, "Primary scaling factor", true),
                record(2, "beta", 1.3695, "Volatility coefficient", true),
                record(3, "gamma", 0.9395, "Momentum adjustment", true),
                record(4, "delta", 0.3256, "Risk sensitivity parameter", false),
                record(5, "epsilon", 1.8765, "Liquidity factor", true)
            ]
        })
    }

    async fn post_strategy(app: Router, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/strategy")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn sample_batch_is_analyzed() {
        let (status, body) = post_strategy(app(), sample_payload().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["summary"], "Analyzed 5 parameters (4 active)");

        let analysis = &body["analysis"];
        assert_eq!(analysis["parameter_count"], 5);
        assert_eq!(analysis["active_count"], 4);
        assert_eq!(analysis["value_stats"]["min"], 0.3256);
        assert_eq!(analysis["value_stats"]["max"], 1.8765);

        let top: Vec<f64> = analysis["top_parameters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["value"].as_f64().unwrap())
            .collect();
        assert_eq!(top, vec![1.8765, 1.3695, 0.9395]);
        assert_eq!(analysis["top_parameters"][0]["parameter"], "epsilon");

        let table = body["display_output"].as_str().unwrap();
        assert!(table.contains("2025-05-25 12:50:35"));
        assert!(table.contains("Risk sensitivity paramete..."));
    }

    #[tokio::test]
    async fn empty_batch_is_rejected() {
        let (status, body) = post_strategy(app(), json!({"data": []}).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No data provided"}));
    }

    #[tokio::test]
    async fn missing_batch_is_rejected() {
        let (status, body) = post_strategy(app(), "{}".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No data provided"}));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let (status, body) = post_strategy(app(), "{not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request payload"));
    }

    #[tokio::test]
    async fn oversized_body_is_rejected_with_413() {
        let config = ServerConfig {
            body_limit_bytes: 64,
            ..ServerConfig::default()
        };
        let (status, body) = post_strategy(router(&config), sample_payload().to_string()).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body["error"].as_str().unwrap().starts_with("Payload too large"));
    }

    #[tokio::test]
    async fn calculation_failure_is_reported_as_internal_error() {
        let payload = json!({"data": [{"value": f64::MAX}, {"value": -f64::MAX}]});
        let (status, body) = post_strategy(app(), payload.to_string()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert!(body["error_message"].as_str().unwrap().contains("stdev"));
    }

    #[tokio::test]
    async fn concurrent_requests_are_independent() {
        let app = app();
        let mut handles = Vec::new();
        for n in 1..=4usize {
            let app = app.clone();
            let data: Vec<Value> = (0..n).map(|i| json!({"id": i, "value": i as f64})).collect();
            let payload = json!({ "data": data }).to_string();
            handles.push(tokio::spawn(async move { (n, post_strategy(app, payload).await) }));
        }
        for handle in handles {
            let (n, (status, body)) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["analysis"]["parameter_count"], n);
        }
    }

    #[tokio::test]
    async fn health_check_responds() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
