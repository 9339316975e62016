//! End-to-end runs of the orchestrator against a real strategy service bound to an
//! ephemeral port. Only the record store is replaced by an in-memory fake.

use api_client::HttpStrategyClient;
use async_trait::async_trait;
use configuration::ServerConfig;
use core_types::ParameterRecord;
use database::{DbError, RecordStore};
use engine::{AnalysisOutcome, StrategyAgent, StrategyResult};
use std::sync::Arc;
use std::time::Duration;

struct MemoryStore(Vec<ParameterRecord>);

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_strategy_data(&self, limit: u32) -> Result<Vec<ParameterRecord>, DbError> {
        Ok(self.0.iter().take(limit as usize).cloned().collect())
    }
}

async fn start_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = strategy_service::router(&ServerConfig::default());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/strategy")
}

fn record(
    id: i64,
    parameter: &str,
    value: f64,
    description: &str,
    is_active: bool,
) -> ParameterRecord {
    ParameterRecord {
        id: Some(id),
        parameter: Some(parameter.to_string()),
        value: Some(value),
        timestamp: Some("2025-05-25T12:50:35Z".to_string()),
        description: Some(description.to_string()),
        is_active: Some(is_active),
    }
}

fn sample_records() -> Vec<ParameterRecord> {
    vec![
        record(1, "alpha", 0.7505, "Primary scaling factor", true),
        record(2, "beta", 1.3695, "Volatility coefficient", true),
        record(3, "gamma", 0.9395, "Momentum adjustment", true),
        record(4, "delta", 0.3256, "Risk sensitivity parameter", false),
        record(5, "epsilon", 1.8765, "Liquidity factor", true),
    ]
}

#[tokio::test]
async fn sample_batch_round_trips_through_the_service() {
    let url = start_service().await;
    let client = HttpStrategyClient::new(url, Duration::from_secs(30)).unwrap();
    let agent = StrategyAgent::new(Arc::new(MemoryStore(sample_records())), Arc::new(client));

    let report = agent.execute_analysis(100).await;
    assert_eq!(report.outcome(), AnalysisOutcome::Completed);

    let Some(StrategyResult::Success { response }) = report.strategy_result() else {
        panic!("expected a successful strategy result, got {:?}", report.strategy_result());
    };
    assert_eq!(response.summary, "Analyzed 5 parameters (4 active)");
    assert_eq!(response.analysis.parameter_count, 5);
    assert_eq!(response.analysis.active_count, 4);
    assert_eq!(response.analysis.value_stats.min, 0.3256);
    assert_eq!(response.analysis.value_stats.max, 1.8765);

    let top: Vec<&str> = response
        .analysis
        .top_parameters
        .iter()
        .map(|p| p.parameter_name())
        .collect();
    assert_eq!(top, vec!["epsilon", "beta", "gamma"]);
    assert_eq!(response.analysis.top_parameters[0], sample_records()[4]);
}

#[tokio::test]
async fn empty_store_is_rejected_by_the_service() {
    let url = start_service().await;
    let client = HttpStrategyClient::new(url, Duration::from_secs(30)).unwrap();
    let agent = StrategyAgent::new(Arc::new(MemoryStore(Vec::new())), Arc::new(client));

    let report = agent.execute_analysis(100).await;
    assert_eq!(report.outcome(), AnalysisOutcome::SendFailed);

    let Some(StrategyResult::Error { error_message }) = report.strategy_result() else {
        panic!("expected a strategy error, got {:?}", report.strategy_result());
    };
    assert!(error_message.contains("400"));
    assert!(error_message.contains("No data provided"));
}
