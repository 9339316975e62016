use crate::error::ApiError;
use async_trait::async_trait;
use configuration::StrategyServiceConfig;
use core_types::ParameterRecord;
use events::StrategyReport;
use serde::Serialize;
use std::time::Duration;

pub mod error;

/// The abstract interface for the remote strategy service.
/// The orchestrator only knows this trait, so the HTTP implementation can be
/// swapped for an in-memory one in tests.
#[async_trait]
pub trait StrategyService: Send + Sync {
    /// Sends one batch for processing and returns the service's report.
    async fn analyze(&self, records: &[ParameterRecord]) -> Result<StrategyReport, ApiError>;
}

/// The JSON payload for the strategy endpoint.
#[derive(Debug, Serialize)]
struct AnalyzePayload<'a> {
    data: &'a [ParameterRecord],
}

/// A `reqwest` implementation of `StrategyService`.
#[derive(Debug, Clone)]
pub struct HttpStrategyClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpStrategyClient {
    /// Creates a client for the endpoint at `url`. Every request is bounded by `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &StrategyServiceConfig) -> Result<Self, ApiError> {
        Self::new(config.url.clone(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn classify(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl StrategyService for HttpStrategyClient {
    async fn analyze(&self, records: &[ParameterRecord]) -> Result<StrategyReport, ApiError> {
        let payload = AnalyzePayload { data: records };

        tracing::debug!(
            url = %self.url,
            records = records.len(),
            "Sending batch to strategy service."
        );
        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            return Err(ApiError::Transport(format!("HTTP {status}: {text}")));
        }

        serde_json::from_str::<StrategyReport>(&text)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}
