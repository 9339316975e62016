use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Calculation error: metric '{0}' is not a finite number")]
    NonFinite(String),
}
