use crate::DbError;
use async_trait::async_trait;
use core_types::ParameterRecord;
use sqlx::postgres::PgPool;
use sqlx::FromRow;

/// The bounded read of strategy parameters.
///
/// `description` and `is_active` are not part of the stored projection; records
/// returned by a store may leave them unset.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches at most `limit` records.
    async fn fetch_strategy_data(&self, limit: u32) -> Result<Vec<ParameterRecord>, DbError>;
}

/// Columns are cast so that the mapping does not depend on the exact column types
/// (`SERIAL` vs `BIGINT`, `NUMERIC` vs `DOUBLE PRECISION`, text vs `TIMESTAMPTZ`).
const FETCH_STRATEGY_DATA: &str = r#"
    SELECT
        id::bigint AS id,
        parameter::text AS parameter,
        value::double precision AS value,
        "timestamp"::text AS timestamp
    FROM strategy_data
    LIMIT $1
"#;

/// This struct represents a row fetched from the strategy_data table.
#[derive(FromRow, Debug, Clone)]
struct StrategyDataRow {
    id: Option<i64>,
    parameter: Option<String>,
    value: Option<f64>,
    timestamp: Option<String>,
}

impl From<StrategyDataRow> for ParameterRecord {
    fn from(row: StrategyDataRow) -> Self {
        ParameterRecord {
            id: row.id,
            parameter: row.parameter,
            value: row.value,
            timestamp: row.timestamp,
            description: None,
            is_active: None,
        }
    }
}

/// The `DbRepository` provides the PostgreSQL-backed `RecordStore`.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for DbRepository {
    async fn fetch_strategy_data(&self, limit: u32) -> Result<Vec<ParameterRecord>, DbError> {
        let rows = sqlx::query_as::<_, StrategyDataRow>(FETCH_STRATEGY_DATA)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), limit, "Fetched strategy data.");
        Ok(rows.into_iter().map(ParameterRecord::from).collect())
    }
}
