// crashlens-core/src/ports/connector.rs

// This file defines what your application needs, without knowing how it's done.
// The report generator only ever issues read-only scalar queries plus a schema
// enumeration; the load step additionally registers a raw file.

use crate::error::CrashlensError;
use async_trait::async_trait;

// Struct simple to describe a column (independent of the DB)
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
}

#[async_trait]
pub trait Connector: Send + Sync {
    async fn execute(&self, query: &str) -> Result<(), CrashlensError>;

    /// Ordered column list of a table. Fails if the table does not exist.
    async fn fetch_columns(&self, table_name: &str) -> Result<Vec<ColumnSchema>, CrashlensError>;

    /// Register a raw file under a queryable name (ex: read_csv_auto).
    async fn register_source(&self, name: &str, path: &str) -> Result<(), CrashlensError>;

    /// Single non-null unsigned scalar (COUNT-style queries).
    async fn query_scalar(&self, query: &str) -> Result<u64, CrashlensError>;

    /// Single nullable signed scalar (SUM-style aggregates over zero rows).
    async fn query_opt_i64(&self, query: &str) -> Result<Option<i64>, CrashlensError>;

    /// Single nullable float scalar (AVG-style aggregates).
    async fn query_opt_f64(&self, query: &str) -> Result<Option<f64>, CrashlensError>;

    /// Single nullable text scalar (MIN/MAX over casted timestamps).
    async fn query_opt_text(&self, query: &str) -> Result<Option<String>, CrashlensError>;

    fn engine_name(&self) -> &str;
}
