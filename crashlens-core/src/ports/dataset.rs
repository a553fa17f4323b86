// crashlens-core/src/ports/dataset.rs

use crate::error::CrashlensError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// One flat record as returned by the open-data API.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Row cap forwarded as `$limit`. Must be positive when present.
    pub limit: Option<u64>,
    /// Filter predicate forwarded untouched as `$where`.
    pub where_clause: Option<String>,
}

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// One bounded GET against the dataset endpoint. No retries: timeout,
    /// HTTP-status, transport and payload errors all propagate to the caller.
    async fn fetch(&self, options: &FetchOptions) -> Result<Vec<Record>, CrashlensError>;
}
