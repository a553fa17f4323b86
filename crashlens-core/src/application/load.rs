// crashlens-core/src/application/load.rs

use std::path::Path;

use tracing::info;

use crate::application::quote_ident;
use crate::error::CrashlensError;
use crate::ports::connector::Connector;

/// Materialises a raw CSV file as the durable collisions table. The staging
/// view stays behind so the raw file remains queryable under `{table}_src`.
/// Returns the number of rows loaded.
pub async fn load_csv(
    connector: &dyn Connector,
    table: &str,
    csv_path: &Path,
) -> Result<u64, CrashlensError> {
    let staging = format!("{table}_src");
    connector
        .register_source(&staging, &csv_path.to_string_lossy())
        .await?;

    connector
        .execute(&format!(
            "CREATE OR REPLACE TABLE {} AS SELECT * FROM {}",
            quote_ident(table),
            quote_ident(&staging)
        ))
        .await?;

    let rows = connector
        .query_scalar(&format!("SELECT COUNT(*) FROM {}", quote_ident(table)))
        .await?;
    info!(table, rows, engine = connector.engine_name(), "Table loaded");
    Ok(rows)
}
