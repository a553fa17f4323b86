// crashlens-core/src/application/report.rs

use tracing::{debug, info};

use crate::application::quote_ident;
use crate::domain::audit::checks::{GeoCompleteness, ValidationChecks};
use crate::domain::audit::completeness::{ColumnCompleteness, Thresholds, completeness_pct};
use crate::domain::audit::score::{QualityScore, derive_score};
use crate::domain::audit::stats::SummaryStats;
use crate::error::CrashlensError;
use crate::ports::connector::Connector;

/// Everything the renderer needs, computed in one read-only pass.
pub struct QualityReport {
    pub table: String,
    pub total_rows: u64,
    pub columns: Vec<ColumnCompleteness>,
    pub thresholds: Thresholds,
    pub checks: ValidationChecks,
    pub stats: SummaryStats,
    pub score: QualityScore,
}

/// Runs the full audit against the named table: schema discovery, the
/// per-column completeness scan, the fixed validation battery, summary
/// statistics and the overall score. Zero rows is a valid state; a missing
/// table fails during discovery, before any metric runs.
pub async fn build_report(
    connector: &dyn Connector,
    table: &str,
    thresholds: Thresholds,
) -> Result<QualityReport, CrashlensError> {
    let qtable = quote_ident(table);

    // 1. Schema discovery. The row total computed here is the single
    //    denominator for every percentage below.
    let schema = connector.fetch_columns(table).await?;
    let total_rows = connector
        .query_scalar(&format!("SELECT COUNT(*) FROM {qtable}"))
        .await?;
    info!(table, total_rows, columns = schema.len(), "Schema discovered");

    // 2. Column completeness scan, one COUNT per discovered column.
    let mut columns = Vec::with_capacity(schema.len());
    for col in &schema {
        let non_null = connector
            .query_scalar(&format!(
                "SELECT COUNT({}) FROM {qtable}",
                quote_ident(&col.name)
            ))
            .await?;
        debug!(column = %col.name, non_null, "Column scanned");
        columns.push(ColumnCompleteness::new(
            col.name.clone(),
            total_rows,
            non_null,
        ));
    }

    // 3. Validation battery, fixed order. Anomalous counts are reported,
    //    never fatal: all four checks run on every audit.
    let null_crash_datetime = connector
        .query_scalar(&format!(
            "SELECT COUNT(*) FROM {qtable} WHERE \"crash_datetime\" IS NULL"
        ))
        .await?;
    let date_min = connector
        .query_opt_text(&format!(
            "SELECT CAST(MIN(\"crash_datetime\") AS VARCHAR) FROM {qtable}"
        ))
        .await?;
    let date_max = connector
        .query_opt_text(&format!(
            "SELECT CAST(MAX(\"crash_datetime\") AS VARCHAR) FROM {qtable}"
        ))
        .await?;
    let negative_injuries = connector
        .query_scalar(&format!(
            "SELECT COUNT(*) FROM {qtable} WHERE \"number_of_persons_injured\" < 0"
        ))
        .await?;
    let geo_count = connector
        .query_scalar(&format!(
            "SELECT COUNT(*) FROM {qtable} \
             WHERE \"latitude\" IS NOT NULL AND \"longitude\" IS NOT NULL"
        ))
        .await?;
    let checks = ValidationChecks {
        null_crash_datetime,
        date_min,
        date_max,
        negative_injuries,
        geo: GeoCompleteness {
            count: geo_count,
            pct: completeness_pct(geo_count, total_rows),
        },
    };

    // 4. Summary statistics. DuckDB SUM over integers yields HUGEINT, hence
    //    the explicit BIGINT casts. Empty-table aggregates degrade to zero.
    let total_injuries = connector
        .query_opt_i64(&format!(
            "SELECT CAST(SUM(\"number_of_persons_injured\") AS BIGINT) FROM {qtable}"
        ))
        .await?
        .unwrap_or(0);
    let total_fatalities = connector
        .query_opt_i64(&format!(
            "SELECT CAST(SUM(\"number_of_persons_killed\") AS BIGINT) FROM {qtable}"
        ))
        .await?
        .unwrap_or(0);
    let avg_injuries = connector
        .query_opt_f64(&format!(
            "SELECT AVG(\"number_of_persons_injured\") FROM {qtable}"
        ))
        .await?;
    let unique_boroughs = connector
        .query_scalar(&format!("SELECT COUNT(DISTINCT \"borough\") FROM {qtable}"))
        .await?;
    let stats = SummaryStats {
        total_injuries,
        total_fatalities,
        avg_injuries,
        unique_boroughs,
    };

    // 5. Score reuses the completeness scan; no second pass over the table.
    let score = derive_score(&columns, &thresholds);

    Ok(QualityReport {
        table: table.to_string(),
        total_rows,
        columns,
        thresholds,
        checks,
        stats,
        score,
    })
}
