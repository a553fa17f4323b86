// crashlens-core/src/domain/audit/stats.rs

/// Table-wide aggregates with SQL aggregate-null semantics: sums and the
/// distinct count exclude NULLs, and the mean is None for an empty table.
#[derive(Debug, Clone)]
pub struct SummaryStats {
    pub total_injuries: i64,
    pub total_fatalities: i64,
    pub avg_injuries: Option<f64>,
    pub unique_boroughs: u64,
}
