// crashlens-core/src/domain/audit/score.rs

use crate::domain::audit::completeness::{ColumnCompleteness, Thresholds};

/// Single scalar summarising table-wide data health: the share of columns
/// whose completeness meets the OK threshold, rounded to 1 decimal place.
#[derive(Debug, Clone, Copy)]
pub struct QualityScore {
    pub score: f64,
    pub high_quality_columns: usize,
    pub total_columns: usize,
}

/// Derives the score from the completeness scan results. Reusing the scan
/// keeps this numerically identical to recomputing per column, since both
/// sides compare the same rounded percentage.
pub fn derive_score(columns: &[ColumnCompleteness], thresholds: &Thresholds) -> QualityScore {
    let total_columns = columns.len();
    let high_quality_columns = columns.iter().filter(|c| c.pct >= thresholds.ok).count();
    let score = if total_columns == 0 {
        0.0
    } else {
        round1(100.0 * high_quality_columns as f64 / total_columns as f64)
    };
    QualityScore {
        score,
        high_quality_columns,
        total_columns,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
