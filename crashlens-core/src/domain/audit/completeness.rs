// crashlens-core/src/domain/audit/completeness.rs

use serde::{Deserialize, Serialize};

/// Classification thresholds for column completeness, in percent.
/// A column is OK at or above `ok`, WARN at or above `warn`, FAIL below.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct Thresholds {
    pub ok: f64,
    pub warn: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ok: 95.0,
            warn: 80.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletenessStatus {
    Ok,
    Warn,
    Fail,
}

impl CompletenessStatus {
    pub fn label(self) -> &'static str {
        match self {
            CompletenessStatus::Ok => "[OK]",
            CompletenessStatus::Warn => "[WARN]",
            CompletenessStatus::Fail => "[FAIL]",
        }
    }
}

/// Per-column completeness metric. Computed fresh on every report run,
/// never persisted outside the rendered report.
#[derive(Debug, Clone)]
pub struct ColumnCompleteness {
    pub name: String,
    pub total: u64,
    pub non_null: u64,
    pub nulls: u64,
    pub pct: f64,
}

impl ColumnCompleteness {
    pub fn new(name: impl Into<String>, total: u64, non_null: u64) -> Self {
        Self {
            name: name.into(),
            total,
            non_null,
            nulls: total.saturating_sub(non_null),
            pct: completeness_pct(non_null, total),
        }
    }

    /// Classification happens on the rounded percentage, so a column at
    /// 94.995 raw (rounded to 95.0) counts as OK.
    pub fn status(&self, thresholds: &Thresholds) -> CompletenessStatus {
        if self.pct >= thresholds.ok {
            CompletenessStatus::Ok
        } else if self.pct >= thresholds.warn {
            CompletenessStatus::Warn
        } else {
            CompletenessStatus::Fail
        }
    }
}

/// Percentage of non-null values, rounded to 2 decimal places.
/// An empty table yields 0.0 rather than dividing by zero.
pub fn completeness_pct(non_null: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(100.0 * non_null as f64 / total as f64)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
