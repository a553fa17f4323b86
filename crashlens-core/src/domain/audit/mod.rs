// crashlens-core/src/domain/audit/mod.rs

pub mod checks;
pub mod completeness;
pub mod score;
pub mod stats;

pub use checks::{GeoCompleteness, ValidationChecks};
pub use completeness::{ColumnCompleteness, CompletenessStatus, Thresholds, completeness_pct};
pub use score::{QualityScore, derive_score};
pub use stats::SummaryStats;
