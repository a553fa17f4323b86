// crashlens-core/src/infrastructure/config/audit.rs

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::audit::Thresholds;
use crate::infrastructure::error::InfrastructureError;

/// Explicit configuration for the whole pipeline. Every field has a default,
/// so the YAML file is optional and may override any subset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Socrata dataset identifier.
    pub dataset_id: String,
    /// Base URL of the open-data resource endpoint.
    pub base_url: String,
    /// Directory for raw fetched CSV files, relative to the project dir.
    pub raw_dir: PathBuf,
    /// DuckDB database file holding the durable table.
    pub db_path: PathBuf,
    /// Name of the collisions table the report audits.
    pub table: String,
    /// Where the rendered quality report is written.
    pub report_path: PathBuf,
    pub thresholds: Thresholds,
    /// Row cap used by `fetch` when no --limit is given.
    pub default_limit: u64,
    pub request_timeout_secs: u64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            dataset_id: "h9gi-nx95".into(),
            base_url: "https://data.cityofnewyork.us/resource".into(),
            raw_dir: PathBuf::from("data/raw"),
            db_path: PathBuf::from("data/clean/data.db"),
            table: "collisions_clean".into(),
            report_path: PathBuf::from("data/clean/data_quality_report.txt"),
            thresholds: Thresholds::default(),
            default_limit: 1000,
            request_timeout_secs: 60,
        }
    }
}

// --- LOADER ---

pub fn load_audit_config(project_dir: &Path) -> Result<AuditConfig, InfrastructureError> {
    let candidates = ["crashlens.yaml", "crashlens.yml"];
    let config_path = candidates
        .iter()
        .map(|filename| project_dir.join(filename))
        .find(|p| p.exists());

    let mut config = match config_path {
        Some(path) => {
            info!(path = ?path, "Loading project configuration");
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        }
        None => {
            info!("No crashlens.yaml found, using built-in defaults");
            AuditConfig::default()
        }
    };

    // Override via Environment Variables (Pattern 'Layering')
    // Allows: CRASHLENS_DB_PATH=/tmp/data.db crashlens report
    apply_env_overrides(&mut config);

    Ok(config)
}

fn apply_env_overrides(config: &mut AuditConfig) {
    if let Ok(val) = std::env::var("CRASHLENS_DB_PATH") {
        info!(old = ?config.db_path, new = ?val, "Overriding DB path via ENV");
        config.db_path = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("CRASHLENS_REPORT_PATH") {
        info!(old = ?config.report_path, new = ?val, "Overriding report path via ENV");
        config.report_path = PathBuf::from(val);
    }
}
