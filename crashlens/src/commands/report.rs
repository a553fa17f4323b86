// crashlens/src/commands/report.rs
//
// USE CASE: Generate the data quality report (console + file).

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use crashlens_core::application::{build_report, render_report};
use crashlens_core::infrastructure::adapters::duckdb::DuckDBConnector;
use crashlens_core::infrastructure::config::load_audit_config;
use crashlens_core::infrastructure::fs::atomic_write;

pub async fn execute(
    project_dir: PathBuf,
    table: Option<String>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_audit_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    let table = table.unwrap_or_else(|| config.table.clone());

    let db_path = project_dir.join(&config.db_path);
    if !db_path.exists() {
        anyhow::bail!(
            "❌ Database not found at: {}\n👉 Have you run 'crashlens load'?",
            db_path.display()
        );
    }

    let connector = DuckDBConnector::new(&db_path.to_string_lossy())
        .with_context(|| format!("Failed to initialize DuckDB at {}", db_path.display()))?;
    info!(table = %table, db = %db_path.display(), "Starting audit run");

    // Build then render: the document is complete in memory before any
    // output sink is touched.
    let report = build_report(&connector, &table, config.thresholds).await?;
    let rendered = render_report(&report);

    println!("{rendered}");

    let report_path = output.unwrap_or_else(|| project_dir.join(&config.report_path));
    atomic_write(&report_path, &rendered)?;
    println!("\n[OK] Report saved to: {}", report_path.display());
    Ok(())
}
