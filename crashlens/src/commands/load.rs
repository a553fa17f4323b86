// crashlens/src/commands/load.rs
//
// USE CASE: Load a raw CSV into the durable DuckDB collisions table.

use std::path::PathBuf;

use anyhow::Context;
use crashlens_core::application::load_csv;
use crashlens_core::infrastructure::adapters::duckdb::DuckDBConnector;
use crashlens_core::infrastructure::config::load_audit_config;

pub async fn execute(
    project_dir: PathBuf,
    file: PathBuf,
    table: Option<String>,
) -> anyhow::Result<()> {
    let config = load_audit_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    let table = table.unwrap_or(config.table);

    if !file.exists() {
        anyhow::bail!(
            "❌ Raw file not found at: {}\n👉 Have you run 'crashlens fetch'?",
            file.display()
        );
    }

    let db_path = project_dir.join(&config.db_path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let connector = DuckDBConnector::new(&db_path.to_string_lossy())
        .with_context(|| format!("Failed to initialize DuckDB at {}", db_path.display()))?;

    println!("📥 Loading {} into '{}'...", file.display(), table);
    let rows = load_csv(&connector, &table, &file).await?;

    println!(
        "✨ Loaded {} rows into '{}' ({})",
        rows,
        table,
        db_path.display()
    );
    Ok(())
}
