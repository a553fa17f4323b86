// crashlens/src/commands/inspect.rs
//
// USE CASE: Inspect the stored table (schema + sample rows).

use std::path::PathBuf;

use anyhow::Context;
use crashlens_core::infrastructure::config::load_audit_config;
use duckdb::{Connection, Row};

pub fn execute(project_dir: PathBuf, table: Option<String>, limit: usize) -> anyhow::Result<()> {
    let config = load_audit_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    let table = table.unwrap_or(config.table);

    let db_path = project_dir.join(&config.db_path);
    if !db_path.exists() {
        anyhow::bail!(
            "❌ Database not found at: {}\n👉 Have you run 'crashlens load'?",
            db_path.display()
        );
    }

    let conn = Connection::open(&db_path)?;

    println!("\n🔍 Inspecting Table: '{}'", table);

    // Fetch column names
    let mut stmt_cols = conn.prepare(&format!(
        "PRAGMA table_info('{}')",
        table.replace('\'', "''")
    ))?;

    let column_names: Vec<String> = stmt_cols
        .query_map([], |row: &Row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;

    println!("   Columns: [{}]", column_names.join(", "));
    println!("   --- Rows (Limit {}) ---", limit);

    // Fetch sample rows
    let mut stmt = conn.prepare(&format!(
        "SELECT * FROM \"{}\" LIMIT {}",
        table.replace('"', "\"\""),
        limit
    ))?;
    let mut rows = stmt.query([])?;

    while let Some(row) = rows.next()? {
        let values: Vec<String> = (0..column_names.len())
            .map(|i| match row.get_ref(i) {
                Ok(val) => format!("{:?}", val),
                Err(_) => "ERROR".to_string(),
            })
            .collect();

        println!("   ➜ {}", values.join(" | "));
    }

    Ok(())
}
