// crashlens-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{Config, Connection};
use std::sync::{Arc, Mutex, MutexGuard};

// Imports Hexagonaux
use crate::error::CrashlensError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::{ColumnSchema, Connector};

pub struct DuckDBConnector {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDBConnector {
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, CrashlensError> {
        self.conn.lock().map_err(|_| {
            CrashlensError::Infrastructure(InfrastructureError::Io(std::io::Error::other(
                "DuckDB Mutex Poisoned",
            )))
        })
    }

    /// Fetches the first row of a single-column query and converts column 0.
    fn scalar_of<T: duckdb::types::FromSql>(
        conn: &Connection,
        query: &str,
    ) -> Result<T, CrashlensError> {
        let mut stmt = conn.prepare(query)?;
        let mut rows = stmt.query([])?;
        let row = rows
            .next()?
            .ok_or_else(|| CrashlensError::InternalError("No scalar value returned".into()))?;
        Ok(row.get(0)?)
    }
}

/// Single-quoted literal for PRAGMA arguments and file paths.
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Double-quoted identifier for table and view names.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[async_trait]
impl Connector for DuckDBConnector {
    async fn execute(&self, query: &str) -> Result<(), CrashlensError> {
        let conn = self.conn()?;
        conn.execute(query, []).map(|_rows| ())?;
        Ok(())
    }

    async fn fetch_columns(&self, table_name: &str) -> Result<Vec<ColumnSchema>, CrashlensError> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!(
            "PRAGMA table_info({})",
            quote_literal(table_name)
        ))?;

        let rows = stmt.query_map([], |row| {
            Ok(ColumnSchema {
                name: row.get("name")?,
                data_type: row.get("type")?,
                is_nullable: !row.get::<_, bool>("notnull")?,
            })
        })?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row?);
        }

        Ok(columns)
    }

    async fn register_source(&self, name: &str, path: &str) -> Result<(), CrashlensError> {
        let query = format!(
            "CREATE OR REPLACE VIEW {} AS SELECT * FROM read_csv_auto({})",
            quote_ident(name),
            quote_literal(path)
        );
        self.execute(&query).await
    }

    async fn query_scalar(&self, query: &str) -> Result<u64, CrashlensError> {
        let conn = self.conn()?;
        Self::scalar_of::<u64>(&conn, query)
    }

    async fn query_opt_i64(&self, query: &str) -> Result<Option<i64>, CrashlensError> {
        let conn = self.conn()?;
        Self::scalar_of::<Option<i64>>(&conn, query)
    }

    async fn query_opt_f64(&self, query: &str) -> Result<Option<f64>, CrashlensError> {
        let conn = self.conn()?;
        Self::scalar_of::<Option<f64>>(&conn, query)
    }

    async fn query_opt_text(&self, query: &str) -> Result<Option<String>, CrashlensError> {
        let conn = self.conn()?;
        Self::scalar_of::<Option<String>>(&conn, query)
    }

    fn engine_name(&self) -> &str {
        "duckdb"
    }
}
