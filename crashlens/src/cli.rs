// crashlens/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crashlens")]
#[command(about = "Extract-and-audit pipeline for the NYC collisions open dataset", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project directory (where crashlens.yaml and the data dirs live)
    #[arg(long, default_value = ".", global = true)]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📡 Fetches a slice of the collisions dataset and saves it as raw CSV
    Fetch {
        /// Row cap passed to the API (default from config)
        #[arg(long, short)]
        limit: Option<u64>,

        /// Filter predicate forwarded untouched to the API ($where)
        #[arg(long = "where")]
        where_clause: Option<String>,

        /// Output file name (default: timestamped name under the raw dir)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// 📥 Loads a raw CSV into the durable DuckDB collisions table
    Load {
        /// Path to the raw CSV produced by 'fetch'
        #[arg(long, short)]
        file: PathBuf,

        /// Target table name (default from config)
        #[arg(long, short)]
        table: Option<String>,
    },

    /// 📋 Generates the data quality report (console + file)
    Report {
        /// Table to audit (default from config)
        #[arg(long, short)]
        table: Option<String>,

        /// Report output path (default from config)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// 🔍 Inspects the stored table (schema + sample rows)
    Inspect {
        /// Table name to inspect (default from config)
        #[arg(long, short)]
        table: Option<String>,

        /// Number of sample rows to display
        #[arg(long, default_value = "5")]
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_report_defaults() -> Result<()> {
        let args = Cli::parse_from(["crashlens", "report"]);
        assert_eq!(args.project_dir.to_string_lossy(), ".");
        match args.command {
            Commands::Report { table, output } => {
                assert_eq!(table, None);
                assert_eq!(output, None);
                Ok(())
            }
            _ => bail!("Expected Report command"),
        }
    }

    #[test]
    fn test_cli_parse_fetch_with_filter() -> Result<()> {
        let args = Cli::parse_from([
            "crashlens",
            "fetch",
            "--limit",
            "500",
            "--where",
            "borough = 'BROOKLYN'",
        ]);
        match args.command {
            Commands::Fetch {
                limit,
                where_clause,
                output,
            } => {
                assert_eq!(limit, Some(500));
                assert_eq!(where_clause.as_deref(), Some("borough = 'BROOKLYN'"));
                assert_eq!(output, None);
                Ok(())
            }
            _ => bail!("Expected Fetch command"),
        }
    }

    #[test]
    fn test_cli_parse_load() -> Result<()> {
        let args = Cli::parse_from(["crashlens", "load", "--file", "data/raw/sample.csv"]);
        match args.command {
            Commands::Load { file, table } => {
                assert_eq!(file.to_string_lossy(), "data/raw/sample.csv");
                assert_eq!(table, None);
                Ok(())
            }
            _ => bail!("Expected Load command"),
        }
    }

    #[test]
    fn test_cli_parse_inspect() -> Result<()> {
        let args = Cli::parse_from(["crashlens", "inspect", "--table", "collisions", "--limit", "10"]);
        match args.command {
            Commands::Inspect { table, limit } => {
                assert_eq!(table.as_deref(), Some("collisions"));
                assert_eq!(limit, 10);
                Ok(())
            }
            _ => bail!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_cli_parse_global_project_dir() -> Result<()> {
        let args = Cli::parse_from(["crashlens", "report", "--project-dir", "/tmp/audit"]);
        assert_eq!(args.project_dir.to_string_lossy(), "/tmp/audit");
        Ok(())
    }
}
