// crashlens-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(crashlens::infra::database::duckdb),
        help("An error occurred inside the SQL engine. Does the table exist?")
    )]
    DuckDB(#[from] duckdb::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum HttpError {
    #[error("Request timed out after {0} seconds")]
    #[diagnostic(
        code(crashlens::infra::http::timeout),
        help("The open-data API did not answer in time. Rerun once the service recovers.")
    )]
    Timeout(u64),

    #[error("HTTP error: status {0}")]
    #[diagnostic(code(crashlens::infra::http::status))]
    Status(u16),

    #[error("Transport error: {0}")]
    #[diagnostic(
        code(crashlens::infra::http::transport),
        help("Check network connectivity and the configured base URL.")
    )]
    Transport(String),

    #[error("Malformed payload: {0}")]
    #[diagnostic(
        code(crashlens::infra::http::payload),
        help("The API answered with something that is not a JSON array of flat records.")
    )]
    Payload(String),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- REMOTE API ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Http(#[from] HttpError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(crashlens::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(crashlens::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    // --- RAW FILE OUTPUT ---
    #[error("CSV Error: {0}")]
    #[diagnostic(code(crashlens::infra::csv))]
    Csv(#[from] csv::Error),
}

// Manual implementation for shortcuts (e.g. `?` operator on duckdb calls)
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}
