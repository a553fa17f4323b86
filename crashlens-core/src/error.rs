// crashlens-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{DatabaseError, HttpError, InfrastructureError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrashlensError {
    // --- ERREURS DU DOMAINE (Audit rules, dataset conditions) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, DB, HTTP, Parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS GÉNÉRIQUES / APPLICATIVES ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementations to avoid duplicate enum variants but keep ergonomics
// (`?` on io/duckdb/http/csv calls anywhere in the crate).
impl From<std::io::Error> for CrashlensError {
    fn from(err: std::io::Error) -> Self {
        CrashlensError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<duckdb::Error> for CrashlensError {
    fn from(err: duckdb::Error) -> Self {
        CrashlensError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(err)))
    }
}

impl From<HttpError> for CrashlensError {
    fn from(err: HttpError) -> Self {
        CrashlensError::Infrastructure(InfrastructureError::Http(err))
    }
}

impl From<csv::Error> for CrashlensError {
    fn from(err: csv::Error) -> Self {
        CrashlensError::Infrastructure(InfrastructureError::Csv(err))
    }
}
