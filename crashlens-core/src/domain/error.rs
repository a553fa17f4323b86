// crashlens-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Refusing to save an empty dataset (0 records fetched)")]
    #[diagnostic(
        code(crashlens::domain::empty_dataset),
        help("Loosen the --where filter or raise --limit.")
    )]
    EmptyDataset,

    #[error("Row limit must be a positive integer (got {0})")]
    #[diagnostic(code(crashlens::domain::invalid_limit))]
    InvalidLimit(u64),
}
