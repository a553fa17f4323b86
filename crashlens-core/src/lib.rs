// crashlens-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]
// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Contracts the application depends on (Connector, DatasetSource).
pub mod ports;

// 2. Domain (Cœur du métier)
// Completeness metrics, validation checks, quality scoring.
// Depends on NOTHING else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Technical implementations (DuckDB, HTTP client, config files, atomic IO).
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (Fetch, Load, Report building and rendering).
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Allows importing the main error easily: use crashlens_core::CrashlensError;
pub use error::CrashlensError;
