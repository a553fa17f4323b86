// crashlens-core/src/infrastructure/config/mod.rs

pub mod audit;

pub use audit::{AuditConfig, load_audit_config};
