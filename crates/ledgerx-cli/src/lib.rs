/*
[INPUT]:  Public API exports for ledgerx-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod commands;
pub mod config;

// Re-export main types for convenience
pub use commands::Command;
pub use config::{CliConfig, JWT_ENV_VAR};
