//! CLI command handlers.

pub mod config;
pub mod describe;
pub mod validate;

pub use config::{run_config_schema, run_config_show};
pub use describe::{run_fields, run_schema};
pub use validate::run_validate;
