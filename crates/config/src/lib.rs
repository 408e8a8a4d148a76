//! # auction-model-config
//!
//! Configuration schema, env overrides, and loading for `auction-check`.
//! This crate depends on `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (file + env).
pub mod load;
/// Configuration schema types and validation.
pub mod schema;

pub use env::{
    CheckEnv, ENV_LOG_FILTER, ENV_LOG_FORMAT, ENV_OUTPUT, EnvParseError, apply_env_overrides,
};
pub use load::{
    ConfigFileSource, ConfigFormat, ConfigSources, LoadedCheckConfig, load_check_config_from_path,
    load_check_config_std_env, parse_check_config_json, parse_check_config_toml, to_pretty_json,
    to_pretty_toml,
};
pub use schema::{
    CURRENT_CONFIG_VERSION, CheckConfig, ConfigSchemaError, DEFAULT_LOG_FILTER, LogConfig,
    LogFormat, OutputFormat, ValidatedCheckConfig, check_config_schema,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_model_shared::shared_crate_version;

    #[test]
    fn config_can_use_shared() {
        assert!(!config_crate_version().is_empty());
        assert!(!shared_crate_version().is_empty());
    }
}
