//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a variable that is set but blank or holds an
//! unknown value fails instead of being ignored.

use crate::schema::{CheckConfig, LogFormat, OutputFormat, ValidatedCheckConfig};
use auction_model_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;

/// Env var: report format (`text` or `json`).
pub const ENV_OUTPUT: &str = "AUCTION_CHECK_OUTPUT";
/// Env var: tracing filter directive.
pub const ENV_LOG_FILTER: &str = "AUCTION_CHECK_LOG_FILTER";
/// Env var: log line encoding (`text` or `json`).
pub const ENV_LOG_FORMAT: &str = "AUCTION_CHECK_LOG_FORMAT";

const KNOWN_VARS: [&str; 3] = [ENV_OUTPUT, ENV_LOG_FILTER, ENV_LOG_FORMAT];

/// Parsed env overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckEnv {
    /// Report format override.
    pub output: Option<OutputFormat>,
    /// Tracing filter override.
    pub log_filter: Option<String>,
    /// Log format override.
    pub log_format: Option<LogFormat>,
}

impl CheckEnv {
    /// Parse overrides from an explicit variable map.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        let output = read_non_empty(map, ENV_OUTPUT)?
            .map(|value| {
                OutputFormat::parse(value).ok_or_else(|| EnvParseError::InvalidEnum {
                    var: ENV_OUTPUT,
                    value: value.to_string(),
                })
            })
            .transpose()?;

        let log_filter = read_non_empty(map, ENV_LOG_FILTER)?.map(str::to_string);

        let log_format = read_non_empty(map, ENV_LOG_FORMAT)?
            .map(|value| {
                LogFormat::parse(value).ok_or_else(|| EnvParseError::InvalidEnum {
                    var: ENV_LOG_FORMAT,
                    value: value.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            output,
            log_filter,
            log_format,
        })
    }

    /// Parse overrides from the process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in KNOWN_VARS {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_string(), value);
            }
        }
        Self::from_map(&map)
    }

    /// Names of the env vars that carried an override.
    #[must_use]
    pub fn set_vars(&self) -> Vec<&'static str> {
        let mut vars = Vec::new();
        if self.output.is_some() {
            vars.push(ENV_OUTPUT);
        }
        if self.log_filter.is_some() {
            vars.push(ENV_LOG_FILTER);
        }
        if self.log_format.is_some() {
            vars.push(ENV_LOG_FORMAT);
        }
        vars
    }
}

fn read_non_empty<'a>(
    map: &'a BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<&'a str>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }
    Ok(Some(value))
}

/// Apply env overrides to `config`, then validate the result.
pub fn apply_env_overrides(
    mut config: CheckConfig,
    env: &CheckEnv,
) -> Result<ValidatedCheckConfig, ErrorEnvelope> {
    if let Some(output) = env.output {
        config.output = output;
    }
    if let Some(filter) = env.log_filter.as_ref() {
        config.log.filter.clone_from(filter);
    }
    if let Some(format) = env.log_format {
        config.log.format = format;
    }

    config.validate_and_normalize().map_err(ErrorEnvelope::from)
}

/// Env parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// An enum-valued env var had an unknown value.
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidEnum { .. } => ErrorCode::new("config", "invalid_env_enum"),
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidEnum { var, .. } => write!(formatter, "{var} has an unsupported value"),
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidEnum { var, value } => envelope
                .with_metadata("env_var", var)
                .with_metadata("value", value),
        }
    }
}
