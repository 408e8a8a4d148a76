//! Checker configuration schema and validation.

use auction_model_shared::{ErrorCode, ErrorEnvelope, Validated};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current config schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Report format for validation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per record.
    #[default]
    Text,
    /// A single JSON report document.
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Stable format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

/// Log line encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a log format name (case-insensitive).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `auction_check=debug`.
    pub filter: String,
    /// Log line encoding.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Effective configuration of the `auction-check` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CheckConfig {
    /// Schema version.
    pub version: u32,
    /// Report format.
    pub output: OutputFormat,
    /// Logging settings.
    pub log: LogConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            output: OutputFormat::default(),
            log: LogConfig::default(),
        }
    }
}

/// Config that passed schema validation.
pub type ValidatedCheckConfig = Validated<CheckConfig>;

/// JSON Schema for `CheckConfig`.
#[must_use]
pub fn check_config_schema() -> schemars::Schema {
    schemars::schema_for!(CheckConfig)
}

impl CheckConfig {
    /// Check schema invariants and normalize the log filter.
    pub fn validate_and_normalize(mut self) -> Result<ValidatedCheckConfig, ConfigSchemaError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigSchemaError::UnsupportedVersion {
                found: self.version,
            });
        }

        let filter = self.log.filter.trim();
        if filter.is_empty() {
            return Err(ConfigSchemaError::EmptyLogFilter);
        }
        self.log.filter = filter.to_string();

        Ok(Validated::new(self))
    }
}

/// Config schema violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// `version` is not supported by this build.
    UnsupportedVersion {
        /// Version found in the input.
        found: u32,
    },
    /// `log.filter` is blank.
    EmptyLogFilter,
}

impl ConfigSchemaError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedVersion { .. } => ErrorCode::new("config", "unsupported_version"),
            Self::EmptyLogFilter => ErrorCode::new("config", "invalid_log_filter"),
        }
    }
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found } => write!(
                formatter,
                "config version {found} is not supported (expected {CURRENT_CONFIG_VERSION})"
            ),
            Self::EmptyLogFilter => formatter.write_str("log.filter must be non-empty"),
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let mut envelope = Self::expected(error.error_code(), error.to_string());
        if let ConfigSchemaError::UnsupportedVersion { found } = error {
            envelope = envelope
                .with_metadata("found", found.to_string())
                .with_metadata("expected", CURRENT_CONFIG_VERSION.to_string());
        }
        envelope
    }
}
