//! Config loading helpers (file + env).
//!
//! Precedence (highest wins):
//! - env overrides (`CheckEnv`)
//! - config file content
//! - defaults (`CheckConfig::default()`)
//!
//! Command-line flags are applied by the binary on top of the result.

use crate::{CheckConfig, CheckEnv, ValidatedCheckConfig, apply_env_overrides};
use auction_model_shared::{ErrorClass, ErrorCode, ErrorEnvelope, Result};
use std::path::{Path, PathBuf};

/// Config file encoding, detected from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json`, or no extension.
    Json,
    /// `.toml`.
    Toml,
}

impl ConfigFormat {
    /// Stable format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// A config file that was read and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileSource {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Detected encoding.
    pub format: ConfigFormat,
}

/// Layers merged into the effective config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    /// The config file, when one was given.
    pub file: Option<ConfigFileSource>,
    /// Env vars that overrode file or default values.
    pub env_vars: Vec<&'static str>,
}

impl ConfigSources {
    /// Emit one `debug` event per applied layer.
    ///
    /// Loading runs before any subscriber is installed, so callers replay the
    /// sources once logging is up.
    pub fn trace(&self) {
        match &self.file {
            Some(file) => tracing::debug!(
                path = %file.path.display(),
                format = file.format.as_str(),
                "loaded config file"
            ),
            None => tracing::debug!("no config file given, starting from defaults"),
        }
        if !self.env_vars.is_empty() {
            tracing::debug!(vars = %self.env_vars.join(","), "applied env overrides");
        }
    }
}

/// Effective config together with the layers it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCheckConfig {
    /// Validated, merged config.
    pub config: ValidatedCheckConfig,
    /// Where the values came from.
    pub sources: ConfigSources,
}

/// Load the config from an optional file path and parsed env overrides.
pub fn load_check_config_from_path(
    config_path: Option<&Path>,
    env: &CheckEnv,
) -> Result<LoadedCheckConfig> {
    let (config, file) = match config_path {
        None => (CheckConfig::default(), None),
        Some(path) => {
            let config_text = read_config_file(path)?;
            let format = detect_config_format(path)?;
            let config = parse_config_unvalidated(&config_text, format)?;
            let source = ConfigFileSource {
                path: path.to_path_buf(),
                format,
            };
            (config, Some(source))
        },
    };

    Ok(LoadedCheckConfig {
        config: apply_env_overrides(config, env)?,
        sources: ConfigSources {
            file,
            env_vars: env.set_vars(),
        },
    })
}

/// Load the config from the process env and an optional file path.
pub fn load_check_config_std_env(config_path: Option<&Path>) -> Result<LoadedCheckConfig> {
    let env = CheckEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    load_check_config_from_path(config_path, &env)
}

/// Parse and validate a JSON config document.
pub fn parse_check_config_json(input: &str) -> Result<ValidatedCheckConfig> {
    let config = parse_config_unvalidated(input, ConfigFormat::Json)?;
    config.validate_and_normalize().map_err(ErrorEnvelope::from)
}

/// Parse and validate a TOML config document.
pub fn parse_check_config_toml(input: &str) -> Result<ValidatedCheckConfig> {
    let config = parse_config_unvalidated(input, ConfigFormat::Toml)?;
    config.validate_and_normalize().map_err(ErrorEnvelope::from)
}

/// Serialize the config as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &CheckConfig) -> Result<String> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::internal(),
            format!("failed to serialize config: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &CheckConfig) -> Result<String> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn parse_config_unvalidated(input: &str, format: ConfigFormat) -> Result<CheckConfig> {
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid config JSON: {error}"),
            )
            .with_metadata("source", "config")
        }),
        ConfigFormat::Toml => toml::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_toml"),
                format!("invalid config TOML: {error}"),
            )
            .with_metadata("source", "config")
        }),
    }
}

fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|error| {
        ErrorEnvelope::from(error)
            .with_metadata("source", "config")
            .with_metadata("path", path.display().to_string())
    })
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other.to_string())),
    }
}
