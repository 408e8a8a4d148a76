//! Config command handlers.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::to_pretty_json_line;
use auction_model_config::{
    CheckConfig, OutputFormat, check_config_schema, to_pretty_json, to_pretty_toml,
};

/// Print the effective config.
pub fn run_config_show(config: &CheckConfig, format: OutputFormat) -> Result<CliOutput, CliError> {
    let stdout = match format {
        OutputFormat::Text => to_pretty_toml(config)?,
        OutputFormat::Json => to_pretty_json(config)?,
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}

/// Print the config JSON Schema.
pub fn run_config_schema() -> Result<CliOutput, CliError> {
    Ok(CliOutput {
        stdout: to_pretty_json_line(&check_config_schema())?,
        exit_code: ExitCode::Ok,
    })
}
