//! Handlers that describe the auction record shape.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{render_fields, to_pretty_json_line};
use auction_model_config::OutputFormat;
use auction_model_domain::{AuctionField, auction_schema, required_fields};

/// Run the fields command.
pub fn run_fields(format: OutputFormat) -> Result<CliOutput, CliError> {
    let fields: Vec<AuctionField> = required_fields().collect();
    Ok(CliOutput {
        stdout: render_fields(&fields, format)?,
        exit_code: ExitCode::Ok,
    })
}

/// Run the schema command.
pub fn run_schema() -> Result<CliOutput, CliError> {
    Ok(CliOutput {
        stdout: to_pretty_json_line(&auction_schema())?,
        exit_code: ExitCode::Ok,
    })
}
