//! Validate command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{RecordReport, render_report};
use auction_model_config::OutputFormat;
use auction_model_domain::{Auction, validation_errors};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Validate every auction in the input document.
pub fn run_validate(input: Option<&Path>, format: OutputFormat) -> Result<CliOutput, CliError> {
    let raw = read_input(input)?;
    let auctions = parse_auctions(&raw)?;

    let reports: Vec<RecordReport> = auctions
        .iter()
        .enumerate()
        .map(|(index, auction)| {
            let errors = validation_errors(auction);
            tracing::debug!(
                index,
                missing = %errors.field_names().join(","),
                "validated auction record"
            );
            RecordReport { index, errors }
        })
        .collect();

    let invalid = reports.iter().filter(|report| !report.is_valid()).count();
    tracing::info!(records = reports.len(), invalid, "validation finished");

    Ok(CliOutput {
        stdout: render_report(&reports, format)?,
        exit_code: if invalid == 0 {
            ExitCode::Ok
        } else {
            ExitCode::ValidationFailed
        },
    })
}

fn read_input(input: Option<&Path>) -> Result<String, CliError> {
    match input {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading auctions from file");
            Ok(std::fs::read_to_string(path)?)
        },
        _ => {
            tracing::debug!("reading auctions from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        },
    }
}

/// Accept either one auction object or an array of them.
fn parse_auctions(raw: &str) -> Result<Vec<Auction>, CliError> {
    let document: Value = serde_json::from_str(raw)
        .map_err(|error| CliError::InvalidInput(format!("input is not valid JSON: {error}")))?;

    match document {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| parse_record(index, item))
            .collect(),
        Value::Object(map) => Ok(vec![parse_record(0, Value::Object(map))?]),
        _ => Err(CliError::InvalidInput(
            "expected an auction object or an array of auction objects".to_string(),
        )),
    }
}

fn parse_record(index: usize, item: Value) -> Result<Auction, CliError> {
    if !item.is_object() {
        return Err(CliError::InvalidInput(format!(
            "record #{index} is not an object"
        )));
    }
    serde_json::from_value(item)
        .map_err(|error| CliError::InvalidInput(format!("record #{index}: {error}")))
}
