//! Output format helpers and report rendering.

use crate::error::CliError;
use auction_model_config::OutputFormat;
use auction_model_domain::AuctionField;
use auction_model_shared::{ErrorCode, FieldName, ValidationErrors};
use clap::ValueEnum;
use serde::Serialize;

/// Output format choices accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human-friendly text output.
    Text,
    /// Machine-friendly JSON output.
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(value: OutputArg) -> Self {
        match value {
            OutputArg::Text => Self::Text,
            OutputArg::Json => Self::Json,
        }
    }
}

/// Validation outcome for one input record.
#[derive(Debug, Clone)]
pub struct RecordReport {
    pub index: usize,
    pub errors: ValidationErrors<AuctionField>,
}

impl RecordReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDto {
    valid: bool,
    records: Vec<RecordDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordDto {
    index: usize,
    valid: bool,
    errors: Vec<FieldErrorDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldErrorDto {
    field: &'static str,
    code: String,
    message: String,
}

/// Render a validation report in the requested format.
pub fn render_report(reports: &[RecordReport], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_report_text(reports)),
        OutputFormat::Json => render_report_json(reports),
    }
}

fn render_report_text(reports: &[RecordReport]) -> String {
    let mut output = String::new();
    for report in reports {
        if report.is_valid() {
            output.push_str(&format!("#{} valid\n", report.index));
        } else {
            let messages: Vec<String> = report
                .errors
                .iter()
                .map(|error| error.message())
                .collect();
            output.push_str(&format!(
                "#{} invalid: {}\n",
                report.index,
                messages.join("; ")
            ));
        }
    }
    output
}

fn render_report_json(reports: &[RecordReport]) -> Result<String, CliError> {
    let code = ErrorCode::missing_required_field().code().to_string();
    let records: Vec<RecordDto> = reports
        .iter()
        .map(|report| RecordDto {
            index: report.index,
            valid: report.is_valid(),
            errors: report
                .errors
                .iter()
                .map(|error| FieldErrorDto {
                    field: error.field.name(),
                    code: code.clone(),
                    message: error.message(),
                })
                .collect(),
        })
        .collect();
    let payload = ReportDto {
        valid: records.iter().all(|record| record.valid),
        records,
    };

    to_pretty_json_line(&payload)
}

/// Render the required field names, one per line or as a JSON array.
pub fn render_fields(fields: &[AuctionField], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for field in fields {
                output.push_str(field.as_str());
                output.push('\n');
            }
            Ok(output)
        },
        OutputFormat::Json => {
            let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
            to_pretty_json_line(&serde_json::json!({ "requiredFields": names }))
        },
    }
}

/// Pretty JSON followed by a trailing newline.
pub fn to_pretty_json_line<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}
