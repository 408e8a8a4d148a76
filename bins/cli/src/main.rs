//! CLI binary entrypoint.

mod commands;
mod error;
mod format;
mod logging;

use auction_model_config::{OutputFormat, ValidatedCheckConfig, load_check_config_std_env};
use clap::{Parser, Subcommand};
use commands::{run_config_schema, run_config_show, run_fields, run_schema, run_validate};
use error::{CliError, ExitCode};
use format::OutputArg;
use logging::init_logging;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "auction-check",
    version,
    about = "Check auction records for missing required fields",
    long_about = None
)]
struct Cli {
    /// Config file (`.json` or `.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format; overrides the config file and env.
    #[arg(long, global = true, value_enum)]
    output: Option<OutputArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate one auction object or an array of them.
    Validate {
        /// JSON input file; reads stdin when omitted or `-`.
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
    /// List the required fields in rule order.
    Fields,
    /// Print the JSON Schema of the auction record.
    Schema,
    /// Inspect configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Print the effective config (defaults, file, env).
    Show,
    /// Print the JSON Schema of the config file.
    Schema,
}

pub(crate) struct CliOutput {
    stdout: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(cli: &Cli) -> Result<CliOutput, CliError> {
    let loaded = load_check_config_std_env(cli.config.as_deref())?;
    init_logging(&loaded.config.log)?;
    loaded.sources.trace();
    let config = loaded.config;

    let format = resolve_output(cli.output, &config);
    tracing::debug!(output = format.as_str(), "resolved output format");

    match &cli.command {
        Commands::Validate { input } => run_validate(input.as_deref(), format),
        Commands::Fields => run_fields(format),
        Commands::Schema => run_schema(),
        Commands::Config { command } => match command {
            ConfigCommands::Show => run_config_show(&config, format),
            ConfigCommands::Schema => run_config_schema(),
        },
    }
}

/// Flags beat env, env beats the file, the file beats defaults.
fn resolve_output(flag: Option<OutputArg>, config: &ValidatedCheckConfig) -> OutputFormat {
    flag.map_or(config.output, OutputFormat::from)
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
