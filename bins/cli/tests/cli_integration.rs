//! CLI integration tests.

use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

const COMPLETE: &str = r#"{
    "title": "Anything",
    "description": "Lorem ipsum",
    "start_date": "2024-05-01T10:00:00Z",
    "end_date": "2024-05-08T10:00:00Z"
}"#;

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_auction-check"));
    for (key, _) in std::env::vars() {
        if key.starts_with("AUCTION_CHECK_") {
            command.env_remove(key);
        }
    }
    command
}

fn run_cli(args: &[&str]) -> std::io::Result<Output> {
    cli().args(args).output()
}

fn run_cli_with_stdin(args: &[&str], stdin: &str) -> Result<Output, Box<dyn Error>> {
    let mut child = cli()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("stdin not captured")?
        .write_all(stdin.as_bytes())?;
    Ok(child.wait_with_output()?)
}

/// Per-test fixture directory, removed on drop.
struct FixtureDir {
    root: PathBuf,
}

impl FixtureDir {
    fn new(label: &str) -> std::io::Result<Self> {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let root = std::env::temp_dir().join(format!(
            "auction-check-cli-{label}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn write(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for FixtureDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn path_arg(path: &Path) -> Result<&str, Box<dyn Error>> {
    Ok(path.to_str().ok_or("fixture path is not UTF-8")?)
}

#[test]
fn complete_record_is_valid() -> Result<(), Box<dyn Error>> {
    let fixtures = FixtureDir::new("complete")?;
    let path = fixtures.write("complete.json", COMPLETE)?;

    let output = run_cli(&["validate", "--input", path_arg(&path)?])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "#0 valid\n");
    Ok(())
}

#[test]
fn each_missing_field_is_reported_alone() -> Result<(), Box<dyn Error>> {
    let payload = r#"[
        { "description": "d", "start_date": "2024-05-01T10:00:00Z", "end_date": "2024-05-08T10:00:00Z" },
        { "title": "t", "start_date": "2024-05-01T10:00:00Z", "end_date": "2024-05-08T10:00:00Z" },
        { "title": "t", "description": "d", "end_date": "2024-05-08T10:00:00Z" },
        { "title": "t", "description": "d", "start_date": "2024-05-01T10:00:00Z", "end_date": null }
    ]"#;

    let output = run_cli_with_stdin(&["validate"], payload)?;
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "#0 invalid: title can't be blank\n\
         #1 invalid: description can't be blank\n\
         #2 invalid: start_date can't be blank\n\
         #3 invalid: end_date can't be blank\n"
    );
    Ok(())
}

#[test]
fn json_report_lists_every_missing_field() -> Result<(), Box<dyn Error>> {
    let output = run_cli_with_stdin(&["validate", "--output", "json"], "{}")?;
    assert_eq!(output.status.code(), Some(4));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["valid"], false);
    let fields: Vec<&str> = report["records"][0]["errors"]
        .as_array()
        .ok_or("errors is not an array")?
        .iter()
        .filter_map(|error| error["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["title", "description", "start_date", "end_date"]);
    Ok(())
}

#[test]
fn env_selects_output_format() -> Result<(), Box<dyn Error>> {
    let fixtures = FixtureDir::new("env-output")?;
    let path = fixtures.write("env-output.json", COMPLETE)?;

    let output = cli()
        .args(["validate", "--input", path_arg(&path)?])
        .env("AUCTION_CHECK_OUTPUT", "json")
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["valid"], true);
    Ok(())
}

#[test]
fn malformed_input_exits_with_invalid_input() -> Result<(), Box<dyn Error>> {
    let output = run_cli_with_stdin(&["validate"], "{ not json")?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("error: invalid input"));
    Ok(())
}

#[test]
fn missing_input_file_exits_with_io() -> Result<(), Box<dyn Error>> {
    let output = run_cli(&["validate", "--input", "/nonexistent/auctions.json"])?;
    assert_eq!(output.status.code(), Some(3));
    Ok(())
}

#[test]
fn unsupported_config_version_is_rejected() -> Result<(), Box<dyn Error>> {
    let fixtures = FixtureDir::new("bad-version")?;
    let config = fixtures.write("bad-version.toml", "version = 7\n")?;

    let output = run_cli(&["fields", "--config", path_arg(&config)?])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("unsupported_version"));
    Ok(())
}

#[test]
fn fields_are_listed_in_rule_order() -> Result<(), Box<dyn Error>> {
    let output = run_cli(&["fields"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "title\ndescription\nstart_date\nend_date\n"
    );
    Ok(())
}

#[test]
fn schema_describes_the_record() -> Result<(), Box<dyn Error>> {
    let output = run_cli(&["schema"])?;
    assert_eq!(output.status.code(), Some(0));

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(schema["properties"]["start_date"].is_object());
    Ok(())
}

#[test]
fn config_show_reflects_file_values() -> Result<(), Box<dyn Error>> {
    let fixtures = FixtureDir::new("show")?;
    let config = fixtures.write("show.json", r#"{ "log": { "filter": "info" } }"#)?;

    let output = run_cli(&[
        "config",
        "show",
        "--config",
        path_arg(&config)?,
        "--output",
        "json",
    ])?;
    assert_eq!(output.status.code(), Some(0));

    let shown: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(shown["log"]["filter"], "info");
    assert_eq!(shown["output"], "text");
    assert_eq!(shown["version"], 1);
    Ok(())
}

#[test]
fn config_loading_is_logged_once_logging_is_up() -> Result<(), Box<dyn Error>> {
    let fixtures = FixtureDir::new("debug-log")?;
    let config = fixtures.write("debug.json", r#"{ "log": { "filter": "debug" } }"#)?;

    let output = cli()
        .args(["fields", "--config", path_arg(&config)?])
        .env("AUCTION_CHECK_OUTPUT", "text")
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("loaded config file"), "stderr: {stderr}");
    assert!(stderr.contains("applied env overrides"), "stderr: {stderr}");
    assert!(stderr.contains("AUCTION_CHECK_OUTPUT"), "stderr: {stderr}");
    assert!(!stderr.contains('\x1b'), "piped stderr carries ANSI escapes");
    Ok(())
}

#[test]
fn unreadable_config_file_exits_with_io() -> Result<(), Box<dyn Error>> {
    let output = run_cli(&["fields", "--config", "/nonexistent/auction-check.toml"])?;
    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("io:not_found"), "stderr: {stderr}");
    Ok(())
}
