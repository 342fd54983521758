//! Bulk-import journals from a JSON file

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::importer::{BatchImporter, Summary, DEFAULT_BATCH_SIZE, DEFAULT_DELAY_SECS};
use crate::output::{print_header, print_info, print_key_value, print_success, print_warning};
use clap::Args;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Import journal records from a JSON file
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file containing an array of journal records
    pub json_file: PathBuf,

    /// Discourse site URL (e.g. https://forum.example.com)
    pub base_url: String,

    /// API key (generate under Admin -> API -> New API Key)
    pub api_key: String,

    /// Admin username the key belongs to
    pub username: String,

    /// Records per batch (server recommends at most 500)
    #[arg(default_value_t = DEFAULT_BATCH_SIZE, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub batch_size: usize,

    /// Delay between batches, in seconds
    #[arg(default_value_t = DEFAULT_DELAY_SECS, value_parser = parse_delay)]
    pub delay: f64,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_delay(s: &str) -> Result<f64, String> {
    let delay: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if delay.is_finite() && delay >= 0.0 {
        Ok(delay)
    } else {
        Err("delay must be a non-negative number of seconds".to_string())
    }
}

/// Execute the import command
pub async fn execute(args: ImportArgs) -> CliResult<()> {
    let records = load_records(&args.json_file)?;

    print_header("Journal import");
    print_key_value("File", &args.json_file.display().to_string());
    print_key_value("Records", &records.len().to_string());
    print_key_value("Batch size", &args.batch_size.to_string());
    print_key_value("Delay", &format!("{}s", args.delay));
    println!();

    let client = ApiClient::new(&args.base_url, &args.api_key, &args.username)?;
    let importer = BatchImporter::new(client);

    let summary = importer.run(&records, args.batch_size, args.delay).await;

    finish_run(&args.json_file, &summary, args.json)
}

/// Report the finished (or interrupted) run and persist the error log
///
/// The error-log sidecar is written whenever errors were recorded, an
/// interrupted run included, so the partial output stays actionable. An
/// interrupted run still exits non-zero.
fn finish_run(json_file: &Path, summary: &Summary, as_json: bool) -> CliResult<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print_summary(summary);
    }

    if summary.has_errors() {
        let error_file = write_error_log(json_file, summary)?;
        print_info(&format!("Error log saved to: {}", error_file.display()));
    }

    if summary.interrupted {
        print_warning("Import interrupted; remaining batches were not sent.");
        return Err(CliError::Interrupted);
    }

    Ok(())
}

/// Load the input file and require a top-level JSON array
///
/// Any other top-level shape is a fatal input error, reported before any
/// network activity.
pub fn load_records(path: &Path) -> CliResult<Vec<Value>> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("Failed to read {}: {e}", path.display())))?;

    let parsed: Value = serde_json::from_str(&content)?;
    match parsed {
        Value::Array(records) => Ok(records),
        other => Err(CliError::Validation(format!(
            "{} must contain a JSON array of journal records, found {}",
            path.display(),
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Write each accumulated error on its own line next to the input file
fn write_error_log(json_file: &Path, summary: &Summary) -> CliResult<PathBuf> {
    let mut path = json_file.as_os_str().to_os_string();
    path.push(".errors.txt");
    let path = PathBuf::from(path);

    let mut content = summary.errors.join("\n");
    content.push('\n');
    fs::write(&path, content)
        .map_err(|e| CliError::Io(format!("Failed to write {}: {e}", path.display())))?;

    Ok(path)
}

fn print_summary(summary: &Summary) {
    print_header("Import complete");
    print_key_value("Total", &summary.total.to_string());
    print_key_value("Created", &summary.created.to_string());
    print_key_value("Updated", &summary.updated.to_string());
    print_key_value("Skipped", &summary.skipped.to_string());
    print_key_value("Failed", &summary.failed.to_string());
    if summary.has_errors() {
        print_warning(&format!("{} error(s) recorded", summary.errors.len()));
    } else {
        print_success("No errors");
    }
}
