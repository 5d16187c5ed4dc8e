//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use crate::capture::{ReadError, describe_read, read_snippet};
use crate::exhibits;
use crate::fetch::{FetchError, describe_outcome, fetch_unread_count};
use crate::format::{FormatConfig, LocaleNumberFormatter, NumberFormatter, NumberStyle, User};

use super::{CliError, CliResult, ExitCode};

/// Print the tour.
pub fn tour(config: &FormatConfig) -> CliResult<ExitCode> {
    for line in crate::tour::tour(config) {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Fetch the unread count for `url` and print it.
pub fn fetch(url: &str) -> CliResult<ExitCode> {
    let outcome = fetch_unread_count(url);
    match &outcome {
        Ok(_) => {
            println!("{}", describe_outcome(&outcome));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(fetch_failure(err.clone())),
    }
}

/// Render a fetch error as a miette report.
fn fetch_failure(err: FetchError) -> CliError {
    let report = miette::Report::new(err);
    CliError::failure(format!("{report:?}"))
}

/// Read `path` and print its size in bytes.
pub fn read(path: &Path) -> CliResult<ExitCode> {
    let outcome = read_snippet(path);
    if outcome.is_ok() {
        println!("{}", describe_read(&outcome));
    }
    outcome.map(|_| ExitCode::SUCCESS).map_err(read_failure)
}

/// Render a read error as a miette report, which includes the OS cause.
fn read_failure(err: ReadError) -> CliError {
    let report = miette::Report::new(err);
    CliError::failure(format!("{report:?}"))
}

/// Print the sentence form of a person.
pub fn greet(name: String, age: u32) -> CliResult<ExitCode> {
    let user = User::new(name, age);
    println!("User details: {user}");
    Ok(ExitCode::SUCCESS)
}

/// Print `value` in `style`.
pub fn number(value: i64, style: NumberStyle, config: &FormatConfig) -> CliResult<ExitCode> {
    let formatter = LocaleNumberFormatter::new(config.clone());
    match formatter.format(value, style) {
        Some(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        None => Err(CliError::failure(format!(
            "Error: style `{style}` cannot render {value}"
        ))),
    }
}

/// Print `value` in every style; unsupported styles print `-`.
pub fn number_all(value: i64, config: &FormatConfig) -> CliResult<ExitCode> {
    let formatter = LocaleNumberFormatter::new(config.clone());
    let width = NumberStyle::ALL
        .iter()
        .map(|style| style.as_str().len())
        .max()
        .unwrap_or(0);
    for style in NumberStyle::ALL {
        let text = formatter.format(value, style).unwrap_or_else(|| "-".to_string());
        println!("{:<width$}  {}", style.as_str(), text);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print each exhibit's text with its raw and escaped literal forms.
pub fn literals() -> CliResult<ExitCode> {
    for exhibit in exhibits::all() {
        println!("{}: {}", exhibit.name, exhibit.text);
        println!("  raw:     {}", exhibit.raw_source());
        println!(
            "  escaped: {} ({} escapes saved)",
            exhibit.escaped_source(),
            exhibit.escapes_saved()
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use snippets_core::errors::BAD_URL_MSG;

    #[test]
    fn test_fetch_success_exits_zero() {
        assert_eq!(fetch("https://example.com").unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_fetch_bad_url_fails_with_report() {
        let err = fetch("").unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains(BAD_URL_MSG), "unexpected report: {}", err.message);
    }

    #[test]
    fn test_read_missing_file_fails_with_report() {
        let missing = std::env::temp_dir().join(format!("snippets-cli-{}-missing", std::process::id()));
        let err = read(&missing).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("cannot read snippet file"), "unexpected report: {}", err.message);
    }

    #[test]
    fn test_read_existing_file_exits_zero() {
        let present = std::env::temp_dir().join(format!("snippets-cli-{}-present", std::process::id()));
        std::fs::write(&present, "hello").unwrap();
        let result = read(&present);
        std::fs::remove_file(&present).unwrap();
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_number_unsupported_fails() {
        let err = number(i64::MAX, NumberStyle::Percent, &FormatConfig::default()).unwrap_err();
        assert_eq!(err.message, format!("Error: style `percent` cannot render {}", i64::MAX));
    }

    #[test]
    fn test_number_all_never_fails() {
        let result = number_all(i64::MAX, &FormatConfig::default());
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }
}
