//! CLI module for the snippets tool
//!
//! ## Commands
//!
//! - `tour` - Run every snippet top to bottom (default when no subcommand is given)
//! - `fetch <url>` - Run the unread-count fetch stub
//! - `read <path>` - Read a snippet file, capturing any I/O failure
//! - `greet --name <name> --age <age>` - Format a person record
//! - `number <value> [--style <style>] [--all]` - Format a number in a named style
//! - `literals` - Show the raw string literal exhibits
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::format::{FormatConfig, NumberStyle};
use crate::version::SNIPPETS_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Result, raw string literal, and formatting snippets
#[derive(Parser, Debug)]
#[command(name = "snippets")]
#[command(version = SNIPPETS_VERSION)]
#[command(about = "Result, raw string literal, and formatting snippets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub format: FormatArgs,
}

/// Number formatting settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct FormatArgs {
    /// Currency symbol for currency styles
    #[arg(long, global = true, value_name = "SYMBOL")]
    pub currency_symbol: Option<String>,

    /// ISO currency code for the currency-iso-code style
    #[arg(long, global = true, value_name = "CODE")]
    pub currency_code: Option<String>,

    /// Disable digit grouping
    #[arg(long, global = true)]
    pub no_grouping: bool,
}

impl FormatArgs {
    /// Build the formatting configuration these flags describe.
    pub fn to_config(&self) -> FormatConfig {
        let mut config = FormatConfig::new().with_grouping(!self.no_grouping);
        if let Some(symbol) = &self.currency_symbol {
            config = config.with_currency_symbol(symbol.clone());
        }
        if let Some(code) = &self.currency_code {
            config = config.with_currency_code(code.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every snippet top to bottom
    Tour,

    /// Fetch the (simulated) unread count for a URL
    Fetch {
        /// Resource locator to validate
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Read a text file and report its size
    Read {
        /// File to read
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Describe a person
    Greet {
        /// Person's name
        #[arg(long)]
        name: String,
        /// Person's age
        #[arg(long)]
        age: u32,
    },

    /// Format a number in a named style
    #[command(allow_negative_numbers = true)]
    Number {
        /// Integer to format
        #[arg(value_name = "VALUE")]
        value: i64,
        /// Style name (none, decimal, currency, percent, scientific, spell-out, ordinal,
        /// currency-iso-code, currency-plural, currency-accounting)
        #[arg(short, long, default_value = "decimal", conflicts_with = "all")]
        style: NumberStyle,
        /// Print the value in every style
        #[arg(long)]
        all: bool,
    },

    /// Show the raw string literal exhibits
    Literals,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.format.to_config();

    match cli.command {
        None | Some(Command::Tour) => commands::tour(&config),
        Some(Command::Fetch { url }) => commands::fetch(&url),
        Some(Command::Read { path }) => commands::read(&path),
        Some(Command::Greet { name, age }) => commands::greet(name, age),
        Some(Command::Number { value, style, all }) => {
            if all {
                commands::number_all(value, &config)
            } else {
                commands::number(value, style, &config)
            }
        }
        Some(Command::Literals) => commands::literals(),
    }
}

// ============================================================================
// Tests
// ============================================================================
