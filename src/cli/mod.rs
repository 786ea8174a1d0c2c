//! CLI module for the wlcpp header generator
//!
//! ## Usage
//!
//! ```text
//! wlcpp [--config <CONFIG>] [--output <OUTPUT>] [--dry-run]
//! ```
//!
//! - `--config` - protocol XML to read (default `/usr/share/wayland/wayland.xml`)
//! - `--output` - output root, must already exist (default `tmp`); ignored with `--dry-run`
//! - `--dry-run` - print the header paths that would be written, one per interface
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

use clap::Parser;

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
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a diagnostic (code, message, help) into a failure.
    pub fn from_diagnostic<E>(err: E) -> Self
    where
        E: miette::Diagnostic + Send + Sync + 'static,
    {
        Self::failure(format!("{:?}", miette::Report::new(err)))
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

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Protocol read when `--config` is not given.
pub const DEFAULT_PROTOCOL: &str = "/usr/share/wayland/wayland.xml";

/// Output root used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "tmp";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// C++ wayland header generator
#[derive(Parser, Debug)]
#[command(name = "wlcpp")]
#[command(version = VERSION)]
#[command(about = "C++ wayland header generator", long_about = None)]
pub struct Cli {
    /// Path to the wayland protocol XML
    #[arg(long, value_name = "CONFIG", default_value = DEFAULT_PROTOCOL)]
    pub config: PathBuf,

    /// Output root; headers are written to <OUTPUT>/include/waylandcpp/ (ignored with --dry-run)
    #[arg(long, value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// List header files to generate without writing them
    #[arg(long)]
    pub dry_run: bool,
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

/// Execute the parsed command line and return the exit code.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let protocol = commands::load_protocol(&cli.config)?;
    if cli.dry_run {
        commands::dry_run(&protocol)
    } else {
        commands::generate(&protocol, &cli.output)
    }
}

// ============================================================================
// Tests
// ============================================================================
