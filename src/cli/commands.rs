//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};
use std::path::Path;

use wlcpp_protocol::{Protocol, read_protocol};

use crate::backend::{GeneratorConfig, HeaderGenerator};

use super::{CliError, CliResult, ExitCode};

/// Read and parse the protocol XML.
pub fn load_protocol(path: &Path) -> CliResult<Protocol> {
    let protocol = read_protocol(path).map_err(CliError::from_diagnostic)?;
    tracing::info!(
        protocol = %protocol.name,
        interfaces = protocol.interfaces.len(),
        path = %path.display(),
        "loaded protocol"
    );
    Ok(protocol)
}

/// Print the header paths `generate` would write, one per line.
pub fn dry_run(protocol: &Protocol) -> CliResult<ExitCode> {
    let generator = HeaderGenerator::new(".", GeneratorConfig::default());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in generator.planned_outputs(protocol) {
        writeln!(out, "{path}").map_err(|e| CliError::failure(format!("Error writing to stdout: {e}")))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Generate every header under `output`.
pub fn generate(protocol: &Protocol, output: &Path) -> CliResult<ExitCode> {
    let generator = HeaderGenerator::new(output, GeneratorConfig::default());
    let written = generator.generate(protocol).map_err(CliError::from_diagnostic)?;
    tracing::info!(headers = written.len(), output = %output.display(), "headers written");
    Ok(ExitCode::SUCCESS)
}
