//! Header generation
//!
//! Drives lowering and printing for every interface of a protocol and writes one header per interface under
//! `<output>/<header_dir>/`. All headers are rendered before anything is written, so an interface that fails to lower
//! leaves the output directory untouched.

use std::fs;
use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use rayon::prelude::*;
use thiserror::Error;
use wlcpp_protocol::{Interface, Protocol};

use super::config::GeneratorConfig;
use super::lower::{InterfaceLowering, LoweringError};
use crate::format::{render, write_file};

#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    #[error("output directory '{}' does not exist", .0.display())]
    #[diagnostic(code(wlcpp::generate::output_missing), help("create it first or pass a different --output"))]
    OutputDirMissing(PathBuf),

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(code(wlcpp::generate::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lowering(#[from] LoweringError),
}

/// Generates waylandcpp headers for a protocol.
pub struct HeaderGenerator {
    output_root: PathBuf,
    config: GeneratorConfig,
}

impl HeaderGenerator {
    pub fn new(output_root: impl Into<PathBuf>, config: GeneratorConfig) -> Self {
        Self {
            output_root: output_root.into(),
            config,
        }
    }

    /// Header path relative to the output root: `include/waylandcpp/<name>.hpp`.
    pub fn relative_header_path(&self, interface: &Interface) -> PathBuf {
        self.config.header_dir.join(format!("{}.hpp", interface.name))
    }

    /// Where the header for `interface` is written.
    pub fn header_path(&self, interface: &Interface) -> PathBuf {
        self.output_root.join(self.relative_header_path(interface))
    }

    /// Lower and print one interface.
    pub fn render(&self, interface: &Interface) -> Result<String, GenerationError> {
        let unit = InterfaceLowering::new(&self.config).lower_interface(interface)?;
        Ok(render(&unit, self.config.print))
    }

    /// Relative paths of the headers `generate` would write, one per interface in protocol order.
    pub fn planned_outputs(&self, protocol: &Protocol) -> Vec<String> {
        protocol
            .interfaces
            .iter()
            .map(|interface| self.relative_header_path(interface).display().to_string())
            .collect()
    }

    /// Render every interface and write the headers.
    ///
    /// Returns the written paths in protocol order.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::OutputDirMissing`] if the output root does not exist; checked before any work
    /// - [`GenerationError::Lowering`] if any interface fails to lower; nothing is written
    /// - [`GenerationError::Io`] if creating the header directory or writing a header fails
    #[tracing::instrument(skip_all, fields(protocol = %protocol.name, output = %self.output_root.display()))]
    pub fn generate(&self, protocol: &Protocol) -> Result<Vec<PathBuf>, GenerationError> {
        if !self.output_root.is_dir() {
            return Err(GenerationError::OutputDirMissing(self.output_root.clone()));
        }

        let headers = protocol
            .interfaces
            .par_iter()
            .map(|interface| {
                self.render(interface)
                    .map(|text| (self.header_path(interface), text))
            })
            .collect::<Result<Vec<(PathBuf, String)>, GenerationError>>()?;

        let header_dir = self.output_root.join(&self.config.header_dir);
        fs::create_dir_all(&header_dir).map_err(|source| GenerationError::Io {
            path: header_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(headers.len());
        for (path, text) in headers {
            write_file(&path, &text).map_err(|source| GenerationError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), bytes = text.len(), "wrote header");
            written.push(path);
        }

        Ok(written)
    }
}
