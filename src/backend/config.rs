//! Generator configuration
//!
//! Defaults reproduce the waylandcpp layout: a fixed include block, the `waylandcpp::interface` namespace, and headers
//! under `include/waylandcpp/`.

use std::path::PathBuf;

use crate::format::PrintConfig;

/// Include block emitted at the top of every header, in order.
pub const DEFAULT_INCLUDES: [&str; 7] = [
    "<string>",
    "<vector>",
    "\"waylandcpp/wire/types.hpp\"",
    "\"waylandcpp/wire/socket.hpp\"",
    "\"waylandcpp/wire/object_builder.hpp\"",
    "\"waylandcpp/wire/buffer_parser.hpp\"",
    "\"waylandcpp/callback.hpp\"",
];

pub const DEFAULT_NAMESPACE: &str = "waylandcpp::interface";

pub const DEFAULT_HEADER_DIR: &str = "include/waylandcpp";

/// Settings shared by lowering and header generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Include directives in written form (`<string>`, `"a/b.hpp"`)
    pub includes: Vec<String>,
    /// Namespace wrapping each generated class (may be qualified)
    pub namespace: String,
    /// Header directory relative to the output root
    pub header_dir: PathBuf,
    /// Printer layout
    pub print: PrintConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            includes: DEFAULT_INCLUDES.iter().map(|include| include.to_string()).collect(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            header_dir: PathBuf::from(DEFAULT_HEADER_DIR),
            print: PrintConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_header_dir(mut self, header_dir: impl Into<PathBuf>) -> Self {
        self.header_dir = header_dir.into();
        self
    }

    pub fn with_print(mut self, print: PrintConfig) -> Self {
        self.print = print;
        self
    }
}
