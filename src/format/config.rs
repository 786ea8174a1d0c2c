//! Printer configuration

/// Layout settings for the token printer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl PrintConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}
