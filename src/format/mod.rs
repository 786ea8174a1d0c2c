//! Header printer
//!
//! Renders emitted token sequences as text. The printer is a mechanical transducer: indentation follows brace depth,
//! line breaks come only from newline tokens, and nothing is wrapped or reflowed.

mod config;
mod writer;

use std::fs;
use std::io;
use std::path::Path;

use crate::backend::cpp::Emit;

pub use config::PrintConfig;
pub use writer::Printer;

/// Emit `node` and print it with `config`.
pub fn render(node: &impl Emit, config: PrintConfig) -> String {
    let mut printer = Printer::new(config);
    printer.print_all(&node.emit());
    printer.finish()
}

/// Write a rendered buffer to `path` in a single write.
pub fn write_file(path: &Path, text: &str) -> io::Result<()> {
    fs::write(path, text)
}
