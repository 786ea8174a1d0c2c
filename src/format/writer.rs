//! Token printer with brace-driven indentation
//!
//! Turns a flat token sequence into text. Layout rules:
//! - `{` raises the depth after it is written
//! - `}` lowers the depth before it is written (never below zero)
//! - a newline ends the line and writes no indentation itself
//! - the first non-space token on a line is preceded by `depth * indent_width` spaces

use crate::backend::cpp::{Symbol, Token, TokenStream};

use super::config::PrintConfig;

/// Printer that tracks brace depth and builds the output text
pub struct Printer {
    /// The output buffer
    output: String,
    /// Current brace depth
    depth: usize,
    /// Configuration
    config: PrintConfig,
    /// Whether anything other than spaces was written on the current line
    dirty: bool,
}

impl Printer {
    /// Create a new printer with the given config
    pub fn new(config: PrintConfig) -> Self {
        Self {
            output: String::new(),
            depth: 0,
            config,
            dirty: false,
        }
    }

    /// Get the printed output
    pub fn finish(self) -> String {
        self.output
    }

    /// Current brace depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Print every token of `tokens` in order.
    pub fn print_all(&mut self, tokens: &TokenStream) {
        for token in tokens {
            self.print(token);
        }
    }

    /// Print one token.
    pub fn print(&mut self, token: &Token) {
        match token {
            Token::Symbol(Symbol::Newline) => {
                self.output.push('\n');
                self.dirty = false;
            }
            Token::Symbol(Symbol::Space) => self.output.push(' '),
            Token::Symbol(Symbol::OpenBrace) => {
                self.write(token.as_str());
                self.depth += 1;
            }
            Token::Symbol(Symbol::CloseBrace) => {
                self.depth = self.depth.saturating_sub(1);
                self.write(token.as_str());
            }
            Token::Keyword(_) | Token::Symbol(_) | Token::Text(_) => self.write(token.as_str()),
        }
    }

    /// Write text, indenting first if the line is still clean
    fn write(&mut self, s: &str) {
        if !self.dirty {
            let indent = self.depth * self.config.indent_width;
            self.output.extend(std::iter::repeat_n(' ', indent));
            self.dirty = true;
        }
        self.output.push_str(s);
    }
}
