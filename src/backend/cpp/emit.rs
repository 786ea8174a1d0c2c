//! Emission protocol: node → flat token sequence.
//!
//! Every node kind implements [`Emit`] by appending its tokens to a [`TokenStream`]. The stream helpers encode the
//! three generic rules once:
//!
//! - optional nodes emit nothing when absent ([`TokenStream::optional`], and `Emit for Option<T>`)
//! - sequences emit a separator between elements, never before the first or after the last
//!   ([`TokenStream::separated`])
//! - literal keywords and symbols emit exactly one token
//!
//! Composite nodes interleave these in the order of their grammar production.

use super::tokens::{Keyword, Symbol, Token};

/// A node that can be flattened into tokens.
pub trait Emit {
    /// Append this node's tokens to `out`.
    fn emit_to(&self, out: &mut TokenStream);

    /// Emit this node into a fresh stream.
    fn emit(&self) -> TokenStream {
        let mut out = TokenStream::new();
        self.emit_to(&mut out);
        out
    }
}

/// Ordered sequence of primitive tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: impl Into<Token>) {
        self.tokens.push(token.into());
    }

    pub fn keyword(&mut self, keyword: Keyword) {
        self.push(keyword);
    }

    pub fn symbol(&mut self, symbol: Symbol) {
        self.push(symbol);
    }

    pub fn space(&mut self) {
        self.symbol(Symbol::Space);
    }

    pub fn newline(&mut self) {
        self.symbol(Symbol::Newline);
    }

    /// Append literal text. Empty text is dropped so it can never start an indented line on its own.
    pub fn text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.tokens.push(Token::Text(text));
        }
    }

    /// Append a nested node's sequence.
    pub fn node<T: Emit + ?Sized>(&mut self, node: &T) {
        node.emit_to(self);
    }

    /// Append the held node, or nothing.
    pub fn optional<T: Emit>(&mut self, node: Option<&T>) {
        if let Some(node) = node {
            node.emit_to(self);
        }
    }

    /// Append `items` with `separator` between consecutive elements.
    pub fn separated<'a, T, I>(&mut self, items: I, separator: &[Symbol])
    where
        T: Emit + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                for symbol in separator {
                    self.symbol(*symbol);
                }
            }
            item.emit_to(self);
        }
    }

    /// Append `items` separated by `", "`.
    pub fn comma_separated<'a, T, I>(&mut self, items: I)
    where
        T: Emit + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.separated(items, &[Symbol::Comma, Symbol::Space]);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Concatenate the tokens without any layout (useful for single-line nodes).
    pub fn to_plain_string(&self) -> String {
        self.tokens.iter().map(Token::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl Emit for Keyword {
    fn emit_to(&self, out: &mut TokenStream) {
        out.keyword(*self);
    }
}

impl Emit for Symbol {
    fn emit_to(&self, out: &mut TokenStream) {
        out.symbol(*self);
    }
}

impl Emit for Token {
    fn emit_to(&self, out: &mut TokenStream) {
        out.push(self.clone());
    }
}

impl<T: Emit> Emit for Option<T> {
    fn emit_to(&self, out: &mut TokenStream) {
        out.optional(self.as_ref());
    }
}

impl<T: Emit + ?Sized> Emit for Box<T> {
    fn emit_to(&self, out: &mut TokenStream) {
        (**self).emit_to(out);
    }
}
