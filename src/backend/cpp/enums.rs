//! Scoped enumerations.

use super::emit::{Emit, TokenStream};
use super::expr::Expr;
use super::ident::{TypeId, UnqualifiedId};
use super::tokens::{Keyword, Symbol};

/// `name = value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerator {
    pub name: UnqualifiedId,
    pub value: Expr,
}

impl Emit for Enumerator {
    fn emit_to(&self, out: &mut TokenStream) {
        out.node(&self.name);
        out.space();
        out.symbol(Symbol::Assign);
        out.space();
        out.node(&self.value);
    }
}

/// `enum class name[ : base] { entries };`
///
/// Entries are laid out one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSpecifier {
    pub name: UnqualifiedId,
    pub base: Option<TypeId>,
    pub entries: Vec<Enumerator>,
}

impl EnumSpecifier {
    pub fn new(name: impl Into<UnqualifiedId>) -> Self {
        Self {
            name: name.into(),
            base: None,
            entries: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: TypeId) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_entry(mut self, name: impl Into<UnqualifiedId>, value: Expr) -> Self {
        self.entries.push(Enumerator {
            name: name.into(),
            value,
        });
        self
    }
}

impl Emit for EnumSpecifier {
    fn emit_to(&self, out: &mut TokenStream) {
        out.keyword(Keyword::Enum);
        out.space();
        out.keyword(Keyword::Class);
        out.space();
        out.node(&self.name);
        if let Some(base) = &self.base {
            out.space();
            out.symbol(Symbol::Colon);
            out.space();
            out.node(base);
        }
        out.space();
        out.symbol(Symbol::OpenBrace);
        out.newline();
        if !self.entries.is_empty() {
            out.separated(&self.entries, &[Symbol::Comma, Symbol::Newline]);
            out.newline();
        }
        out.symbol(Symbol::CloseBrace);
        out.symbol(Symbol::Semicolon);
    }
}
