//! Declarators, initializers and simple declarations.

use super::emit::{Emit, TokenStream};
use super::expr::Expr;
use super::ident::{Id, UnqualifiedId};
use super::specifier::DeclSpecifierSeq;
use super::tokens::Symbol;

/// The declared name, optionally behind a reference marker.
///
/// Reference forms hold an identifier directly, so a reference can never wrap another reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declarator {
    Id(Id),
    /// `&name`
    LvalueRef(Id),
    /// `&&name`
    RvalueRef(Id),
    /// `[a, b]`
    StructuredBinding(Vec<UnqualifiedId>),
}

impl Declarator {
    pub fn id(name: impl Into<Id>) -> Self {
        Declarator::Id(name.into())
    }

    pub fn lvalue_ref(name: impl Into<Id>) -> Self {
        Declarator::LvalueRef(name.into())
    }

    pub fn rvalue_ref(name: impl Into<Id>) -> Self {
        Declarator::RvalueRef(name.into())
    }

    /// The declared name, if this declarator introduces exactly one.
    pub fn name(&self) -> Option<&Id> {
        match self {
            Declarator::Id(id) | Declarator::LvalueRef(id) | Declarator::RvalueRef(id) => Some(id),
            Declarator::StructuredBinding(_) => None,
        }
    }
}

impl Emit for Declarator {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            Declarator::Id(id) => out.node(id),
            Declarator::LvalueRef(id) => {
                out.symbol(Symbol::Ampersand);
                out.node(id);
            }
            Declarator::RvalueRef(id) => {
                out.symbol(Symbol::Ampersand);
                out.symbol(Symbol::Ampersand);
                out.node(id);
            }
            Declarator::StructuredBinding(names) => {
                out.symbol(Symbol::OpenBracket);
                out.comma_separated(names);
                out.symbol(Symbol::CloseBracket);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer {
    /// ` = expr`
    Copy(Expr),
    /// `{a, b}`
    List(Vec<Expr>),
    /// `(a, b)`
    Direct(Vec<Expr>),
}

impl Emit for Initializer {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            Initializer::Copy(expr) => {
                out.space();
                out.symbol(Symbol::Assign);
                out.space();
                out.node(expr);
            }
            Initializer::List(exprs) => {
                out.symbol(Symbol::OpenBrace);
                out.comma_separated(exprs);
                out.symbol(Symbol::CloseBrace);
            }
            Initializer::Direct(exprs) => {
                out.symbol(Symbol::OpenParen);
                out.comma_separated(exprs);
                out.symbol(Symbol::CloseParen);
            }
        }
    }
}

/// A declarator with an optional initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitDeclarator {
    pub declarator: Declarator,
    pub initializer: Option<Initializer>,
}

impl InitDeclarator {
    pub fn new(declarator: Declarator) -> Self {
        Self {
            declarator,
            initializer: None,
        }
    }

    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

impl From<Declarator> for InitDeclarator {
    fn from(declarator: Declarator) -> Self {
        Self::new(declarator)
    }
}

impl Emit for InitDeclarator {
    fn emit_to(&self, out: &mut TokenStream) {
        out.node(&self.declarator);
        out.optional(self.initializer.as_ref());
    }
}

/// `specifiers declarator[, declarator];`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleDeclaration {
    pub specifiers: DeclSpecifierSeq,
    pub declarators: Vec<InitDeclarator>,
}

impl SimpleDeclaration {
    pub fn new(specifiers: DeclSpecifierSeq, declarator: impl Into<InitDeclarator>) -> Self {
        Self {
            specifiers,
            declarators: vec![declarator.into()],
        }
    }
}

impl Emit for SimpleDeclaration {
    fn emit_to(&self, out: &mut TokenStream) {
        out.node(&self.specifiers);
        if !self.specifiers.is_empty() && !self.declarators.is_empty() {
            out.space();
        }
        out.comma_separated(&self.declarators);
        out.symbol(Symbol::Semicolon);
    }
}

/// A function parameter: `wire::WLSocket &sock`, `wire::wire_object_id_t id_ = 0x0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub specifiers: DeclSpecifierSeq,
    pub declarator: Declarator,
    pub default: Option<Expr>,
}

impl Parameter {
    pub fn new(specifiers: DeclSpecifierSeq, declarator: Declarator) -> Self {
        Self {
            specifiers,
            declarator,
            default: None,
        }
    }

    pub fn with_default(mut self, default: Expr) -> Self {
        self.default = Some(default);
        self
    }
}

impl Emit for Parameter {
    fn emit_to(&self, out: &mut TokenStream) {
        out.node(&self.specifiers);
        if !self.specifiers.is_empty() {
            out.space();
        }
        out.node(&self.declarator);
        if let Some(default) = &self.default {
            out.space();
            out.symbol(Symbol::Assign);
            out.space();
            out.node(default);
        }
    }
}

/// Ordered, comma-separated parameters including the surrounding parentheses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterList(pub Vec<Parameter>);

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, parameter: Parameter) {
        self.0.push(parameter);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }
}

impl From<Vec<Parameter>> for ParameterList {
    fn from(parameters: Vec<Parameter>) -> Self {
        Self(parameters)
    }
}

impl Emit for ParameterList {
    fn emit_to(&self, out: &mut TokenStream) {
        out.symbol(Symbol::OpenParen);
        out.comma_separated(&self.0);
        out.symbol(Symbol::CloseParen);
    }
}
