//! Top-level structure of a header: includes, namespaces, translation unit.

use super::class::Class;
use super::declarator::SimpleDeclaration;
use super::emit::{Emit, TokenStream};
use super::function::Function;
use super::ident::Id;
use super::tokens::{Keyword, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Include {
    /// `#include <path>`
    Angle(String),
    /// `#include "path"`
    Quoted(String),
}

impl Include {
    /// Parse the written form: `<string>` or `"waylandcpp/callback.hpp"`. Anything else is treated as a quoted path.
    pub fn parse(spec: &str) -> Self {
        if let Some(path) = spec.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
            Include::Angle(path.to_string())
        } else {
            let path = spec
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or(spec);
            Include::Quoted(path.to_string())
        }
    }
}

impl Emit for Include {
    fn emit_to(&self, out: &mut TokenStream) {
        out.symbol(Symbol::Hash);
        out.text("include");
        out.space();
        match self {
            Include::Angle(path) => {
                out.symbol(Symbol::OpenAngle);
                out.text(path.as_str());
                out.symbol(Symbol::CloseAngle);
            }
            Include::Quoted(path) => {
                out.symbol(Symbol::DoubleQuote);
                out.text(path.as_str());
                out.symbol(Symbol::DoubleQuote);
            }
        }
    }
}

/// Declarations allowed at namespace scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Simple(SimpleDeclaration),
    Function(Function),
    Class(Class),
    Namespace(Namespace),
}

impl Emit for Declaration {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            Declaration::Simple(decl) => decl.emit_to(out),
            Declaration::Function(function) => function.emit_to(out),
            Declaration::Class(class) => class.emit_to(out),
            Declaration::Namespace(namespace) => namespace.emit_to(out),
        }
    }
}

/// `namespace a::b { declarations }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: Id,
    pub declarations: Vec<Declaration>,
}

impl Namespace {
    pub fn new(name: impl Into<Id>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }
}

impl Emit for Namespace {
    fn emit_to(&self, out: &mut TokenStream) {
        out.keyword(Keyword::Namespace);
        out.space();
        out.node(&self.name);
        out.space();
        out.symbol(Symbol::OpenBrace);
        out.newline();
        for declaration in &self.declarations {
            out.node(declaration);
            out.newline();
        }
        out.symbol(Symbol::CloseBrace);
    }
}

/// A whole header file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationUnit {
    pub includes: Vec<Include>,
    pub declarations: Vec<Declaration>,
}

impl Emit for TranslationUnit {
    fn emit_to(&self, out: &mut TokenStream) {
        out.symbol(Symbol::Hash);
        out.text("pragma");
        out.space();
        out.text("once");
        out.newline();
        for include in &self.includes {
            out.node(include);
            out.newline();
        }
        out.newline();
        for declaration in &self.declarations {
            out.node(declaration);
            out.newline();
        }
    }
}
