//! Expressions.

use super::emit::{Emit, TokenStream};
use super::ident::{Id, TemplateArgs, TypeId};
use super::tokens::Symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A name: `sock`, `bar_op`
    Id(Id),
    /// A literal spelled verbatim: `0x0`, `42`
    Literal(String),
    /// `"text"`
    StringLiteral(String),
    /// `object.member`
    Member { object: Box<Expr>, member: Id },
    /// `callee<T...>(args...)`
    Call {
        callee: Box<Expr>,
        template_args: Option<Vec<TypeId>>,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn id(name: impl Into<Id>) -> Self {
        Expr::Id(name.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::StringLiteral(value.into())
    }

    pub fn member(self, member: impl Into<Id>) -> Self {
        Expr::Member {
            object: Box::new(self),
            member: member.into(),
        }
    }

    pub fn call(self, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(self),
            template_args: None,
            args,
        }
    }

    pub fn call_templated(self, template_args: Vec<TypeId>, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(self),
            template_args: Some(template_args),
            args,
        }
    }
}

impl Emit for Expr {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            Expr::Id(id) => out.node(id),
            Expr::Literal(value) => out.text(value.as_str()),
            Expr::StringLiteral(value) => {
                out.symbol(Symbol::DoubleQuote);
                out.text(value.as_str());
                out.symbol(Symbol::DoubleQuote);
            }
            Expr::Member { object, member } => {
                out.node(object.as_ref());
                out.symbol(Symbol::Dot);
                out.node(member);
            }
            Expr::Call {
                callee,
                template_args,
                args,
            } => {
                out.node(callee.as_ref());
                if let Some(template_args) = template_args {
                    out.node(&TemplateArgs(template_args));
                }
                out.symbol(Symbol::OpenParen);
                out.comma_separated(args);
                out.symbol(Symbol::CloseParen);
            }
        }
    }
}
