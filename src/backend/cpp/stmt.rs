//! Statements.
//!
//! Block layout is carried by the tokens themselves: a compound statement emits a newline after `{` and after each
//! inner statement, and the printer derives indentation from brace depth.

use super::declarator::SimpleDeclaration;
use super::emit::{Emit, TokenStream};
use super::expr::Expr;
use super::ident::UnqualifiedId;
use super::tokens::{Keyword, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Labeled(LabeledStatement),
    /// `expr;`, or the empty statement `;`
    Expression(Option<Expr>),
    Compound(CompoundStatement),
    Selection(SelectionStatement),
    Iteration(IterationStatement),
    Jump(JumpStatement),
    Declaration(SimpleDeclaration),
}

impl Statement {
    pub fn expr(expr: Expr) -> Self {
        Statement::Expression(Some(expr))
    }

    pub fn block(statements: Vec<Statement>) -> Self {
        Statement::Compound(CompoundStatement(statements))
    }

    pub fn if_then(condition: Expr, then: Statement) -> Self {
        Statement::Selection(SelectionStatement::If {
            condition,
            then: Box::new(then),
            otherwise: None,
        })
    }

    pub fn switch(condition: Expr, body: Statement) -> Self {
        Statement::Selection(SelectionStatement::Switch {
            condition,
            body: Box::new(body),
        })
    }

    pub fn case(value: Expr, statement: Statement) -> Self {
        Statement::Labeled(LabeledStatement::new(Label::Case(value), statement))
    }

    pub fn break_() -> Self {
        Statement::Jump(JumpStatement::Break)
    }

    pub fn return_(value: Option<Expr>) -> Self {
        Statement::Jump(JumpStatement::Return(value))
    }
}

impl Emit for Statement {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            Statement::Labeled(labeled) => labeled.emit_to(out),
            Statement::Expression(expr) => {
                out.optional(expr.as_ref());
                out.symbol(Symbol::Semicolon);
            }
            Statement::Compound(compound) => compound.emit_to(out),
            Statement::Selection(selection) => selection.emit_to(out),
            Statement::Iteration(iteration) => iteration.emit_to(out),
            Statement::Jump(jump) => jump.emit_to(out),
            Statement::Declaration(declaration) => declaration.emit_to(out),
        }
    }
}

/// `{ statements }`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundStatement(pub Vec<Statement>);

impl CompoundStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.0.push(statement);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Statement>> for CompoundStatement {
    fn from(statements: Vec<Statement>) -> Self {
        Self(statements)
    }
}

impl Emit for CompoundStatement {
    fn emit_to(&self, out: &mut TokenStream) {
        out.symbol(Symbol::OpenBrace);
        if !self.0.is_empty() {
            out.newline();
        }
        for statement in &self.0 {
            out.node(statement);
            out.newline();
        }
        out.symbol(Symbol::CloseBrace);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Named(UnqualifiedId),
    Case(Expr),
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledStatement {
    pub label: Label,
    pub statement: Box<Statement>,
}

impl LabeledStatement {
    pub fn new(label: Label, statement: Statement) -> Self {
        Self {
            label,
            statement: Box::new(statement),
        }
    }
}

impl Emit for LabeledStatement {
    fn emit_to(&self, out: &mut TokenStream) {
        match &self.label {
            Label::Named(name) => out.node(name),
            Label::Case(value) => {
                out.keyword(Keyword::Case);
                out.space();
                out.node(value);
            }
            Label::Default => out.keyword(Keyword::Default),
        }
        out.symbol(Symbol::Colon);
        out.space();
        out.node(self.statement.as_ref());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionStatement {
    If {
        condition: Expr,
        then: Box<Statement>,
        otherwise: Option<Box<Statement>>,
    },
    Switch {
        condition: Expr,
        body: Box<Statement>,
    },
}

impl Emit for SelectionStatement {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            SelectionStatement::If {
                condition,
                then,
                otherwise,
            } => {
                emit_head(out, Keyword::If, condition);
                out.node(then.as_ref());
                if let Some(otherwise) = otherwise {
                    out.space();
                    out.keyword(Keyword::Else);
                    out.space();
                    out.node(otherwise.as_ref());
                }
            }
            SelectionStatement::Switch { condition, body } => {
                emit_head(out, Keyword::Switch, condition);
                out.node(body.as_ref());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationStatement {
    While {
        condition: Expr,
        body: Box<Statement>,
    },
    /// `for (init cond; step) body` - `init` supplies its own `;`
    For {
        init: Box<Statement>,
        condition: Option<Expr>,
        step: Option<Expr>,
        body: Box<Statement>,
    },
}

impl Emit for IterationStatement {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            IterationStatement::While { condition, body } => {
                emit_head(out, Keyword::While, condition);
                out.node(body.as_ref());
            }
            IterationStatement::For {
                init,
                condition,
                step,
                body,
            } => {
                out.keyword(Keyword::For);
                out.space();
                out.symbol(Symbol::OpenParen);
                out.node(init.as_ref());
                if let Some(condition) = condition {
                    out.space();
                    out.node(condition);
                }
                out.symbol(Symbol::Semicolon);
                if let Some(step) = step {
                    out.space();
                    out.node(step);
                }
                out.symbol(Symbol::CloseParen);
                out.space();
                out.node(body.as_ref());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpStatement {
    Break,
    Continue,
    Return(Option<Expr>),
}

impl Emit for JumpStatement {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            JumpStatement::Break => out.keyword(Keyword::Break),
            JumpStatement::Continue => out.keyword(Keyword::Continue),
            JumpStatement::Return(value) => {
                out.keyword(Keyword::Return);
                if let Some(value) = value {
                    out.space();
                    out.node(value);
                }
            }
        }
        out.symbol(Symbol::Semicolon);
    }
}

/// `keyword (condition) `
fn emit_head(out: &mut TokenStream, keyword: Keyword, condition: &Expr) {
    out.keyword(keyword);
    out.space();
    out.symbol(Symbol::OpenParen);
    out.node(condition);
    out.symbol(Symbol::CloseParen);
    out.space();
}
