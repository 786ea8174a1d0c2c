//! Function definitions (free functions, methods, constructors).

use super::declarator::{Declarator, Initializer, ParameterList};
use super::emit::{Emit, TokenStream};
use super::expr::Expr;
use super::ident::Id;
use super::specifier::{CvQualifier, DeclSpecifierSeq};
use super::stmt::{CompoundStatement, Statement};
use super::tokens::Symbol;

/// `declarator(parameters) cv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub declarator: Declarator,
    pub parameters: ParameterList,
    pub cv: CvQualifier,
}

impl Emit for FunctionDeclaration {
    fn emit_to(&self, out: &mut TokenStream) {
        out.node(&self.declarator);
        out.node(&self.parameters);
        out.node(&self.cv);
    }
}

/// One entry of a constructor initializer list: `member(args)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInitializer {
    pub member: Id,
    pub initializer: Initializer,
}

impl MemberInitializer {
    /// `member(value)`
    pub fn direct(member: impl Into<Id>, value: Expr) -> Self {
        Self {
            member: member.into(),
            initializer: Initializer::Direct(vec![value]),
        }
    }
}

impl Emit for MemberInitializer {
    fn emit_to(&self, out: &mut TokenStream) {
        out.node(&self.member);
        out.node(&self.initializer);
    }
}

/// `[: initializers ]{ statements }`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionBody {
    pub initializers: Vec<MemberInitializer>,
    pub statements: CompoundStatement,
}

impl Emit for FunctionBody {
    fn emit_to(&self, out: &mut TokenStream) {
        if !self.initializers.is_empty() {
            out.symbol(Symbol::Colon);
            out.space();
            out.comma_separated(&self.initializers);
            out.space();
        }
        out.node(&self.statements);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub specifiers: Option<DeclSpecifierSeq>,
    pub declaration: FunctionDeclaration,
    pub body: FunctionBody,
}

impl Function {
    /// A function returning `specifiers` (use `None` for constructors).
    pub fn new(specifiers: Option<DeclSpecifierSeq>, name: impl Into<Id>, parameters: ParameterList) -> Self {
        Self {
            specifiers,
            declaration: FunctionDeclaration {
                declarator: Declarator::Id(name.into()),
                parameters,
                cv: CvQualifier::NONE,
            },
            body: FunctionBody::default(),
        }
    }

    pub fn with_initializers(mut self, initializers: Vec<MemberInitializer>) -> Self {
        self.body.initializers = initializers;
        self
    }

    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.body.statements.push(statement);
        self
    }

    pub fn with_statements(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        for statement in statements {
            self.body.statements.push(statement);
        }
        self
    }

    pub fn with_cv(mut self, cv: CvQualifier) -> Self {
        self.declaration.cv = cv;
        self
    }
}

impl Emit for Function {
    fn emit_to(&self, out: &mut TokenStream) {
        if let Some(specifiers) = self.specifiers.as_ref().filter(|s| !s.is_empty()) {
            out.node(specifiers);
            out.space();
        }
        out.node(&self.declaration);
        out.space();
        out.node(&self.body);
    }
}
