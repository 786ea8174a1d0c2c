//! C++ grammar node model
//!
//! A closed set of node kinds covering the declarations, statements and expressions that generated bindings use.
//! Each kind implements [`Emit`], which flattens it into [`Token`]s for the printer in [`crate::format`].
//!
//! ## Module Organization
//!
//! - `tokens.rs` - keywords, symbols, and the primitive [`Token`]
//! - `emit.rs` - the [`Emit`] trait and [`TokenStream`]
//! - `ident.rs` - unqualified/qualified identifiers and template type names
//! - `expr.rs` - expressions
//! - `specifier.rs` - declaration specifiers and cv-qualifiers
//! - `declarator.rs` - declarators, initializers, parameters, simple declarations
//! - `stmt.rs` - statements
//! - `function.rs` - function definitions
//! - `enums.rs` - scoped enumerations
//! - `class.rs` - classes and member specifications
//! - `unit.rs` - includes, namespaces, translation units

pub mod class;
pub mod declarator;
pub mod emit;
pub mod enums;
pub mod expr;
pub mod function;
pub mod ident;
pub mod specifier;
pub mod stmt;
pub mod tokens;
pub mod unit;

pub use class::{Access, BaseSpecifier, Class, ClassKey, Comment, Member, TypeAlias};
pub use declarator::{Declarator, InitDeclarator, Initializer, Parameter, ParameterList, SimpleDeclaration};
pub use emit::{Emit, TokenStream};
pub use enums::{EnumSpecifier, Enumerator};
pub use expr::Expr;
pub use function::{Function, FunctionBody, FunctionDeclaration, MemberInitializer};
pub use ident::{Id, QualifiedId, TypeId, UnqualifiedId};
pub use specifier::{CvQualifier, DeclSpecifierSeq, Specifier};
pub use stmt::{
    CompoundStatement, IterationStatement, JumpStatement, Label, LabeledStatement, SelectionStatement, Statement,
};
pub use tokens::{Keyword, Symbol, Token};
pub use unit::{Declaration, Include, Namespace, TranslationUnit};
