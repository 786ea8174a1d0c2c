//! Class definitions and their member specification.

use super::declarator::SimpleDeclaration;
use super::emit::{Emit, TokenStream};
use super::enums::EnumSpecifier;
use super::function::Function;
use super::ident::{Id, TypeId, UnqualifiedId};
use super::tokens::{Keyword, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKey {
    Class,
    Struct,
    Union,
}

impl Emit for ClassKey {
    fn emit_to(&self, out: &mut TokenStream) {
        out.keyword(match self {
            ClassKey::Class => Keyword::Class,
            ClassKey::Struct => Keyword::Struct,
            ClassKey::Union => Keyword::Union,
        });
    }
}

/// Member access, also used as the inheritance model of a base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
    Private,
}

impl Access {
    fn keyword(self) -> Keyword {
        match self {
            Access::Public => Keyword::Public,
            Access::Protected => Keyword::Protected,
            Access::Private => Keyword::Private,
        }
    }
}

/// `public Base`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSpecifier {
    pub access: Access,
    pub name: Id,
}

impl Emit for BaseSpecifier {
    fn emit_to(&self, out: &mut TokenStream) {
        out.keyword(self.access.keyword());
        out.space();
        out.node(&self.name);
    }
}

/// `using name = type;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: UnqualifiedId,
    pub ty: TypeId,
}

impl Emit for TypeAlias {
    fn emit_to(&self, out: &mut TokenStream) {
        out.keyword(Keyword::Using);
        out.space();
        out.node(&self.name);
        out.space();
        out.symbol(Symbol::Assign);
        out.space();
        out.node(&self.ty);
        out.symbol(Symbol::Semicolon);
    }
}

/// `// text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(pub String);

impl Emit for Comment {
    fn emit_to(&self, out: &mut TokenStream) {
        out.symbol(Symbol::Solidus);
        out.symbol(Symbol::Solidus);
        out.space();
        out.text(self.0.as_str());
    }
}

/// One element of a member specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// `public:` and friends
    Access(Access),
    Alias(TypeAlias),
    Data(SimpleDeclaration),
    Method(Function),
    Enum(EnumSpecifier),
    Comment(Comment),
}

impl Emit for Member {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            Member::Access(access) => {
                out.keyword(access.keyword());
                out.symbol(Symbol::Colon);
            }
            Member::Alias(alias) => alias.emit_to(out),
            Member::Data(data) => data.emit_to(out),
            Member::Method(method) => method.emit_to(out),
            Member::Enum(e) => e.emit_to(out),
            Member::Comment(comment) => comment.emit_to(out),
        }
    }
}

/// `class name[ : bases] { members };`
///
/// Members keep append order; nothing is sorted or merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub key: ClassKey,
    pub name: UnqualifiedId,
    pub bases: Option<Vec<BaseSpecifier>>,
    pub members: Option<Vec<Member>>,
}

impl Class {
    pub fn new(name: impl Into<UnqualifiedId>) -> Self {
        Self {
            key: ClassKey::Class,
            name: name.into(),
            bases: None,
            members: None,
        }
    }

    pub fn with_key(mut self, key: ClassKey) -> Self {
        self.key = key;
        self
    }

    pub fn with_base(mut self, access: Access, name: impl Into<Id>) -> Self {
        self.bases.get_or_insert_with(Vec::new).push(BaseSpecifier {
            access,
            name: name.into(),
        });
        self
    }

    pub fn push(&mut self, member: Member) {
        self.members.get_or_insert_with(Vec::new).push(member);
    }

    pub fn members(&self) -> &[Member] {
        self.members.as_deref().unwrap_or_default()
    }
}

impl Emit for Class {
    fn emit_to(&self, out: &mut TokenStream) {
        out.node(&self.key);
        out.space();
        out.node(&self.name);
        if let Some(bases) = self.bases.as_ref().filter(|bases| !bases.is_empty()) {
            out.space();
            out.symbol(Symbol::Colon);
            out.space();
            out.comma_separated(bases);
        }
        out.space();
        out.symbol(Symbol::OpenBrace);
        out.newline();
        for member in self.members() {
            out.node(member);
            out.newline();
        }
        out.symbol(Symbol::CloseBrace);
        out.symbol(Symbol::Semicolon);
    }
}
