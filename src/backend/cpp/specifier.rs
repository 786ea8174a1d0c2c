//! Declaration specifiers: storage class, cv-qualifiers, `virtual`, and type names.

use super::emit::{Emit, TokenStream};
use super::ident::TypeId;
use super::tokens::{Keyword, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
    Static,
    Extern,
    Constexpr,
    Const,
    Volatile,
    Virtual,
    Type(TypeId),
}

impl Emit for Specifier {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            Specifier::Static => out.keyword(Keyword::Static),
            Specifier::Extern => out.keyword(Keyword::Extern),
            Specifier::Constexpr => out.keyword(Keyword::Constexpr),
            Specifier::Const => out.keyword(Keyword::Const),
            Specifier::Volatile => out.keyword(Keyword::Volatile),
            Specifier::Virtual => out.keyword(Keyword::Virtual),
            Specifier::Type(ty) => out.node(ty),
        }
    }
}

impl From<TypeId> for Specifier {
    fn from(ty: TypeId) -> Self {
        Specifier::Type(ty)
    }
}

/// Space-separated specifiers in declaration order: `static constexpr wire::wire_op_t`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclSpecifierSeq(pub Vec<Specifier>);

impl DeclSpecifierSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence holding only a type name.
    pub fn of_type(ty: impl Into<TypeId>) -> Self {
        Self(vec![Specifier::Type(ty.into())])
    }

    pub fn with(mut self, specifier: Specifier) -> Self {
        self.0.push(specifier);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Specifier>> for DeclSpecifierSeq {
    fn from(specifiers: Vec<Specifier>) -> Self {
        Self(specifiers)
    }
}

impl Emit for DeclSpecifierSeq {
    fn emit_to(&self, out: &mut TokenStream) {
        out.separated(&self.0, &[Symbol::Space]);
    }
}

/// Trailing cv-qualifiers on a member function declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CvQualifier {
    pub is_const: bool,
    pub is_volatile: bool,
}

impl CvQualifier {
    pub const NONE: CvQualifier = CvQualifier {
        is_const: false,
        is_volatile: false,
    };

    pub fn is_empty(self) -> bool {
        !self.is_const && !self.is_volatile
    }
}

impl Emit for CvQualifier {
    fn emit_to(&self, out: &mut TokenStream) {
        if self.is_const {
            out.space();
            out.keyword(Keyword::Const);
        }
        if self.is_volatile {
            out.space();
            out.keyword(Keyword::Volatile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::cpp::ident::Id;

    #[test]
    fn test_specifier_sequence_spacing() {
        let seq = DeclSpecifierSeq::new()
            .with(Specifier::Static)
            .with(Specifier::Constexpr)
            .with(Specifier::Type(TypeId::new(Id::from_path("wire::wire_op_t"))));
        assert_eq!(seq.emit().to_plain_string(), "static constexpr wire::wire_op_t");
    }

    #[test]
    fn test_empty_sequence() {
        assert!(DeclSpecifierSeq::new().emit().is_empty());
    }

    #[test]
    fn test_cv_qualifier() {
        assert!(CvQualifier::NONE.emit().is_empty());
        let cv = CvQualifier {
            is_const: true,
            is_volatile: true,
        };
        assert_eq!(cv.emit().to_plain_string(), " const volatile");
    }
}
