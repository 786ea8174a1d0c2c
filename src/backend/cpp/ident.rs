//! Identifiers and type names.

use super::emit::{Emit, TokenStream};
use super::tokens::Symbol;

/// A bare name such as `sock` or `wl_display`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnqualifiedId(String);

impl UnqualifiedId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UnqualifiedId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for UnqualifiedId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Emit for UnqualifiedId {
    fn emit_to(&self, out: &mut TokenStream) {
        out.text(self.0.as_str());
    }
}

/// `prefix::id`. The prefix is fixed at construction and owned by this identifier alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedId {
    prefix: Box<Id>,
    id: UnqualifiedId,
}

impl QualifiedId {
    pub fn new(prefix: impl Into<Id>, id: impl Into<UnqualifiedId>) -> Self {
        Self {
            prefix: Box::new(prefix.into()),
            id: id.into(),
        }
    }

    pub fn prefix(&self) -> &Id {
        &self.prefix
    }

    pub fn id(&self) -> &UnqualifiedId {
        &self.id
    }
}

impl Emit for QualifiedId {
    fn emit_to(&self, out: &mut TokenStream) {
        out.node(self.prefix.as_ref());
        out.symbol(Symbol::ScopeResolution);
        out.node(&self.id);
    }
}

/// Any identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Id {
    Unqualified(UnqualifiedId),
    Qualified(QualifiedId),
}

impl Id {
    /// Build an identifier from a `::`-separated path (`"wire::wire_uint_t"`).
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.split("::");
        // `split` always yields at least one segment
        let mut id = Id::Unqualified(UnqualifiedId::new(segments.next().unwrap_or_default()));
        for segment in segments {
            id = Id::Qualified(QualifiedId::new(id, segment));
        }
        id
    }

    /// The rightmost name.
    pub fn last(&self) -> &UnqualifiedId {
        match self {
            Id::Unqualified(id) => id,
            Id::Qualified(qualified) => qualified.id(),
        }
    }
}

impl From<UnqualifiedId> for Id {
    fn from(id: UnqualifiedId) -> Self {
        Id::Unqualified(id)
    }
}

impl From<QualifiedId> for Id {
    fn from(id: QualifiedId) -> Self {
        Id::Qualified(id)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Id::Unqualified(UnqualifiedId::new(name))
    }
}

impl From<String> for Id {
    fn from(name: String) -> Self {
        Id::Unqualified(UnqualifiedId::from(name))
    }
}

impl Emit for Id {
    fn emit_to(&self, out: &mut TokenStream) {
        match self {
            Id::Unqualified(id) => id.emit_to(out),
            Id::Qualified(id) => id.emit_to(out),
        }
    }
}

/// A type name with optional template arguments: `callback_t<wire::wire_uint_t>`.
///
/// `Some(vec![])` renders as `name<>`, `None` renders as `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeId {
    pub name: Id,
    pub template_args: Option<Vec<TypeId>>,
}

impl TypeId {
    pub fn new(name: impl Into<Id>) -> Self {
        Self {
            name: name.into(),
            template_args: None,
        }
    }

    pub fn with_template_args(mut self, args: Vec<TypeId>) -> Self {
        self.template_args = Some(args);
        self
    }
}

impl From<Id> for TypeId {
    fn from(name: Id) -> Self {
        Self::new(name)
    }
}

impl Emit for TypeId {
    fn emit_to(&self, out: &mut TokenStream) {
        out.node(&self.name);
        if let Some(args) = &self.template_args {
            out.node(&TemplateArgs(args));
        }
    }
}

/// `<a, b>` - shared by template type names and templated calls.
pub(crate) struct TemplateArgs<'a>(pub &'a [TypeId]);

impl Emit for TemplateArgs<'_> {
    fn emit_to(&self, out: &mut TokenStream) {
        out.symbol(Symbol::OpenAngle);
        out.comma_separated(self.0);
        out.symbol(Symbol::CloseAngle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unqualified() {
        assert_eq!(UnqualifiedId::new("sock").emit().to_plain_string(), "sock");
    }

    #[test]
    fn test_qualified_nesting() {
        let id = Id::from_path("waylandcpp::wire::WLSocket");
        assert_eq!(id.emit().to_plain_string(), "waylandcpp::wire::WLSocket");
        assert_eq!(id.last().as_str(), "WLSocket");
    }

    #[test]
    fn test_qualified_prefix_is_kept() {
        let id = QualifiedId::new("wire", "wire_fd_t");
        assert_eq!(id.prefix(), &Id::from("wire"));
        assert_eq!(id.id().as_str(), "wire_fd_t");
    }

    #[test]
    fn test_from_path_without_scope() {
        assert_eq!(Id::from_path("uint32_t"), Id::from("uint32_t"));
    }

    #[test]
    fn test_type_id_without_args() {
        assert_eq!(TypeId::new("void").emit().to_plain_string(), "void");
    }

    #[test]
    fn test_type_id_with_empty_args() {
        let ty = TypeId::new("callback_t").with_template_args(Vec::new());
        assert_eq!(ty.emit().to_plain_string(), "callback_t<>");
    }

    #[test]
    fn test_type_id_with_args() {
        let ty = TypeId::new("callback_t").with_template_args(vec![
            TypeId::new(Id::from_path("wire::wire_int_t")),
            TypeId::new(Id::from_path("wire::wire_uint_t")),
        ]);
        assert_eq!(
            ty.emit().to_plain_string(),
            "callback_t<wire::wire_int_t, wire::wire_uint_t>"
        );
    }
}
