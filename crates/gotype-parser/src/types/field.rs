use crate::list::List;
use crate::source::Snippet;
use crate::tags;

use super::TypeKind;

/// A named field of a struct type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) ty: Snippet,
    pub(crate) kind: TypeKind,
    pub(crate) tag: Option<Snippet>,
}

impl Field {
    /// First declared identifier. `X, Y int` reports `X`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's type exactly as written in the source.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.ty.as_str()
    }

    #[must_use]
    pub const fn type_kind(&self) -> TypeKind {
        self.kind
    }

    /// The raw tag literal, delimiters included.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_ref().map(Snippet::as_str)
    }

    /// Whitespace-delimited tag tokens; empty when the field has no tag.
    #[must_use]
    pub fn tags(&self) -> List {
        self.tag().map(tags::tokens).unwrap_or_default()
    }

    /// Comma-separated values of tag `key`; empty when absent.
    #[must_use]
    pub fn tag_value(&self, key: &str) -> List {
        self.tag()
            .map(|blob| tags::values(blob, key))
            .unwrap_or_default()
    }
}
