use std::borrow::Cow;

use crate::list::List;
use crate::source::Snippet;

use super::TypeKind;

/// A method signature declared in an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub(crate) name: String,
    pub(crate) params: Vec<Param>,
    pub(crate) results: Vec<Param>,
}

impl Method {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in declaration order. Empty for `()` or a malformed signature.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Results in declaration order. A bare result type is a single unnamed entry.
    #[must_use]
    pub fn results(&self) -> &[Param] {
        &self.results
    }

    #[must_use]
    pub fn param_names(&self) -> List {
        self.params.iter().map(Param::name).collect()
    }

    #[must_use]
    pub fn param_types(&self) -> List {
        self.params.iter().map(Param::type_name).collect()
    }

    #[must_use]
    pub fn result_types(&self) -> List {
        self.results.iter().map(Param::type_name).collect()
    }
}

/// One entry of a parameter or result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub(crate) name: Option<String>,
    pub(crate) ty: Snippet,
    pub(crate) kind: TypeKind,
    pub(crate) variadic: bool,
}

impl Param {
    /// Declared identifier, or `""` for a type-only entry like `(string)`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Textual type. Variadic parameters render as `...` plus the element type.
    #[must_use]
    pub fn type_name(&self) -> Cow<'_, str> {
        if self.variadic {
            Cow::Owned(format!("...{}", self.ty))
        } else {
            Cow::Borrowed(self.ty.as_str())
        }
    }

    /// Shape of the (element) type.
    #[must_use]
    pub const fn type_kind(&self) -> TypeKind {
        self.kind
    }

    #[must_use]
    pub const fn is_variadic(&self) -> bool {
        self.variadic
    }
}
