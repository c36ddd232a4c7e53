use crate::list::List;

use super::{Field, Method};

/// What a type declaration's body turned out to be.
///
/// Decided once during extraction; accessors never re-inspect the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// `type T struct { ... }`
    Record(Vec<Field>),
    /// `type T interface { ... }`
    Contract(Vec<Method>),
}

/// A top-level, single-spec type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub(crate) name: String,
    pub(crate) docs: List,
    pub(crate) shape: TypeShape,
    pub(crate) start_line: u32,
    pub(crate) end_line: u32,
}

impl Type {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lead comment lines, verbatim including `//` or `/* */` markers.
    #[must_use]
    pub const fn docs(&self) -> &List {
        &self.docs
    }

    #[must_use]
    pub const fn shape(&self) -> &TypeShape {
        &self.shape
    }

    /// `true` for struct types.
    #[must_use]
    pub const fn is_concrete(&self) -> bool {
        matches!(self.shape, TypeShape::Record(_))
    }

    /// `true` for interface types.
    #[must_use]
    pub const fn is_interface(&self) -> bool {
        matches!(self.shape, TypeShape::Contract(_))
    }

    /// 1-based line of the `type` keyword.
    #[must_use]
    pub const fn start_line(&self) -> u32 {
        self.start_line
    }

    #[must_use]
    pub const fn end_line(&self) -> u32 {
        self.end_line
    }

    /// Struct fields in declaration order; empty for interfaces.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        match &self.shape {
            TypeShape::Record(fields) => fields,
            TypeShape::Contract(_) => &[],
        }
    }

    #[must_use]
    pub fn field_names(&self) -> List {
        self.fields().iter().map(Field::name).collect()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.name() == name)
    }

    /// Interface methods in declaration order; empty for structs.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        match &self.shape {
            TypeShape::Contract(methods) => methods,
            TypeShape::Record(_) => &[],
        }
    }

    #[must_use]
    pub fn method_names(&self) -> List {
        self.methods().iter().map(Method::name).collect()
    }

    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods().iter().find(|m| m.name() == name)
    }
}
