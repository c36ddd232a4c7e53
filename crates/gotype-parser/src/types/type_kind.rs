//! Shape of a type expression, keyed by tree-sitter node kind.

use serde::{Deserialize, Serialize};

/// The syntactic shape of a type expression.
///
/// Only the shape is recorded; named types are never resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// `int`, `error`, `Config`
    Named,
    /// `pkg.Type`
    Qualified,
    Pointer,
    Slice,
    Array,
    Map,
    Channel,
    Function,
    Struct,
    Interface,
    /// `List[T]`
    Generic,
    Parenthesized,
    /// Any node kind not listed above.
    Other,
}

impl TypeKind {
    /// Classify a type expression node by its tree-sitter kind.
    #[must_use]
    pub fn from_node_kind(kind: &str) -> Self {
        match kind {
            "type_identifier" => Self::Named,
            "qualified_type" => Self::Qualified,
            "pointer_type" => Self::Pointer,
            "slice_type" => Self::Slice,
            "array_type" | "implicit_length_array_type" => Self::Array,
            "map_type" => Self::Map,
            "channel_type" => Self::Channel,
            "function_type" => Self::Function,
            "struct_type" => Self::Struct,
            "interface_type" => Self::Interface,
            "generic_type" => Self::Generic,
            "parenthesized_type" => Self::Parenthesized,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Named => "named",
            Self::Qualified => "qualified",
            Self::Pointer => "pointer",
            Self::Slice => "slice",
            Self::Array => "array",
            Self::Map => "map",
            Self::Channel => "channel",
            Self::Function => "function",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Generic => "generic",
            Self::Parenthesized => "parenthesized",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}
