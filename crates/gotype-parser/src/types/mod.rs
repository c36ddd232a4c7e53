//! Read-only descriptors produced by extraction.

mod field;
mod method;
mod type_decl;
mod type_kind;

pub use field::Field;
pub use method::{Method, Param};
pub use type_decl::{Type, TypeShape};
pub use type_kind::TypeKind;
