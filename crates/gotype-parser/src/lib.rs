//! # gotype-parser
//!
//! ast-grep-based extraction of Go type metadata.
//!
//! For every top-level, single-spec `type` declaration in one Go file the
//! extractor recovers the name and lead comment lines, then either the
//! struct's fields (name, source type text, tag) or the interface's method
//! signatures (parameter and result names and types, variadics included).
//!
//! ```no_run
//! let types = gotype_parser::parse_file("model.go").expect("parse");
//! for ty in &types {
//!     if ty.is_concrete() {
//!         for field in ty.fields() {
//!             println!("{} {} {:?}", field.name(), field.type_name(), field.tag_value("json"));
//!         }
//!     }
//! }
//! ```
//!
//! Failures are limited to reading the file and syntax errors. Everything
//! the extractor cannot classify degrades to "absent" or an empty list.

use std::path::Path;

use tracing::debug;

pub mod error;
pub mod extractor;
pub mod list;
pub mod parser;
pub mod source;
pub mod tags;
pub mod types;

pub use error::ParserError;
pub use extractor::{ParseOptions, extract};
pub use list::List;
pub use parser::{ParsedFile, is_go_file};
pub use types::{Field, Method, Param, Type, TypeKind, TypeShape};

/// Read and extract a Go file with default options.
///
/// # Errors
/// Returns `ParserError::Io` if the file cannot be read and
/// `ParserError::Syntax` if it is not valid Go.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Type>, ParserError> {
    parse_file_with(path, &ParseOptions::default())
}

/// Read and extract a Go file.
///
/// # Errors
/// Same as [`parse_file`].
pub fn parse_file_with(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Vec<Type>, ParserError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    if options.verbose {
        debug!(path = %path.display(), bytes = source.len(), "parsing file");
    }
    parse_source(&source, options)
}

/// Extract types from in-memory Go source.
///
/// # Errors
/// Returns `ParserError::Syntax` if `source` is not valid Go.
pub fn parse_source(source: &str, options: &ParseOptions) -> Result<Vec<Type>, ParserError> {
    let file = ParsedFile::parse(source)?;
    Ok(extract(&file, options))
}
