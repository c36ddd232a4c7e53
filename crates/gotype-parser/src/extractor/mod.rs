//! Go type extractor - classify first, then materialize.
//!
//! Pass 1 walks the top-level nodes once and turns every `type_declaration`
//! into a `Declaration`: a struct, an interface, or a skipped shape.
//! Pass 2 builds descriptors for the first two and drops the rest.
//!
//! Only single-spec declarations are supported. Grouped `type ( ... )` blocks
//! with several entries, aliases (`type A = B`), and definitions over any
//! other type (`type Direction int`) never produce a [`Type`].

use tracing::debug;

use crate::parser::ParsedFile;
use crate::types::Type;

mod helpers;
mod processors;

use processors::Declaration;

/// Knobs threaded into a single extraction call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emit a `debug` event per declaration (extracted or skipped).
    pub verbose: bool,
}

impl ParseOptions {
    #[must_use]
    pub const fn verbose(verbose: bool) -> Self {
        Self { verbose }
    }
}

/// Extract every supported type declaration, in source order.
///
/// Pure over `(tree, source)`: running it twice on the same file yields
/// equal descriptors.
#[must_use]
pub fn extract(file: &ParsedFile, options: &ParseOptions) -> Vec<Type> {
    let declarations: Vec<Declaration<'_>> = file
        .root()
        .children()
        .filter_map(processors::classify)
        .collect();

    let mut types = Vec::with_capacity(declarations.len());
    for declaration in declarations {
        match declaration {
            Declaration::Skipped { line, reason } => {
                if options.verbose {
                    debug!(line, %reason, "skipping type declaration");
                }
            }
            supported => {
                if let Some(ty) = processors::materialize(supported, file.source()) {
                    if options.verbose {
                        debug!(
                            name = ty.name(),
                            line = ty.start_line(),
                            interface = ty.is_interface(),
                            members = ty.fields().len() + ty.methods().len(),
                            "extracted type"
                        );
                    }
                    types.push(ty);
                }
            }
        }
    }
    types
}

#[cfg(test)]
mod tests;
