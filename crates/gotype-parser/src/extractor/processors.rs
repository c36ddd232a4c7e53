use std::fmt;
use std::sync::Arc;

use crate::parser::GoNode;
use crate::source::Snippet;
use crate::types::{Field, Method, Param, Type, TypeKind, TypeShape};

use super::helpers::{child_text, lead_comments};

/// A top-level `type` declaration after classification.
pub(crate) enum Declaration<'r> {
    Record {
        decl: GoNode<'r>,
        name: String,
        body: GoNode<'r>,
    },
    Contract {
        decl: GoNode<'r>,
        name: String,
        body: GoNode<'r>,
    },
    Skipped {
        line: usize,
        reason: SkipReason,
    },
}

/// Why a `type` declaration produced no descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SkipReason {
    /// `type ( A ...; B ... )` or an empty `type ()`.
    Grouped(usize),
    /// `type A = B`
    Alias,
    /// Recovery left the `type_spec` without a name or body.
    Incomplete,
    /// Neither a struct nor an interface body.
    Body(TypeKind),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grouped(n) => write!(f, "grouped declaration with {n} specs"),
            Self::Alias => f.write_str("type alias"),
            Self::Incomplete => f.write_str("incomplete type spec"),
            Self::Body(kind) => write!(f, "unsupported {kind} body"),
        }
    }
}

// ── Pass 1: classification ────────────────────────────────────────

/// Classify a top-level node. Returns `None` for anything but `type_declaration`.
pub(crate) fn classify(node: GoNode<'_>) -> Option<Declaration<'_>> {
    if node.kind().as_ref() != "type_declaration" {
        return None;
    }
    let line = node.start_pos().line() + 1;

    let mut specs: Vec<_> = node
        .children()
        .filter(|c| matches!(c.kind().as_ref(), "type_spec" | "type_alias"))
        .collect();
    if specs.len() != 1 {
        return Some(Declaration::Skipped {
            line,
            reason: SkipReason::Grouped(specs.len()),
        });
    }
    let spec = specs.pop()?;

    if spec.kind().as_ref() == "type_alias" {
        return Some(Declaration::Skipped {
            line,
            reason: SkipReason::Alias,
        });
    }

    let (Some(name), Some(body)) = (child_text(&spec, "type_identifier"), spec.field("type"))
    else {
        return Some(Declaration::Skipped {
            line,
            reason: SkipReason::Incomplete,
        });
    };

    let declaration = match TypeKind::from_node_kind(&body.kind()) {
        TypeKind::Struct => Declaration::Record {
            decl: node,
            name,
            body,
        },
        TypeKind::Interface => Declaration::Contract {
            decl: node,
            name,
            body,
        },
        other => Declaration::Skipped {
            line,
            reason: SkipReason::Body(other),
        },
    };
    Some(declaration)
}

// ── Pass 2: descriptors ───────────────────────────────────────────

/// Build the descriptor for a struct or interface declaration.
pub(crate) fn materialize(declaration: Declaration<'_>, source: &Arc<str>) -> Option<Type> {
    let (decl, name, shape) = match declaration {
        Declaration::Record { decl, name, body } => {
            let fields = struct_fields(&body, source);
            (decl, name, TypeShape::Record(fields))
        }
        Declaration::Contract { decl, name, body } => {
            let methods = interface_methods(&body, source);
            (decl, name, TypeShape::Contract(methods))
        }
        Declaration::Skipped { .. } => return None,
    };

    Some(Type {
        name,
        docs: lead_comments(&decl, source),
        shape,
        start_line: decl.start_pos().line() as u32 + 1,
        end_line: decl.end_pos().line() as u32 + 1,
    })
}

/// Named fields of a `struct_type`, in declaration order.
///
/// Embedded fields (`Config`, `*Logger`, `pkg.Base`) have no name and are
/// left out. `X, Y int` yields one field named `X`.
fn struct_fields(node: &GoNode<'_>, source: &Arc<str>) -> Vec<Field> {
    let mut fields = Vec::new();
    for child in node.children() {
        if child.kind().as_ref() != "field_declaration_list" {
            continue;
        }
        for decl in child.children() {
            if decl.kind().as_ref() != "field_declaration" {
                continue;
            }
            let Some(name) = child_text(&decl, "field_identifier") else {
                continue;
            };
            let Some(ty) = decl.field("type") else {
                continue;
            };
            let tag = decl
                .children()
                .find(|c| {
                    matches!(
                        c.kind().as_ref(),
                        "raw_string_literal" | "interpreted_string_literal"
                    )
                })
                .map(|t| Snippet::new(source, t.range()));

            fields.push(Field {
                name,
                kind: TypeKind::from_node_kind(&ty.kind()),
                ty: Snippet::new(source, ty.range()),
                tag,
            });
        }
    }
    fields
}

/// Method signatures of an `interface_type`, in declaration order.
///
/// Embedded interfaces and type-set elements are not methods and are skipped.
fn interface_methods(node: &GoNode<'_>, source: &Arc<str>) -> Vec<Method> {
    let mut methods = Vec::new();
    for child in node.children() {
        if !matches!(child.kind().as_ref(), "method_elem" | "method_spec") {
            continue;
        }
        let Some(name) = child_text(&child, "field_identifier") else {
            continue;
        };
        methods.push(build_method(&child, name, source));
    }
    methods
}

fn build_method(node: &GoNode<'_>, name: String, source: &Arc<str>) -> Method {
    // Without a parameter list the signature is unusable; report it empty.
    let Some(parameters) = node
        .field("parameters")
        .filter(|p| p.kind().as_ref() == "parameter_list")
    else {
        return Method {
            name,
            params: Vec::new(),
            results: Vec::new(),
        };
    };

    let results = match node.field("result") {
        Some(result) if result.kind().as_ref() == "parameter_list" => {
            param_list(&result, source)
        }
        // Bare result type: `Name() string`
        Some(result) => vec![Param {
            name: None,
            kind: TypeKind::from_node_kind(&result.kind()),
            ty: Snippet::new(source, result.range()),
            variadic: false,
        }],
        None => Vec::new(),
    };

    Method {
        name,
        params: param_list(&parameters, source),
        results,
    }
}

/// Entries of a `parameter_list`, one per declaration.
///
/// `(a, b int)` is a single entry named `a`, matching how the list is
/// written rather than how many values it binds.
fn param_list(node: &GoNode<'_>, source: &Arc<str>) -> Vec<Param> {
    node.children()
        .filter_map(|decl| {
            let variadic = match decl.kind().as_ref() {
                "parameter_declaration" => false,
                "variadic_parameter_declaration" => true,
                _ => return None,
            };
            let ty = decl.field("type")?;
            Some(Param {
                name: child_text(&decl, "identifier"),
                kind: TypeKind::from_node_kind(&ty.kind()),
                ty: Snippet::new(source, ty.range()),
                variadic,
            })
        })
        .collect()
}
