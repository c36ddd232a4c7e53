//! Loading helpers and serializable views shared by the subcommands.

use std::path::Path;

use anyhow::{Context, bail};
use gotype_parser::{Field, List, Method, Param, ParseOptions, Type, TypeKind};
use serde::Serialize;

use crate::cli::GlobalFlags;

/// Parse `path` and return its supported type declarations.
pub fn load_types(path: &Path, flags: &GlobalFlags) -> anyhow::Result<Vec<Type>> {
    if !gotype_parser::is_go_file(path) {
        bail!(
            "'{}' is not a Go source file (expected a .go extension)",
            path.display()
        );
    }
    let options = ParseOptions::verbose(flags.verbose);
    gotype_parser::parse_file_with(path, &options)
        .with_context(|| format!("failed to parse '{}'", path.display()))
}

/// Find a declaration by exact name.
pub fn find_type<'a>(types: &'a [Type], name: &str, path: &Path) -> anyhow::Result<&'a Type> {
    match types.iter().find(|t| t.name() == name) {
        Some(ty) => Ok(ty),
        None => bail!(
            "no struct or interface named '{name}' in '{}'",
            path.display()
        ),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Struct,
    Interface,
}

#[derive(Debug, Serialize)]
pub struct FieldView {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub kind: TypeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub tags: List,
}

impl From<&Field> for FieldView {
    fn from(field: &Field) -> Self {
        Self {
            name: field.name().to_string(),
            type_name: field.type_name().to_string(),
            kind: field.type_kind(),
            tag: field.tag().map(str::to_string),
            tags: field.tags(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParamView {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub kind: TypeKind,
    pub variadic: bool,
}

impl From<&Param> for ParamView {
    fn from(param: &Param) -> Self {
        Self {
            name: param.name().to_string(),
            type_name: param.type_name().into_owned(),
            kind: param.type_kind(),
            variadic: param.is_variadic(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MethodView {
    pub name: String,
    pub params: Vec<ParamView>,
    pub results: Vec<ParamView>,
}

impl From<&Method> for MethodView {
    fn from(method: &Method) -> Self {
        Self {
            name: method.name().to_string(),
            params: method.params().iter().map(ParamView::from).collect(),
            results: method.results().iter().map(ParamView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TypeView {
    pub name: String,
    pub mode: Mode,
    pub docs: List,
    pub start_line: u32,
    pub end_line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<MethodView>>,
}

impl From<&Type> for TypeView {
    fn from(ty: &Type) -> Self {
        let (mode, fields, methods) = if ty.is_interface() {
            (
                Mode::Interface,
                None,
                Some(ty.methods().iter().map(MethodView::from).collect()),
            )
        } else {
            (
                Mode::Struct,
                Some(ty.fields().iter().map(FieldView::from).collect()),
                None,
            )
        };
        Self {
            name: ty.name().to_string(),
            mode,
            docs: ty.docs().clone(),
            start_line: ty.start_line(),
            end_line: ty.end_line(),
            fields,
            methods,
        }
    }
}
