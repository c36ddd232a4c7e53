use anyhow::bail;
use gotype_parser::List;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FieldsArgs;
use crate::commands::shared::{FieldView, find_type, load_types};
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct FieldsResponse {
    #[serde(rename = "type")]
    pub type_name: String,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Serialize)]
pub struct TagValues {
    pub name: String,
    pub values: List,
}

#[derive(Debug, Serialize)]
pub struct TagResponse {
    #[serde(rename = "type")]
    pub type_name: String,
    pub key: String,
    pub fields: Vec<TagValues>,
}

/// Handle `gotype fields`.
pub fn handle(args: &FieldsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    match &args.tag {
        Some(key) => output(&build_tag(args, key, flags)?, flags.format),
        None => output(&build(args, flags)?, flags.format),
    }
}

fn build(args: &FieldsArgs, flags: &GlobalFlags) -> anyhow::Result<FieldsResponse> {
    let types = load_types(&args.file, flags)?;
    let ty = find_type(&types, &args.type_name, &args.file)?;
    if ty.is_interface() {
        bail!(
            "'{}' is an interface; use `gotype methods` instead",
            ty.name()
        );
    }
    Ok(FieldsResponse {
        type_name: ty.name().to_string(),
        fields: ty.fields().iter().map(FieldView::from).collect(),
    })
}

fn build_tag(args: &FieldsArgs, key: &str, flags: &GlobalFlags) -> anyhow::Result<TagResponse> {
    let types = load_types(&args.file, flags)?;
    let ty = find_type(&types, &args.type_name, &args.file)?;
    if ty.is_interface() {
        bail!("'{}' is an interface and has no tagged fields", ty.name());
    }
    Ok(TagResponse {
        type_name: ty.name().to_string(),
        key: key.to_string(),
        fields: ty
            .fields()
            .iter()
            .map(|field| TagValues {
                name: field.name().to_string(),
                values: field.tag_value(key),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::shared::test_support::{fixture, flags};

    fn args(type_name: &str, tag: Option<&str>) -> FieldsArgs {
        FieldsArgs {
            file: fixture("types.go"),
            type_name: type_name.to_string(),
            tag: tag.map(str::to_string),
        }
    }

    #[test]
    fn lists_fields_with_tags() {
        let response = build(&args("TypeA", None), &flags()).expect("fields");
        assert_eq!(response.type_name, "TypeA");
        assert_eq!(response.fields.len(), 2);
        assert_eq!(response.fields[0].name, "FieldA");
        assert_eq!(response.fields[0].type_name, "int");
        assert_eq!(response.fields[1].tags, [r#"tag:"value,option""#]);
    }

    #[test]
    fn tag_key_reports_values_per_field() {
        let response = build_tag(&args("TypeA", Some("tag")), "tag", &flags()).expect("tag");
        assert_eq!(response.key, "tag");
        assert_eq!(response.fields[0].values, ["value", "option"]);
        assert_eq!(response.fields[1].values, ["value", "option"]);
    }

    #[test]
    fn absent_tag_key_is_empty() {
        let response = build_tag(&args("TypeA", Some("yaml")), "yaml", &flags()).expect("tag");
        assert!(response.fields.iter().all(|f| f.values.is_empty()));
    }

    #[test]
    fn interface_is_rejected() {
        let err = build(&args("InterfaceA", None), &flags()).expect_err("interface");
        assert!(err.to_string().contains("interface"), "error: {err}");
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(build(&args("Missing", None), &flags()).is_err());
    }
}
