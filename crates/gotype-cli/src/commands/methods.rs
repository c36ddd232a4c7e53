use anyhow::bail;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MethodsArgs;
use crate::commands::shared::{MethodView, find_type, load_types};
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct MethodsResponse {
    #[serde(rename = "type")]
    pub type_name: String,
    pub methods: Vec<MethodView>,
}

/// Handle `gotype methods`.
pub fn handle(args: &MethodsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&build(args, flags)?, flags.format)
}

fn build(args: &MethodsArgs, flags: &GlobalFlags) -> anyhow::Result<MethodsResponse> {
    let types = load_types(&args.file, flags)?;
    let ty = find_type(&types, &args.type_name, &args.file)?;
    if !ty.is_interface() {
        bail!("'{}' is a struct; use `gotype fields` instead", ty.name());
    }
    Ok(MethodsResponse {
        type_name: ty.name().to_string(),
        methods: ty.methods().iter().map(MethodView::from).collect(),
    })
}
