use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TypesArgs;
use crate::commands::shared::{TypeView, load_types};
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct TypesResponse {
    pub file: String,
    pub types: Vec<TypeView>,
}

/// Handle `gotype types`.
pub fn handle(args: &TypesArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&build(args, flags)?, flags.format)
}

fn build(args: &TypesArgs, flags: &GlobalFlags) -> anyhow::Result<TypesResponse> {
    let types = load_types(&args.file, flags)?;
    Ok(TypesResponse {
        file: args.file.display().to_string(),
        types: types.iter().map(TypeView::from).collect(),
    })
}
