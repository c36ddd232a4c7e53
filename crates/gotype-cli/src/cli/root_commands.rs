use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every struct and interface declared in a Go file.
    Types(TypesArgs),
    /// Show the fields of a struct type.
    Fields(FieldsArgs),
    /// Show the method signatures of an interface type.
    Methods(MethodsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TypesArgs {
    /// Go source file
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct FieldsArgs {
    /// Go source file
    pub file: PathBuf,
    /// Name of a struct type declared in the file
    pub type_name: String,
    /// Only report each field's values for this tag key (e.g. json)
    #[arg(short, long)]
    pub tag: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct MethodsArgs {
    /// Go source file
    pub file: PathBuf,
    /// Name of an interface type declared in the file
    pub type_name: String,
}
