use clap::Parser;
use gotype_config::GotypeConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `gotype` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gotype",
    version,
    about = "gotype - inspect struct and interface declarations in Go source"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to `output.format` from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging of every declaration)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Merge command-line flags over the loaded configuration.
    #[must_use]
    pub fn global_flags(&self, config: &GotypeConfig) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(config.output.format),
            quiet: self.quiet,
            verbose: self.verbose || config.parser.verbose,
        }
    }
}
