pub use gotype_config::OutputFormat;

/// Global flags after merging the command line with configuration.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}
