use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Types(args) => commands::types::handle(args, flags),
        Commands::Fields(args) => commands::fields::handle(args, flags),
        Commands::Methods(args) => commands::methods::handle(args, flags),
    }
}
