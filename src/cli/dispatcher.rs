//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::error::{FlaliasError, Result};
use crate::project_identity;
use crate::ui as output;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Some(Command::Add { app, all }) => commands::add::run(commands::add::AddOptions {
            app: app.clone(),
            all: *all,
            file: args.global.file.clone(),
        }),

        Some(Command::Remove { alias, all, backup }) => {
            commands::remove::run(commands::remove::RemoveOptions {
                alias: alias.clone(),
                all: *all,
                backup: *backup,
                file: args.global.file.clone(),
            })
        }

        Some(Command::List { format }) => commands::list::run(commands::list::ListOptions {
            format: format.clone(),
        }),

        Some(Command::Completions { shell }) => commands::completions::run(*shell),

        None => {
            output::info("No command provided.");
            output::info("Quick start:");
            output::indent(&project_identity::cli_with("add --all"), 2);
            output::indent(&project_identity::cli_with("list"), 2);
            output::indent(&project_identity::cli_with("remove sp"), 2);
            output::info(&format!(
                "Use `{} --help` for full command list.",
                project_identity::BINARY_NAME
            ));
            Err(FlaliasError::Other("No command provided".to_string()))
        }
    }
}
