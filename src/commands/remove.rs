use crate::error::Result;
use crate::store::{self, RemoveOutcome};
use crate::ui as output;
use crate::utils::paths;
use colored::Colorize;

/// Options for the remove command
pub struct RemoveOptions {
    pub alias: Option<String>,
    pub all: bool,
    pub backup: bool,
    pub file: Option<String>,
}

pub fn run(options: RemoveOptions) -> Result<()> {
    let rc_path = paths::rc_file(options.file.as_deref())?;

    if options.backup {
        let backup_path = store::create_backup(&rc_path)?;
        output::info(&format!("Backup created: {}", backup_path.display()));
    }

    let outcome = if options.all {
        store::remove_all(&rc_path)?
    } else {
        let name = options.alias.as_deref().unwrap_or_default();
        store::remove_alias(&rc_path, name)?
    };

    match outcome {
        RemoveOutcome::Removed(count) => {
            output::success(&format!(
                "Removed {} alias line(s) from {}.",
                count,
                rc_path.display()
            ));
        }
        RemoveOutcome::NotFound => match options.alias.as_deref() {
            Some(name) => output::info(&format!(
                "Alias '{}' not found in {}.",
                name.cyan(),
                rc_path.display()
            )),
            None => output::info(&format!("No managed alias lines in {}.", rc_path.display())),
        },
    }

    Ok(())
}
