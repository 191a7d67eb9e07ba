use crate::error::{FlaliasError, Result};
use crate::project_identity::{LISTER_BINARY, LISTER_SUBCOMMAND};
use crate::ui;
use std::process::Command;

/// Run the external lister once and return its raw stdout.
///
/// Blocking, no timeout, no retries. A spawn failure or non-zero exit is
/// fatal to the run.
pub fn list_installed() -> Result<String> {
    if which::which(LISTER_BINARY).is_err() {
        return Err(FlaliasError::DependencyMissing(format!(
            "'{}' was not found in PATH",
            LISTER_BINARY
        )));
    }

    ui::verbose(&format!("Running '{} {}'", LISTER_BINARY, LISTER_SUBCOMMAND));

    let output = Command::new(LISTER_BINARY)
        .arg(LISTER_SUBCOMMAND)
        .output()
        .map_err(|e| FlaliasError::SystemCommandFailed {
            command: format!("{} {}", LISTER_BINARY, LISTER_SUBCOMMAND),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FlaliasError::PackageManagerError(format!(
            "'{} {}' failed: {}",
            LISTER_BINARY,
            LISTER_SUBCOMMAND,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
