//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const DISPLAY_NAME: &str = "Flalias";
pub const BINARY_NAME: &str = "flalias";
pub const STABLE_PROJECT_ID: &str = "flalias";

/// Default run-control file the tool appends aliases to.
pub const DEFAULT_RC_BASENAME: &str = ".bashrc";

/// Command used inside generated alias lines.
pub const RUNNER: &str = "flatpak run";

/// External lister: binary and subcommand.
pub const LISTER_BINARY: &str = "flatpak";
pub const LISTER_SUBCOMMAND: &str = "list";

pub fn cli_with(suffix: &str) -> String {
    format!("{} {}", BINARY_NAME, suffix)
}
