use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "flalias",
    about = "Shell alias manager for installed flatpak applications",
    long_about = "Generates shell aliases for installed flatpak applications and keeps them in a run-control file",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Target rc file name or path (default: ~/.bashrc)
    #[arg(long, global = true, value_name = "FILE")]
    pub file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add alias(es) for one named app or all installed apps
    Add {
        /// App to alias (alias name, display name or exact application id)
        #[arg(required_unless_present = "all")]
        app: Option<String>,

        /// Alias every installed app
        #[arg(long, conflicts_with = "app")]
        all: bool,
    },

    /// Remove alias(es) from the rc file
    Remove {
        /// Alias name to remove
        #[arg(required_unless_present = "all")]
        alias: Option<String>,

        /// Remove every managed alias line
        #[arg(long, conflicts_with = "alias")]
        all: bool,

        /// Copy the rc file to a timestamped backup before rewriting
        #[arg(long)]
        backup: bool,
    },

    /// List derived alias -> application id pairs without writing
    List {
        /// Output format
        #[arg(long, value_name = "FORMAT", default_value = "table")]
        format: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
