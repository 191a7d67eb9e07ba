pub mod cli;
pub mod commands;
pub mod error;
pub mod listing;
pub mod project_identity;
pub mod store;
pub mod system;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run flalias CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
