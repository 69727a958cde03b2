use clap::Parser;

use crate::{
    commands::{run_command, Cli},
    logging::init_tracing,
};

/// Run the jsonveil CLI application.
///
/// This is the main entry point for the CLI. It parses command-line
/// arguments, initializes tracing, and executes the obfuscation run.
///
/// # Returns
/// Returns `Ok(())` on successful execution, or a `JsonveilError` on failure.
pub fn run() -> jsonveil::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.json, cli.verbose);

    run_command(cli)
}
