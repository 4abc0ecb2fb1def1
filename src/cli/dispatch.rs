//! Command dispatch logic extracted from the binary.

use super::args::{Cli, Commands};
use super::handlers::{self, MatrixOptions};
use crate::config::Config;
use crate::exit::CodesimExit;
use anyhow::Result;

/// Loads configuration and executes the parsed command.
///
/// # Errors
/// Returns error if config loading or the command handler fails.
pub fn execute(cli: Cli) -> Result<CodesimExit> {
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(CodesimExit::Success);
    };

    let config = Config::load(cli.config.as_deref())?;

    match command {
        Commands::Compare { a, b, json } => handlers::handle_compare(&config, &a, &b, json),
        Commands::Features { a, b } => handlers::handle_features(&config, &a, &b),
        Commands::Matrix {
            dir,
            extensions,
            threshold,
            json,
        } => handlers::handle_matrix(
            &config,
            MatrixOptions {
                dir: &dir,
                extensions,
                threshold,
                json,
            },
        ),
        Commands::Config => handlers::handle_config(&config),
    }
}
